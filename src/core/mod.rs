//! Core game types: moves, outcomes, state, RNG, configuration, errors.
//!
//! Everything here is plain data. The engine in `rules` is the only code
//! that mutates a `GameState`.

pub mod moves;
pub mod outcome;
pub mod state;
pub mod rng;
pub mod config;
pub mod error;

pub use moves::Move;
pub use outcome::RoundOutcome;
pub use state::{GameState, RoundRecord};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, MAX_ROUNDS};
pub use error::{GameError, ParseMoveError};
