//! # rust-rps
//!
//! A five-round Rock-Paper-Scissors round engine.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Scores and round counters live in a `GameState`
//!    owned by one `RoundEngine`. No globals; any number of games can run
//!    side by side.
//!
//! 2. **Injected Randomness**: The computer's moves come from a
//!    `MoveSource`. Play uses unseeded randomness; tests and replays use a
//!    seed or a fixed script.
//!
//! 3. **Timers Belong to the UI**: The engine is synchronous and knows
//!    nothing about input enablement. `Session` owns the input gate and the
//!    display delays between rounds.
//!
//! ## Modules
//!
//! - `core`: Moves, outcomes, state, RNG, configuration, errors
//! - `rules`: `RoundEngine` and move sources
//! - `present`: `Presenter` trait, messages, text and recording presenters
//! - `session`: Input gate, display timers, play-again, statistics

pub mod core;
pub mod rules;
pub mod present;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Move, RoundOutcome,
    GameState, RoundRecord,
    GameRng, GameRngState,
    GameConfig, MAX_ROUNDS,
    GameError, ParseMoveError,
};

pub use crate::rules::{
    RoundEngine, RoundReport,
    MoveSource, RandomMoves, SeededMoves, ScriptedMoves,
};

pub use crate::present::{Cue, EventLog, Presenter, PresenterEvent, TextPresenter};

pub use crate::session::{Dispatch, InputGate, Session, SessionEvent, SessionStats};
