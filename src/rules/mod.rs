//! Round engine and computer move sources.
//!
//! `RoundEngine` owns one game's state and applies the beats relation.
//! `MoveSource` is the seam for the computer's choices:
//! - `RandomMoves`: unseeded, the default
//! - `SeededMoves`: reproducible from a seed
//! - `ScriptedMoves`: a fixed sequence, for tests and replays

pub mod engine;
pub mod source;

pub use engine::{RoundEngine, RoundReport};
pub use source::{MoveSource, RandomMoves, ScriptedMoves, SeededMoves};
