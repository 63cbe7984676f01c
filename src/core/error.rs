//! Error types for the round engine.

use thiserror::Error;

/// Errors returned by the round engine and its snapshot codec.
///
/// All variants are caller-correctable: check `is_game_over()` before
/// dispatching a round and the engine never returns the first two.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("the game is over; reset before playing another round")]
    GameAlreadyOver,
    #[error("the game is not over yet")]
    GameNotOver,
    #[error("invalid game configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("invalid game state: {0}")]
    InvalidState(&'static str),
    #[error("failed to decode game state")]
    Decode(#[from] bincode::Error),
}

/// Error returned when text does not name a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognised move {input:?}; expected rock, paper or scissors")]
pub struct ParseMoveError {
    /// The rejected input, trimmed.
    pub input: String,
}
