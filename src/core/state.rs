//! Game state: scores and round counters.
//!
//! ## Invariants
//!
//! - `rounds_played <= max_rounds`
//! - `player_score + computer_score <= rounds_played` (draws score neither)
//! - `max_rounds > 0`
//!
//! `GameState` is a small `Copy` value. The engine owns the live copy and
//! hands out snapshots after every call, so presenters never observe a
//! half-updated state.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::moves::Move;
use super::outcome::RoundOutcome;

/// Scores and round counters for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Rounds the player has won.
    pub player_score: u32,

    /// Rounds the computer has won.
    pub computer_score: u32,

    /// Rounds completed so far, draws included.
    pub rounds_played: u32,

    /// Rounds in this game. Fixed for the lifetime of the game.
    pub max_rounds: u32,
}

impl GameState {
    /// Create a fresh state with all counters zeroed.
    #[must_use]
    pub const fn new(max_rounds: u32) -> Self {
        Self {
            player_score: 0,
            computer_score: 0,
            rounds_played: 0,
            max_rounds,
        }
    }

    /// Check if every round has been played.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.rounds_remaining() == 0
    }

    /// Rounds left before the game ends.
    #[must_use]
    pub fn rounds_remaining(&self) -> u32 {
        self.max_rounds.saturating_sub(self.rounds_played)
    }

    /// Number of drawn rounds so far.
    #[must_use]
    pub fn draws(&self) -> u32 {
        self.rounds_played
            .saturating_sub(self.player_score)
            .saturating_sub(self.computer_score)
    }

    /// The aggregate result, once the game is over.
    #[must_use]
    pub fn final_result(&self) -> Option<RoundOutcome> {
        self.is_over()
            .then(|| RoundOutcome::from_scores(self.player_score, self.computer_score))
    }

    /// Count one completed round.
    pub(crate) fn record(&mut self, outcome: RoundOutcome) {
        self.rounds_played += 1;
        match outcome {
            RoundOutcome::PlayerWins => self.player_score += 1,
            RoundOutcome::ComputerWins => self.computer_score += 1,
            RoundOutcome::Draw => {}
        }
    }

    /// Zero every counter, keeping `max_rounds`.
    pub(crate) fn clear(&mut self) {
        *self = Self::new(self.max_rounds);
    }

    /// Check the state invariants.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_rounds == 0 {
            return Err(GameError::InvalidState("max_rounds must be positive"));
        }
        if self.rounds_played > self.max_rounds {
            return Err(GameError::InvalidState("rounds_played exceeds max_rounds"));
        }
        // u64 so corrupt scores cannot overflow the check itself
        let decided = u64::from(self.player_score) + u64::from(self.computer_score);
        if decided > u64::from(self.rounds_played) {
            return Err(GameError::InvalidState("scores exceed rounds_played"));
        }
        Ok(())
    }

    /// Encode as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`, rejecting invalid states.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        let state: GameState = bincode::deserialize(bytes)?;
        state.validate()?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(super::config::MAX_ROUNDS)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{} after {} / {}",
            self.player_score, self.computer_score, self.rounds_played, self.max_rounds
        )
    }
}

/// One completed round, kept in the engine's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (starts at 1).
    pub round: u32,

    /// The player's move.
    pub player_move: Move,

    /// The computer's move.
    pub computer_move: Move,

    /// Outcome from the player's perspective.
    pub outcome: RoundOutcome,
}
