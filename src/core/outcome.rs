//! Round and game outcomes, always from the player's perspective.

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Result of comparing two moves, or two final scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    PlayerWins,
    ComputerWins,
    Draw,
}

impl RoundOutcome {
    /// Decide a round.
    ///
    /// ```
    /// use rust_rps::core::{Move, RoundOutcome};
    ///
    /// assert_eq!(RoundOutcome::decide(Move::Rock, Move::Scissors), RoundOutcome::PlayerWins);
    /// assert_eq!(RoundOutcome::decide(Move::Rock, Move::Paper), RoundOutcome::ComputerWins);
    /// assert_eq!(RoundOutcome::decide(Move::Rock, Move::Rock), RoundOutcome::Draw);
    /// ```
    #[must_use]
    pub fn decide(player: Move, computer: Move) -> Self {
        if player == computer {
            RoundOutcome::Draw
        } else if player.beats(computer) {
            RoundOutcome::PlayerWins
        } else {
            RoundOutcome::ComputerWins
        }
    }

    /// Decide a game from its final scores.
    #[must_use]
    pub fn from_scores(player_score: u32, computer_score: u32) -> Self {
        match player_score.cmp(&computer_score) {
            std::cmp::Ordering::Greater => RoundOutcome::PlayerWins,
            std::cmp::Ordering::Less => RoundOutcome::ComputerWins,
            std::cmp::Ordering::Equal => RoundOutcome::Draw,
        }
    }
}
