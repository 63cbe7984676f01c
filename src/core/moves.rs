//! Player and computer moves.
//!
//! ## Beats relation
//!
//! Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
//! Identical moves beat nothing. The relation is total and anti-symmetric
//! over distinct moves: for any two different moves exactly one beats the other.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ParseMoveError;

/// A single Rock-Paper-Scissors move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in index order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Number of distinct moves.
    pub const COUNT: usize = 3;

    /// Get the move at `index` (0 = Rock, 1 = Paper, 2 = Scissors).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Move::Rock),
            1 => Some(Move::Paper),
            2 => Some(Move::Scissors),
            _ => None,
        }
    }

    /// Get the 0-based index of this move.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// The move this one defeats.
    #[must_use]
    pub const fn defeats(self) -> Self {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// The move that defeats this one.
    #[must_use]
    pub const fn defeated_by(self) -> Self {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Check if this move beats `other`.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.defeats() == other
    }

    /// Lowercase name, as shown to the player.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parse `rock`/`paper`/`scissors` or `r`/`p`/`s`, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            _ => Err(ParseMoveError {
                input: s.trim().to_string(),
            }),
        }
    }
}
