//! Statistics across the games of one session.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Move, RoundOutcome};

/// Tallies kept by a `Session`. Survives play-again.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Games played to the final round.
    pub games_completed: u32,

    /// Games the player won.
    pub player_wins: u32,

    /// Games the computer won.
    pub computer_wins: u32,

    /// Games that ended level.
    pub drawn_games: u32,

    /// Rounds played across all games.
    pub rounds_played: u32,

    /// How often the player chose each move.
    pub player_moves: FxHashMap<Move, u32>,
}

impl SessionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one round.
    pub fn record_round(&mut self, player_move: Move) {
        self.rounds_played += 1;
        *self.player_moves.entry(player_move).or_insert(0) += 1;
    }

    /// Count one finished game.
    pub fn record_game(&mut self, result: RoundOutcome) {
        self.games_completed += 1;
        match result {
            RoundOutcome::PlayerWins => self.player_wins += 1,
            RoundOutcome::ComputerWins => self.computer_wins += 1,
            RoundOutcome::Draw => self.drawn_games += 1,
        }
    }

    /// Times the player chose `mv`.
    #[must_use]
    pub fn move_count(&self, mv: Move) -> u32 {
        self.player_moves.get(&mv).copied().unwrap_or(0)
    }

    /// The player's most frequent move, ties broken by `Move` order.
    #[must_use]
    pub fn favourite_move(&self) -> Option<Move> {
        Move::ALL
            .into_iter()
            .filter(|&m| self.move_count(m) > 0)
            .max_by_key(|&m| (self.move_count(m), std::cmp::Reverse(m)))
    }

    /// Fraction of completed games the player won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_completed == 0 {
            0.0
        } else {
            self.player_wins as f64 / self.games_completed as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round() {
        let mut stats = SessionStats::new();
        stats.record_round(Move::Rock);
        stats.record_round(Move::Rock);
        stats.record_round(Move::Paper);

        assert_eq!(stats.rounds_played, 3);
        assert_eq!(stats.move_count(Move::Rock), 2);
        assert_eq!(stats.move_count(Move::Scissors), 0);
        assert_eq!(stats.favourite_move(), Some(Move::Rock));
    }

    #[test]
    fn test_favourite_move_tie_prefers_first() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.favourite_move(), None);

        stats.record_round(Move::Scissors);
        stats.record_round(Move::Paper);
        assert_eq!(stats.favourite_move(), Some(Move::Paper));
    }

    #[test]
    fn test_record_game_and_win_rate() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.win_rate(), 0.0);

        stats.record_game(RoundOutcome::PlayerWins);
        stats.record_game(RoundOutcome::ComputerWins);
        stats.record_game(RoundOutcome::Draw);
        stats.record_game(RoundOutcome::PlayerWins);

        assert_eq!(stats.games_completed, 4);
        assert_eq!(stats.player_wins, 2);
        assert_eq!(stats.computer_wins, 1);
        assert_eq!(stats.drawn_games, 1);
        assert!((stats.win_rate() - 0.5).abs() < f64::EPSILON);
    }
}
