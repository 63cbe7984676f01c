//! The round engine: the only code that mutates a `GameState`.
//!
//! The engine runs synchronously inside whatever callback the UI layer
//! uses for input. It has no notion of timers or input enablement; the
//! caller must check `is_game_over()` before dispatching a round.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::source::{MoveSource, RandomMoves};
use crate::core::{GameConfig, GameError, GameState, Move, RoundOutcome, RoundRecord};

/// Everything a presenter needs after one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// The player's move.
    pub player_move: Move,

    /// The move the computer answered with.
    pub computer_move: Move,

    /// Outcome from the player's perspective.
    pub outcome: RoundOutcome,

    /// State after the round was counted.
    pub state: GameState,
}

/// Holds one game and plays its rounds.
///
/// The computer's moves come from `S`; the default is unseeded uniform
/// randomness. Use `SeededMoves` or `ScriptedMoves` for reproducible games.
///
/// ```
/// use rust_rps::core::{Move, RoundOutcome};
/// use rust_rps::rules::{RoundEngine, ScriptedMoves};
///
/// let mut engine = RoundEngine::with_source(ScriptedMoves::always(Move::Scissors));
/// let report = engine.play_round(Move::Rock).unwrap();
/// assert_eq!(report.outcome, RoundOutcome::PlayerWins);
/// assert_eq!(report.state.player_score, 1);
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine<S = RandomMoves> {
    config: GameConfig,
    state: GameState,
    history: Vector<RoundRecord>,
    source: S,
}

impl RoundEngine<RandomMoves> {
    /// A standard five-round game against uniform random moves.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(RandomMoves)
    }
}

impl Default for RoundEngine<RandomMoves> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSource> RoundEngine<S> {
    /// A standard five-round game against `source`.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        let config = GameConfig::default();
        Self {
            state: GameState::new(config.max_rounds),
            config,
            history: Vector::new(),
            source,
        }
    }

    /// A game with custom configuration.
    pub fn with_config(config: GameConfig, source: S) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config.max_rounds),
            config,
            history: Vector::new(),
            source,
        })
    }

    /// Resume a game from a saved state.
    ///
    /// The state must be valid and agree with `config.max_rounds`.
    /// Round history is not part of a snapshot and starts empty.
    pub fn restore(config: GameConfig, state: GameState, source: S) -> Result<Self, GameError> {
        config.validate()?;
        state.validate()?;
        if state.max_rounds != config.max_rounds {
            return Err(GameError::InvalidState("max_rounds differs from config"));
        }
        Ok(Self {
            config,
            state,
            history: Vector::new(),
            source,
        })
    }

    /// Play one round.
    ///
    /// Fails with `GameAlreadyOver`, leaving the state untouched, once
    /// every round has been played.
    pub fn play_round(&mut self, player_move: Move) -> Result<RoundReport, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let computer_move = self.source.next_move();
        let outcome = RoundOutcome::decide(player_move, computer_move);
        self.state.record(outcome);
        self.history.push_back(RoundRecord {
            round: self.state.rounds_played,
            player_move,
            computer_move,
            outcome,
        });

        log::debug!(
            "round {}/{}: {} vs {} -> {:?} ({}-{})",
            self.state.rounds_played,
            self.state.max_rounds,
            player_move,
            computer_move,
            outcome,
            self.state.player_score,
            self.state.computer_score,
        );

        if self.is_game_over() {
            log::info!(
                "game over: {:?} {} to {}",
                RoundOutcome::from_scores(self.state.player_score, self.state.computer_score),
                self.state.player_score,
                self.state.computer_score,
            );
        }

        Ok(RoundReport {
            player_move,
            computer_move,
            outcome,
            state: self.state,
        })
    }

    /// Check if every round has been played.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    /// The aggregate result of a finished game.
    ///
    /// Fails with `GameNotOver` until the last round has been played.
    pub fn final_result(&self) -> Result<RoundOutcome, GameError> {
        self.state.final_result().ok_or(GameError::GameNotOver)
    }

    /// Start over: zero the scores and round counter, clear the history.
    pub fn reset(&mut self) -> GameState {
        self.state.clear();
        self.history.clear();
        log::info!("game reset ({} rounds)", self.state.max_rounds);
        self.state
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Rounds played since the last reset, oldest first.
    ///
    /// Cloning the returned vector is O(1).
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// Game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The computer's move source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}
