//! Game configuration.
//!
//! The engine only reads `max_rounds`. The delays belong to the UI layer
//! (`Session`) and are carried here so one value configures a whole game.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::GameError;

/// Rounds in a standard game.
pub const MAX_ROUNDS: u32 = 5;

/// Default input lockout after a non-final round (milliseconds).
pub const DEFAULT_ROUND_DELAY_MS: u64 = 900;

/// Default pause before the final result is shown (milliseconds).
pub const DEFAULT_GAME_OVER_DELAY_MS: u64 = 800;

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rounds per game (default: 5). Must be positive.
    pub max_rounds: u32,

    /// How long input stays disabled after a non-final round.
    pub round_delay_ms: u64,

    /// How long to wait after the final round before showing the result.
    pub game_over_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
            round_delay_ms: DEFAULT_ROUND_DELAY_MS,
            game_over_delay_ms: DEFAULT_GAME_OVER_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Create a new config with a custom round count.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Create a new config with a custom re-enable delay.
    pub fn with_round_delay_ms(mut self, ms: u64) -> Self {
        self.round_delay_ms = ms;
        self
    }

    /// Create a new config with a custom game-over delay.
    pub fn with_game_over_delay_ms(mut self, ms: u64) -> Self {
        self.game_over_delay_ms = ms;
        self
    }

    /// Create a new config with no display delays at all.
    pub fn without_delays(self) -> Self {
        self.with_round_delay_ms(0).with_game_over_delay_ms(0)
    }

    /// Input lockout after a non-final round.
    #[must_use]
    pub fn round_delay(&self) -> Duration {
        Duration::from_millis(self.round_delay_ms)
    }

    /// Pause before the final result is shown.
    #[must_use]
    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_rounds == 0 {
            return Err(GameError::InvalidConfig("max_rounds must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.max_rounds, 5);
        assert_eq!(config.round_delay(), Duration::from_millis(900));
        assert_eq!(config.game_over_delay(), Duration::from_millis(800));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = GameConfig::default()
            .with_max_rounds(3)
            .with_round_delay_ms(10)
            .with_game_over_delay_ms(20);

        assert_eq!(config.max_rounds, 3);
        assert_eq!(config.round_delay_ms, 10);
        assert_eq!(config.game_over_delay_ms, 20);
    }

    #[test]
    fn test_without_delays() {
        let config = GameConfig::default().without_delays();
        assert_eq!(config.round_delay(), Duration::ZERO);
        assert_eq!(config.game_over_delay(), Duration::ZERO);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = GameConfig::default().with_max_rounds(0);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_serde() {
        let config = GameConfig::default().with_max_rounds(7);
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
