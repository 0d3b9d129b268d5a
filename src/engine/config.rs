//! Tunable game limits

use crate::core::{MAX_ATTEMPTS, TOTAL_ROUNDS, TURN_TIME};
use crate::error::{GameError, Result};

/// Per-game limits
///
/// `Default` gives the standard rules: 6 attempts, 90 seconds, 3 rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: u32,
    pub turn_time: u32,
    pub total_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            turn_time: TURN_TIME,
            total_rounds: TOTAL_ROUNDS,
        }
    }
}

impl GameConfig {
    /// # Errors
    /// `Configuration` if any limit is zero.
    pub fn validate(self) -> Result<Self> {
        if self.max_attempts == 0 {
            return Err(GameError::Configuration(
                "max attempts must be at least 1".to_string(),
            ));
        }
        if self.turn_time == 0 {
            return Err(GameError::Configuration(
                "turn time must be at least 1 second".to_string(),
            ));
        }
        if self.total_rounds == 0 {
            return Err(GameError::Configuration(
                "a game needs at least 1 round".to_string(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_standard_rules() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.turn_time, 90);
        assert_eq!(config.total_rounds, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limits_rejected() {
        for config in [
            GameConfig {
                max_attempts: 0,
                ..GameConfig::default()
            },
            GameConfig {
                turn_time: 0,
                ..GameConfig::default()
            },
            GameConfig {
                total_rounds: 0,
                ..GameConfig::default()
            },
        ] {
            assert!(matches!(
                config.validate(),
                Err(GameError::Configuration(_))
            ));
        }
    }
}
