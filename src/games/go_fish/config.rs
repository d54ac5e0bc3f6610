//! Go Fish configuration.

use serde::{Deserialize, Serialize};

use crate::core::config::AceRank;
use crate::error::{EngineError, Result};

/// Settings for a game of Go Fish.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoFishConfig {
    /// 2-6 players.
    pub player_count: usize,
    /// Cards dealt to each player.
    pub hand_size: usize,
    /// Safety ceiling; the game is decided on books when reached.
    pub max_rounds: u32,
    /// Only affects card values; Go Fish matches on rank.
    pub ace: AceRank,
}

impl Default for GoFishConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            hand_size: 7,
            max_rounds: 1000,
            ace: AceRank::Low,
        }
    }
}

impl GoFishConfig {
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=6).contains(&self.player_count) {
            return Err(EngineError::InvalidConfig(format!(
                "player count must be 2-6, got {}",
                self.player_count
            )));
        }
        if self.hand_size == 0 || self.hand_size * self.player_count >= 52 {
            return Err(EngineError::InvalidConfig(format!(
                "cannot deal {} cards to {} players and keep a draw pile",
                self.hand_size, self.player_count
            )));
        }
        if self.max_rounds == 0 {
            return Err(EngineError::InvalidConfig("max_rounds must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GoFishConfig::default();
        assert_eq!(config.player_count, 4);
        assert_eq!(config.hand_size, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(GoFishConfig::default().with_player_count(1).validate().is_err());
        assert!(GoFishConfig::default().with_player_count(7).validate().is_err());
        assert!(GoFishConfig::default().with_player_count(6).validate().is_ok());
        assert!(GoFishConfig::default().with_hand_size(13).validate().is_err());
        assert!(GoFishConfig::default().with_hand_size(0).validate().is_err());
    }
}
