//! War configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::config::AceRank;
use crate::error::{EngineError, Result};

/// What happens when the two revealed cards have equal value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TiePolicy {
    /// Each player buries `hidden_cards` face down, then reveals one more.
    /// Repeats while the revealed cards keep tying.
    War { hidden_cards: usize },
    /// A fair coin picks the battle winner.
    CoinFlip,
}

impl Default for TiePolicy {
    fn default() -> Self {
        TiePolicy::War { hidden_cards: 3 }
    }
}

/// Settings for a game of War.
///
/// ```
/// use card_table::games::war::{TiePolicy, WarConfig};
/// use card_table::core::AceRank;
///
/// let config = WarConfig::default()
///     .with_tie_policy(TiePolicy::CoinFlip)
///     .with_ace(AceRank::Low)
///     .with_max_rounds(200);
///
/// assert_eq!(config.max_rounds, 200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarConfig {
    pub tie_policy: TiePolicy,

    /// Whether the ace ranks above the king or below the two.
    pub ace: AceRank,

    /// Consecutive wars allowed in one round before the game is called a draw.
    pub max_war_depth: u32,

    /// Safety ceiling; the game is decided on card totals when reached.
    pub max_rounds: u32,

    /// Pause between revealing cards and resolving the round.
    pub resolve_delay_ms: u64,

    /// Seed for the table the game is played on.
    pub seed: u64,
}

impl Default for WarConfig {
    fn default() -> Self {
        Self {
            tie_policy: TiePolicy::default(),
            ace: AceRank::High,
            max_war_depth: 16,
            max_rounds: 1000,
            resolve_delay_ms: 0,
            seed: 0,
        }
    }
}

impl WarConfig {
    #[must_use]
    pub fn with_tie_policy(mut self, policy: TiePolicy) -> Self {
        self.tie_policy = policy;
        self
    }

    #[must_use]
    pub fn with_ace(mut self, ace: AceRank) -> Self {
        self.ace = ace;
        self
    }

    #[must_use]
    pub fn with_max_war_depth(mut self, depth: u32) -> Self {
        self.max_war_depth = depth;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay_ms = delay.as_millis() as u64;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }

    /// Reject settings that could never produce a finished game.
    pub fn validate(&self) -> Result<()> {
        if self.max_rounds == 0 {
            return Err(EngineError::InvalidConfig("max_rounds must be at least 1".into()));
        }
        if let TiePolicy::War { hidden_cards } = self.tie_policy {
            if self.max_war_depth == 0 {
                return Err(EngineError::InvalidConfig(
                    "max_war_depth must be at least 1 with the war tie policy".into(),
                ));
            }
            if hidden_cards > 25 {
                return Err(EngineError::InvalidConfig(format!(
                    "{hidden_cards} hidden cards per war exceeds a 26-card hand"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WarConfig::default();
        assert_eq!(config.tie_policy, TiePolicy::War { hidden_cards: 3 });
        assert_eq!(config.ace, AceRank::High);
        assert_eq!(config.max_war_depth, 16);
        assert_eq!(config.max_rounds, 1000);
        assert!(config.resolve_delay().is_zero());
    }

    #[test]
    fn test_partial_json() {
        let config: WarConfig =
            serde_json::from_str(r#"{"tie_policy": {"kind": "coin_flip"}, "ace": "low"}"#).unwrap();
        assert_eq!(config.tie_policy, TiePolicy::CoinFlip);
        assert_eq!(config.ace, AceRank::Low);
        assert_eq!(config.max_rounds, 1000);

        let war: WarConfig =
            serde_json::from_str(r#"{"tie_policy": {"kind": "war", "hidden_cards": 1}}"#).unwrap();
        assert_eq!(war.tie_policy, TiePolicy::War { hidden_cards: 1 });
    }

    #[test]
    fn test_validate() {
        assert!(WarConfig::default().with_max_rounds(0).validate().is_err());
        assert!(WarConfig::default().with_max_war_depth(0).validate().is_err());
        assert!(WarConfig::default()
            .with_tie_policy(TiePolicy::CoinFlip)
            .with_max_war_depth(0)
            .validate()
            .is_ok());
        assert!(WarConfig::default()
            .with_tie_policy(TiePolicy::War { hidden_cards: 30 })
            .validate()
            .is_err());
    }

    #[test]
    fn test_resolve_delay_builder() {
        let config = WarConfig::default().with_resolve_delay(Duration::from_millis(250));
        assert_eq!(config.resolve_delay_ms, 250);
        assert_eq!(config.resolve_delay(), Duration::from_millis(250));
    }
}
