//! Session configuration.
//!
//! `MindConfig` is immutable for the lifetime of a session. It deserializes
//! with defaults for every field, so a training harness can pass a partial
//! `env_config` mapping.

use serde::{Deserialize, Serialize};

use super::card::RANK_COUNT;
use super::error::ConfigError;
use crate::rules::{DoneRule, ViolationRule};

/// Complete configuration for a [`MindSession`](crate::env::MindSession).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MindConfig {
    /// Number of players (2-255).
    pub players: usize,

    /// Cards dealt to each player per match.
    pub hand_size: usize,

    /// Width of the intention signal. `0` disables signaling.
    pub intention_size: usize,

    /// Consecutive non-plays tolerated per player.
    ///
    /// The absolute limit is this value multiplied by `players`.
    pub stall_limit: usize,

    /// Which cards a play is checked against.
    pub violation_rule: ViolationRule,

    /// When the aggregate termination flag is raised.
    pub done_rule: DoneRule,

    /// Seed for the session RNG until `reset` supplies another.
    pub seed: u64,
}

impl Default for MindConfig {
    fn default() -> Self {
        Self {
            players: 2,
            hand_size: 5,
            intention_size: 0,
            stall_limit: 2,
            violation_rule: ViolationRule::default(),
            done_rule: DoneRule::default(),
            seed: 0,
        }
    }
}

impl MindConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_intention_size(mut self, intention_size: usize) -> Self {
        self.intention_size = intention_size;
        self
    }

    #[must_use]
    pub fn with_stall_limit(mut self, stall_limit: usize) -> Self {
        self.stall_limit = stall_limit;
        self
    }

    #[must_use]
    pub fn with_violation_rule(mut self, rule: ViolationRule) -> Self {
        self.violation_rule = rule;
        self
    }

    #[must_use]
    pub fn with_done_rule(mut self, rule: DoneRule) -> Self {
        self.done_rule = rule;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the configuration can produce a sound deck partition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players < 2 {
            return Err(ConfigError::TooFewPlayers { players: self.players });
        }
        if self.players > 255 {
            return Err(ConfigError::TooManyPlayers { players: self.players });
        }
        if self.hand_size < 1 {
            return Err(ConfigError::EmptyHand);
        }
        if self.stall_limit < 1 {
            return Err(ConfigError::ZeroStallLimit);
        }

        let needed = self.total_cards();
        let available = RANK_COUNT as usize;
        if needed > available {
            return Err(ConfigError::DeckTooSmall { needed, available });
        }

        Ok(())
    }

    /// Cards drawn per match: `hand_size * players`, saturating at `usize::MAX`.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hand_size.saturating_mul(self.players)
    }

    /// Consecutive non-plays after which the match is lost.
    ///
    /// Saturates, so `stall_limit = usize::MAX` never stalls out.
    #[must_use]
    pub fn absolute_stall_limit(&self) -> usize {
        self.stall_limit.saturating_mul(self.players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MindConfig::default();
        assert_eq!(config.players, 2);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.intention_size, 0);
        assert_eq!(config.absolute_stall_limit(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MindConfig::new()
            .with_players(3)
            .with_hand_size(10)
            .with_intention_size(1)
            .with_stall_limit(5)
            .with_done_rule(DoneRule::AllPlayers)
            .with_seed(9);

        assert_eq!(config.total_cards(), 30);
        assert_eq!(config.absolute_stall_limit(), 15);
        assert_eq!(config.done_rule, DoneRule::AllPlayers);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            MindConfig::new().with_players(1).validate(),
            Err(ConfigError::TooFewPlayers { players: 1 })
        );
        assert_eq!(
            MindConfig::new().with_players(256).with_hand_size(0).validate(),
            Err(ConfigError::TooManyPlayers { players: 256 })
        );
        assert_eq!(MindConfig::new().with_hand_size(0).validate(), Err(ConfigError::EmptyHand));
        assert_eq!(
            MindConfig::new().with_stall_limit(0).validate(),
            Err(ConfigError::ZeroStallLimit)
        );
        assert_eq!(
            MindConfig::new().with_players(4).with_hand_size(26).validate(),
            Err(ConfigError::DeckTooSmall { needed: 104, available: 100 })
        );
    }

    #[test]
    fn test_full_pool_is_allowed() {
        assert!(MindConfig::new().with_players(4).with_hand_size(25).validate().is_ok());
    }

    #[test]
    fn test_huge_stall_limit_saturates() {
        let config = MindConfig::new().with_players(4).with_stall_limit(usize::MAX);
        assert!(config.validate().is_ok());
        assert_eq!(config.absolute_stall_limit(), usize::MAX);
    }

    #[test]
    fn test_huge_hand_size_is_rejected() {
        let json = format!(r#"{{"players": 4, "hand_size": {}}}"#, usize::MAX / 2);
        let config: MindConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.total_cards(), usize::MAX);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DeckTooSmall { needed: usize::MAX, available: 100 })
        );
    }

    #[test]
    fn test_partial_deserialization() {
        let config: MindConfig =
            serde_json::from_str(r#"{"players": 3, "hand_size": 10, "stall_limit": 5}"#).unwrap();

        assert_eq!(config.players, 3);
        assert_eq!(config.hand_size, 10);
        assert_eq!(config.intention_size, 0);
        assert_eq!(config.violation_rule, ViolationRule::GlobalMinimum);
    }
}
