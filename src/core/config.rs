//! Match configuration.
//!
//! The defaults are the standard rules: first to 3 points, round limit 5.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Score that ends the match as soon as either side reaches it.
    pub target_score: u32,

    /// Round limit. An advance made while the round number is greater than
    /// this ends the match, so with the default of 5 a sixth round is still
    /// played before the limit bites.
    pub max_rounds: u32,

    /// Seed for the match RNG.
    /// Same seed and same moves produce the same match.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            target_score: 3,
            max_rounds: 5,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Set the score that wins the match.
    #[must_use]
    pub fn with_target_score(mut self, score: u32) -> Self {
        self.target_score = score;
        self
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the limits describe a playable match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_score == 0 {
            return Err(ConfigError::ZeroTargetScore);
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroMaxRounds);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.target_score, 3);
        assert_eq!(config.max_rounds, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_and_validate() {
        let config = MatchConfig::default().with_target_score(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTargetScore));

        let config = MatchConfig::default().with_max_rounds(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxRounds));

        let config = MatchConfig::default().with_seed(7).with_max_rounds(9);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_rounds, 9);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"seed": 99}"#).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.target_score, 3);
        assert_eq!(config.max_rounds, 5);
    }
}
