//! Agent tunables.
//!
//! The defaults reproduce the behavior the agents were tuned with. Every
//! struct deserializes with `#[serde(default)]`, so a JSON file only needs
//! the fields it overrides.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::AgentError;
use crate::synthesizer::Synthesizer;

/// Tunables for [`AdaptiveSuitor`](crate::AdaptiveSuitor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveConfig {
    /// The first informed round is at least `days / bootstrap_min_divisor`.
    pub bootstrap_min_divisor: u32,
    /// The first informed round is at most `days / bootstrap_max_divisor`.
    pub bootstrap_max_divisor: u32,
    /// Smallest random bouquet drawn while bootstrapping.
    pub bootstrap_min_size: u32,
    /// Largest random bouquet drawn while bootstrapping.
    pub bootstrap_max_size: u32,
    /// Lower bound (inclusive) of the per-round target count.
    pub target_min: u32,
    /// Upper bound (exclusive) of the per-round target count.
    pub target_max: u32,
    /// Fewest flowers in the suitor's own favorite bouquet.
    pub favorite_min: u32,
    /// Most flowers in the suitor's own favorite bouquet.
    pub favorite_max: u32,
    /// Subtracted from the color total to size a synthesized bouquet.
    pub target_bias: u32,
    /// Smallest synthesized bouquet target.
    pub min_target: u32,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            bootstrap_min_divisor: 3,
            bootstrap_max_divisor: 2,
            bootstrap_min_size: 1,
            bootstrap_max_size: 10,
            target_min: 4,
            target_max: 8,
            favorite_min: 3,
            favorite_max: 7,
            target_bias: 2,
            min_target: 2,
            seed: None,
        }
    }
}

impl AdaptiveConfig {
    /// Sets a fixed RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a config from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, AgentError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AgentError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every range is non-empty.
    pub fn validate(&self) -> Result<(), AgentError> {
        if self.bootstrap_min_divisor == 0 || self.bootstrap_max_divisor == 0 {
            return Err(AgentError::InvalidConfig(
                "bootstrap divisors must be positive".into(),
            ));
        }
        if self.bootstrap_min_divisor < self.bootstrap_max_divisor {
            return Err(AgentError::InvalidConfig(format!(
                "bootstrap_min_divisor {} must be >= bootstrap_max_divisor {}",
                self.bootstrap_min_divisor, self.bootstrap_max_divisor
            )));
        }
        if self.bootstrap_min_size > self.bootstrap_max_size {
            return Err(AgentError::InvalidConfig(format!(
                "bootstrap size range {}..={} is empty",
                self.bootstrap_min_size, self.bootstrap_max_size
            )));
        }
        if self.target_min >= self.target_max {
            return Err(AgentError::InvalidConfig(format!(
                "target range {}..{} is empty",
                self.target_min, self.target_max
            )));
        }
        if self.favorite_min == 0 || self.favorite_min > self.favorite_max {
            return Err(AgentError::InvalidConfig(format!(
                "favorite size range {}..={} must be non-empty and positive",
                self.favorite_min, self.favorite_max
            )));
        }
        Ok(())
    }

    /// Synthesizer tuned by this config.
    #[must_use]
    pub const fn synthesizer(&self, max_bouquet_size: u32) -> Synthesizer {
        Synthesizer::new(self.target_bias, self.min_target, max_bouquet_size)
    }
}

/// Tunables for [`FixedOrderSuitor`](crate::FixedOrderSuitor).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedOrderConfig {
    /// Smallest random bouquet; the largest is the game's bouquet limit.
    pub min_bouquet_size: u32,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
}

impl FixedOrderConfig {
    /// Sets a fixed RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, AgentError> {
        serde_json::from_str(json).map_err(|e| AgentError::Serialization(e.to_string()))
    }
}

/// Seeded RNG when `seed` is set, entropy otherwise.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}
