//! Game parameters shared by every suitor.

use serde::{Deserialize, Serialize};

use crate::error::SuitorError;
use crate::feedback::FeedbackEntry;
use crate::suitor::SuitorId;

/// Largest bouquet the environment accepts.
pub const MAX_BOUQUET_SIZE: u32 = 12;

const fn default_max_bouquet_size() -> u32 {
    MAX_BOUQUET_SIZE
}

/// Parameters a suitor is constructed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rounds in the game.
    pub days: u32,
    /// Number of participants, including this suitor.
    pub num_suitors: usize,
    /// This suitor's id, in `0..num_suitors`.
    pub suitor_id: SuitorId,
    /// Upper bound on any single bouquet.
    #[serde(default = "default_max_bouquet_size")]
    pub max_bouquet_size: u32,
}

impl GameConfig {
    /// Creates a config with the default bouquet size limit.
    #[must_use]
    pub const fn new(days: u32, num_suitors: usize, suitor_id: SuitorId) -> Self {
        Self {
            days,
            num_suitors,
            suitor_id,
            max_bouquet_size: MAX_BOUQUET_SIZE,
        }
    }

    /// Parses a config from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, SuitorError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SuitorError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the parameters describe a playable game.
    pub fn validate(&self) -> Result<(), SuitorError> {
        if self.days == 0 {
            return Err(SuitorError::InvalidConfig("days must be at least 1".into()));
        }
        if self.num_suitors < 2 {
            return Err(SuitorError::InvalidConfig(format!(
                "need at least 2 suitors, got {}",
                self.num_suitors
            )));
        }
        if self.suitor_id >= self.num_suitors {
            return Err(SuitorError::InvalidConfig(format!(
                "suitor id {} out of range for {} suitors",
                self.suitor_id, self.num_suitors
            )));
        }
        if self.max_bouquet_size == 0 {
            return Err(SuitorError::InvalidConfig(
                "max bouquet size must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Every participant id except this suitor's, ascending.
    #[must_use]
    pub fn recipients(&self) -> Vec<SuitorId> {
        (0..self.num_suitors)
            .filter(|id| *id != self.suitor_id)
            .collect()
    }

    /// Checks a round's feedback before any of it is applied.
    ///
    /// Every participant needs an entry; recipients need a rank of at least
    /// 1 and a finite score. This suitor's own entry is not inspected.
    pub fn check_feedback(&self, feedback: &[FeedbackEntry]) -> Result<(), SuitorError> {
        if feedback.len() < self.num_suitors {
            return Err(SuitorError::FeedbackLength {
                expected: self.num_suitors,
                actual: feedback.len(),
            });
        }
        for suitor in self.recipients() {
            let entry = &feedback[suitor];
            if entry.rank == 0 {
                return Err(SuitorError::InvalidRank { suitor });
            }
            if !entry.score.is_finite() {
                return Err(SuitorError::InvalidScore { suitor });
            }
        }
        Ok(())
    }
}
