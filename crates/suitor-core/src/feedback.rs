//! Per-round feedback delivered by the environment.

use serde::{Deserialize, Serialize};

/// Feedback for the bouquet one participant received this round.
///
/// The environment delivers one entry per participant, indexed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Rank among the bouquets the participant received, starting at 1.
    pub rank: u32,
    /// Score the participant assigned.
    pub score: f64,
    /// Environment-specific payload, ignored by suitors.
    #[serde(default)]
    pub extra: serde_json::Value,
}

impl FeedbackEntry {
    /// Creates an entry with no extra payload.
    #[must_use]
    pub const fn new(rank: u32, score: f64) -> Self {
        Self {
            rank,
            score,
            extra: serde_json::Value::Null,
        }
    }

    /// Rank and score as an [`Outcome`].
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        Outcome {
            rank: self.rank,
            score: self.score,
        }
    }
}

/// Rank and score attached to a bouquet after the round closes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Rank, starting at 1.
    pub rank: u32,
    /// Score.
    pub score: f64,
}

impl Outcome {
    /// Creates an outcome.
    #[must_use]
    pub const fn new(rank: u32, score: f64) -> Self {
        Self { rank, score }
    }

    /// Score divided by rank. Returns 0.0 for a rank of 0.
    #[must_use]
    pub fn normalized_score(&self) -> f64 {
        if self.rank == 0 {
            return 0.0;
        }
        self.score / f64::from(self.rank)
    }
}
