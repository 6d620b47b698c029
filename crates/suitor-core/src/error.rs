//! Error types for suitor-core.

use thiserror::Error;

use crate::suitor::SuitorId;

/// Errors raised when the game environment violates the suitor contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SuitorError {
    /// Game configuration is inconsistent.
    #[error("invalid game config: {0}")]
    InvalidConfig(String),

    /// Feedback does not cover every participant.
    #[error("feedback has {actual} entries, expected {expected}")]
    FeedbackLength {
        /// Number of participants in the game.
        expected: usize,
        /// Number of entries received.
        actual: usize,
    },

    /// A recipient was ranked 0; ranks start at 1.
    #[error("invalid rank 0 for suitor {suitor}")]
    InvalidRank {
        /// Participant whose entry carried the rank.
        suitor: SuitorId,
    },

    /// A recipient's score was NaN or infinite.
    #[error("non-finite score for suitor {suitor}")]
    InvalidScore {
        /// Participant whose entry carried the score.
        suitor: SuitorId,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
