//! Serving order for recipients.
//!
//! When stock is scarce, recipients served first get the pick of it. The
//! order is descending `score / rank` from the previous round.

use serde::{Deserialize, Serialize};
use suitor_core::{FeedbackEntry, SuitorId};

/// A recipient and how well last round's bouquet landed with them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedRecipient {
    /// Recipient id.
    pub recipient: SuitorId,
    /// Score divided by rank.
    pub normalized_score: f64,
}

/// Ranks `recipients` by descending `score / rank`.
///
/// The sort is stable: ties keep the order of `recipients`. Recipients
/// without a feedback entry are ranked with a normalized score of 0.
#[must_use]
pub fn rank_recipients(feedback: &[FeedbackEntry], recipients: &[SuitorId]) -> Vec<RankedRecipient> {
    let mut ranked: Vec<RankedRecipient> = recipients
        .iter()
        .map(|&recipient| RankedRecipient {
            recipient,
            normalized_score: feedback
                .get(recipient)
                .map_or(0.0, |entry| entry.outcome().normalized_score()),
        })
        .collect();
    ranked.sort_by(|a, b| b.normalized_score.total_cmp(&a.normalized_score));
    ranked
}
