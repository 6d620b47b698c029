//! Per-recipient memory of sent bouquets and how they were received.
//!
//! A record is created with the profile of the bouquet when it is sent and
//! completed when the round's feedback arrives. Records are never pruned.

use serde::{Deserialize, Serialize};
use suitor_core::{BouquetProfile, Outcome};

/// One sent bouquet, with its outcome once known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Attribute histograms of the bouquet sent.
    pub profile: BouquetProfile,
    /// Rank and score, absent until feedback arrives.
    pub outcome: Option<Outcome>,
}

impl FeedbackRecord {
    /// Returns true once rank and score are attached.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Everything sent to one recipient so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipientHistory {
    records: Vec<FeedbackRecord>,
}

impl RecipientHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers a bouquet that was just sent.
    pub fn record_sent(&mut self, profile: BouquetProfile) {
        self.records.push(FeedbackRecord {
            profile,
            outcome: None,
        });
    }

    /// Attaches `outcome` to the most recent bouquet.
    ///
    /// Returns `false` if there is no pending bouquet to attach it to.
    pub fn record_outcome(&mut self, outcome: Outcome) -> bool {
        match self.records.last_mut() {
            Some(record) if record.outcome.is_none() => {
                record.outcome = Some(outcome);
                true
            }
            _ => false,
        }
    }

    /// All records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    /// Records with an outcome, oldest first.
    pub fn completed(&self) -> impl Iterator<Item = (&BouquetProfile, Outcome)> + '_ {
        self.records
            .iter()
            .filter_map(|record| record.outcome.map(|outcome| (&record.profile, outcome)))
    }

    /// Number of records with an outcome.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }

    /// Total records, pending included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing was ever sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The completed record with the highest score; ties go to the latest.
    #[must_use]
    pub fn best(&self) -> Option<(&BouquetProfile, Outcome)> {
        let mut best: Option<(&BouquetProfile, Outcome)> = None;
        for (profile, outcome) in self.completed() {
            if best.is_none_or(|(_, top)| outcome.score >= top.score) {
                best = Some((profile, outcome));
            }
        }
        best
    }
}
