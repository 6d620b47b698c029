//! The contract between the game environment and a suitor.

use crate::bouquet::{Bouquet, Profile};
use crate::error::SuitorError;
use crate::feedback::FeedbackEntry;
use crate::flower::{FlowerColor, FlowerSize, FlowerType};
use crate::inventory::FlowerCounts;

/// Participant id, in `0..num_suitors`.
pub type SuitorId = usize;

/// One allocation: `giver` hands `bouquet` to `recipient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gift {
    /// Suitor that built the bouquet.
    pub giver: SuitorId,
    /// Participant receiving it.
    pub recipient: SuitorId,
    /// The bouquet.
    pub bouquet: Bouquet,
}

impl Gift {
    /// Creates a gift.
    #[must_use]
    pub const fn new(giver: SuitorId, recipient: SuitorId, bouquet: Bouquet) -> Self {
        Self {
            giver,
            recipient,
            bouquet,
        }
    }
}

/// A participant in the courtship game.
///
/// The environment calls [`Suitor::prepare_bouquets`] once per round and
/// [`Suitor::receive_feedback`] once the round is scored. The scoring
/// functions describe the suitor's own hidden preference and must not
/// mutate state.
pub trait Suitor {
    /// This suitor's id.
    fn id(&self) -> SuitorId;

    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Builds one bouquet for every other participant from `flowers`.
    ///
    /// The returned gifts together never exceed `flowers`.
    fn prepare_bouquets(&mut self, flowers: &FlowerCounts) -> Vec<Gift>;

    /// A bouquet this suitor scores exactly 0.
    fn zero_score_bouquet(&self) -> Bouquet;

    /// A bouquet this suitor scores exactly 1.
    fn one_score_bouquet(&self) -> Bouquet;

    /// Contribution of the bouquet's species.
    fn score_types(&self, types: &Profile<FlowerType>) -> f64;

    /// Contribution of the bouquet's colors.
    fn score_colors(&self, colors: &Profile<FlowerColor>) -> f64;

    /// Contribution of the bouquet's sizes.
    fn score_sizes(&self, sizes: &Profile<FlowerSize>) -> f64;

    /// Combined score, as the environment computes it.
    fn score_bouquet(&self, bouquet: &Bouquet) -> f64 {
        self.score_types(&bouquet.types())
            + self.score_colors(&bouquet.colors())
            + self.score_sizes(&bouquet.sizes())
    }

    /// Records how every participant rated this round's bouquets.
    ///
    /// `feedback` is indexed by participant id and includes this suitor's
    /// own entry, which is skipped.
    fn receive_feedback(&mut self, feedback: &[FeedbackEntry]) -> Result<(), SuitorError>;
}
