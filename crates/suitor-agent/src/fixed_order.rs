//! Baseline suitor with a fixed hidden preference and random gifts.

use std::collections::BTreeMap;

use rand::Rng;
use rand::rngs::StdRng;
use suitor_core::{
    Bouquet, FeedbackEntry, FlowerColor, FlowerCounts, FlowerSize, FlowerType, GameConfig, Gift,
    Profile, Suitor, SuitorError, SuitorId,
};
use tracing::{debug, trace};

use crate::config::{FixedOrderConfig, rng_from_seed};
use crate::error::AgentError;
use crate::preference::{PreferenceOrder, rank_score};
use crate::priority::{RankedRecipient, rank_recipients};
use crate::sampler::sample_bouquet;

/// Suitor that scores by a permutation drawn once and sends random bouquets,
/// serving the recipients that rated it best first.
#[derive(Debug)]
pub struct FixedOrderSuitor {
    game: GameConfig,
    config: FixedOrderConfig,
    rng: StdRng,
    order: PreferenceOrder,
    sent: BTreeMap<SuitorId, Bouquet>,
    rounds: Vec<Vec<RankedRecipient>>,
}

impl FixedOrderSuitor {
    /// Creates a suitor with a random preference order.
    pub fn new(game: GameConfig, config: FixedOrderConfig) -> Result<Self, AgentError> {
        game.validate()?;
        let mut rng = rng_from_seed(config.seed);
        let order = PreferenceOrder::random(&mut rng);
        debug!(suitor = game.suitor_id, ?order, "fixed-order suitor ready");
        Ok(Self {
            game,
            config,
            rng,
            order,
            sent: BTreeMap::new(),
            rounds: Vec::new(),
        })
    }

    /// Creates a suitor with an explicit preference order.
    pub fn with_order(
        game: GameConfig,
        config: FixedOrderConfig,
        order: PreferenceOrder,
    ) -> Result<Self, AgentError> {
        game.validate()?;
        Ok(Self {
            rng: rng_from_seed(config.seed),
            game,
            config,
            order,
            sent: BTreeMap::new(),
            rounds: Vec::new(),
        })
    }

    /// The hidden preference order.
    #[must_use]
    pub const fn order(&self) -> &PreferenceOrder {
        &self.order
    }

    /// The bouquet most recently sent to `recipient`.
    #[must_use]
    pub fn last_sent(&self, recipient: SuitorId) -> Option<&Bouquet> {
        self.sent.get(&recipient)
    }

    /// Recipients in the order the next round will serve them.
    #[must_use]
    pub fn priority(&self) -> Vec<SuitorId> {
        self.rounds.last().map_or_else(
            || self.game.recipients(),
            |ranked| ranked.iter().map(|r| r.recipient).collect(),
        )
    }

    /// Every ranked round received so far, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &[Vec<RankedRecipient>] {
        &self.rounds
    }
}

impl Suitor for FixedOrderSuitor {
    fn id(&self) -> SuitorId {
        self.game.suitor_id
    }

    fn name(&self) -> &str {
        "fixed-order"
    }

    fn prepare_bouquets(&mut self, flowers: &FlowerCounts) -> Vec<Gift> {
        let mut inventory = flowers.clone();
        let priority = self.priority();
        let mut gifts = Vec::with_capacity(priority.len());

        for recipient in priority {
            let upper = self.game.max_bouquet_size.min(inventory.total());
            let lower = self.config.min_bouquet_size.min(upper);
            let size = self.rng.gen_range(lower..=upper);
            let bouquet = sample_bouquet(&mut inventory, size, &mut self.rng);
            debug!(recipient, size = bouquet.size(), "sending random bouquet");
            self.sent.insert(recipient, bouquet.clone());
            gifts.push(Gift::new(self.game.suitor_id, recipient, bouquet));
        }
        gifts
    }

    fn zero_score_bouquet(&self) -> Bouquet {
        Bouquet::from_counts([(self.order.least_preferred(), 1)])
    }

    fn one_score_bouquet(&self) -> Bouquet {
        Bouquet::from_counts([(self.order.most_preferred(), self.game.max_bouquet_size)])
    }

    fn score_types(&self, types: &Profile<FlowerType>) -> f64 {
        rank_score(self.order.types(), types, self.game.max_bouquet_size)
    }

    fn score_colors(&self, colors: &Profile<FlowerColor>) -> f64 {
        rank_score(self.order.colors(), colors, self.game.max_bouquet_size)
    }

    fn score_sizes(&self, sizes: &Profile<FlowerSize>) -> f64 {
        rank_score(self.order.sizes(), sizes, self.game.max_bouquet_size)
    }

    fn receive_feedback(&mut self, feedback: &[FeedbackEntry]) -> Result<(), SuitorError> {
        self.game.check_feedback(feedback)?;
        let ranked = rank_recipients(feedback, &self.game.recipients());
        for entry in &ranked {
            trace!(
                recipient = entry.recipient,
                sent = self.sent.get(&entry.recipient).map(Bouquet::size),
                normalized_score = entry.normalized_score,
                "bouquet rated"
            );
        }
        debug!(
            suitor = self.game.suitor_id,
            leader = ranked.first().map(|r| r.recipient),
            "ranked recipients"
        );
        self.rounds.push(ranked);
        Ok(())
    }
}
