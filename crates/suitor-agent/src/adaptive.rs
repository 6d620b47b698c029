//! Suitor that learns each recipient's taste by regression.
//!
//! The game opens with a bootstrap phase of random bouquets whose length is
//! drawn at construction. Afterwards every recipient with feedback gets a
//! bouquet synthesized from a per-recipient regression estimate.

use std::collections::BTreeMap;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use suitor_core::{
    Bouquet, BouquetProfile, Dimension, FeedbackEntry, Flower, FlowerColor, FlowerCounts,
    FlowerSize, FlowerType, GameConfig, Gift, Profile, Suitor, SuitorError, SuitorId,
};
use tracing::{debug, warn};

use crate::config::{AdaptiveConfig, rng_from_seed};
use crate::error::AgentError;
use crate::estimator::{PredictedScoreComparator, WeightingComparator, estimate_with};
use crate::history::RecipientHistory;
use crate::preference::similarity;
use crate::sampler::sample_bouquet;
use crate::synthesizer::Synthesizer;

/// Regression-driven suitor.
#[derive(Debug)]
pub struct AdaptiveSuitor {
    game: GameConfig,
    config: AdaptiveConfig,
    rng: StdRng,
    day: u32,
    informed_from_day: u32,
    favorite: Bouquet,
    favorite_profile: BouquetProfile,
    recipients: Vec<SuitorId>,
    histories: BTreeMap<SuitorId, RecipientHistory>,
    synthesizer: Synthesizer,
    comparator: Box<dyn WeightingComparator>,
}

impl AdaptiveSuitor {
    /// Creates a suitor, drawing its bootstrap length and favorite bouquet.
    pub fn new(game: GameConfig, config: AdaptiveConfig) -> Result<Self, AgentError> {
        game.validate()?;
        config.validate()?;

        let mut rng = rng_from_seed(config.seed);
        let earliest = game.days / config.bootstrap_min_divisor;
        let latest = game.days / config.bootstrap_max_divisor;
        let informed_from_day = rng.gen_range(earliest..=latest);

        let all_flowers: Vec<Flower> = Flower::all().collect();
        let copies = rng.gen_range(config.favorite_min..=config.favorite_max);
        let mut favorite = Bouquet::empty();
        for _ in 0..copies {
            if let Some(flower) = all_flowers.choose(&mut rng) {
                favorite.add(*flower, 1);
            }
        }
        let favorite_profile = favorite.profile();

        debug!(
            suitor = game.suitor_id,
            informed_from_day,
            favorite_size = favorite.size(),
            "adaptive suitor ready"
        );

        Ok(Self {
            recipients: game.recipients(),
            synthesizer: config.synthesizer(game.max_bouquet_size),
            game,
            config,
            rng,
            day: 0,
            informed_from_day,
            favorite,
            favorite_profile,
            histories: BTreeMap::new(),
            comparator: Box::new(PredictedScoreComparator),
        })
    }

    /// Replaces the learned-versus-historical tie-break.
    #[must_use]
    pub fn with_comparator(mut self, comparator: impl WeightingComparator + 'static) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Rounds played so far.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// First round that uses learned estimates.
    #[must_use]
    pub const fn informed_from_day(&self) -> u32 {
        self.informed_from_day
    }

    /// The bouquet this suitor scores 1.
    #[must_use]
    pub const fn favorite(&self) -> &Bouquet {
        &self.favorite
    }

    /// Everything sent to `recipient` so far.
    #[must_use]
    pub fn history(&self, recipient: SuitorId) -> Option<&RecipientHistory> {
        self.histories.get(&recipient)
    }

    fn random_bouquet(&mut self, inventory: &mut FlowerCounts) -> Bouquet {
        let upper = self
            .config
            .bootstrap_max_size
            .min(self.game.max_bouquet_size)
            .max(self.config.bootstrap_min_size);
        let size = self
            .rng
            .gen_range(self.config.bootstrap_min_size..=upper)
            .min(inventory.total());
        sample_bouquet(inventory, size, &mut self.rng)
    }

    fn informed_bouquet(&mut self, recipient: SuitorId, inventory: &mut FlowerCounts) -> Bouquet {
        let Some(history) = self
            .histories
            .get(&recipient)
            .filter(|history| history.completed_count() > 0)
        else {
            debug!(recipient, "no feedback yet, sending a random bouquet");
            return self.random_bouquet(inventory);
        };

        let estimate = estimate_with(history, target_drawer(&mut self.rng, &self.config));
        let targets = estimate.targets;
        let choice = self.comparator.choose(&estimate);
        let weightings = estimate.into_weightings(choice);
        debug!(
            recipient,
            ?targets,
            ?choice,
            colors = ?weightings.colors,
            sizes = ?weightings.sizes,
            types = ?weightings.types,
            "estimated weightings"
        );
        self.synthesizer.synthesize(&weightings, inventory)
    }
}

/// Draws each dimension's target independently from the configured range.
fn target_drawer<'a>(
    rng: &'a mut StdRng,
    config: &'a AdaptiveConfig,
) -> impl FnMut(Dimension) -> u32 + 'a {
    move |_| rng.gen_range(config.target_min..config.target_max)
}

impl Suitor for AdaptiveSuitor {
    fn id(&self) -> SuitorId {
        self.game.suitor_id
    }

    fn name(&self) -> &str {
        "adaptive"
    }

    fn prepare_bouquets(&mut self, flowers: &FlowerCounts) -> Vec<Gift> {
        self.day += 1;
        let informed = self.day >= self.informed_from_day;
        debug!(
            suitor = self.game.suitor_id,
            day = self.day,
            informed,
            stock = flowers.total(),
            "preparing bouquets"
        );

        let mut inventory = flowers.clone();
        let mut order = self.recipients.clone();
        order.shuffle(&mut self.rng);

        let mut gifts = Vec::with_capacity(order.len());
        for recipient in order {
            let bouquet = if informed {
                self.informed_bouquet(recipient, &mut inventory)
            } else {
                self.random_bouquet(&mut inventory)
            };
            self.histories
                .entry(recipient)
                .or_default()
                .record_sent(bouquet.profile());
            gifts.push(Gift::new(self.game.suitor_id, recipient, bouquet));
        }
        gifts
    }

    fn zero_score_bouquet(&self) -> Bouquet {
        Bouquet::empty()
    }

    fn one_score_bouquet(&self) -> Bouquet {
        self.favorite.clone()
    }

    fn score_types(&self, types: &Profile<FlowerType>) -> f64 {
        similarity(&self.favorite_profile.types, types)
    }

    fn score_colors(&self, colors: &Profile<FlowerColor>) -> f64 {
        similarity(&self.favorite_profile.colors, colors)
    }

    fn score_sizes(&self, sizes: &Profile<FlowerSize>) -> f64 {
        similarity(&self.favorite_profile.sizes, sizes)
    }

    fn receive_feedback(&mut self, feedback: &[FeedbackEntry]) -> Result<(), SuitorError> {
        self.game.check_feedback(feedback)?;
        for &recipient in &self.recipients {
            let outcome = feedback[recipient].outcome();
            let recorded = self
                .histories
                .get_mut(&recipient)
                .is_some_and(|history| history.record_outcome(outcome));
            if !recorded {
                warn!(recipient, "feedback without a pending bouquet, ignoring");
            }
        }
        Ok(())
    }
}
