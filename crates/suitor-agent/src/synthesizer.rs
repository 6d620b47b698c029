//! Turning weightings into a concrete bouquet.
//!
//! The three dimensions are reconciled by position: each weighting is
//! flattened and the lists are zipped, so the n-th color, size and type
//! together name one candidate flower. Whatever the candidates leave unmet
//! is filled from stock, one unit per in-stock flower per pass.

use suitor_core::{Bouquet, Flower, FlowerCounts, Weightings};
use tracing::trace;

/// Builds bouquets from weightings under a live inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synthesizer {
    target_bias: u32,
    min_target: u32,
    max_size: u32,
}

impl Synthesizer {
    /// Creates a synthesizer.
    ///
    /// Bouquets aim for the color total minus `target_bias`, at least
    /// `min_target` and at most `max_size` flowers.
    #[must_use]
    pub const fn new(target_bias: u32, min_target: u32, max_size: u32) -> Self {
        Self {
            target_bias,
            min_target,
            max_size,
        }
    }

    /// Number of flowers a bouquet built from `weightings` aims for.
    #[must_use]
    pub fn target_size(&self, weightings: &Weightings) -> u32 {
        weightings
            .colors
            .total()
            .saturating_sub(self.target_bias)
            .max(self.min_target)
            .min(self.max_size)
    }

    /// Builds a bouquet, removing its flowers from `inventory`.
    ///
    /// Never takes a flower that is out of stock; the result may be smaller
    /// than the target, or empty.
    pub fn synthesize(&self, weightings: &Weightings, inventory: &mut FlowerCounts) -> Bouquet {
        let mut remaining = self.target_size(weightings);
        let mut bouquet = Bouquet::empty();

        if weightings.is_complete() {
            let colors = weightings.colors.flatten();
            let sizes = weightings.sizes.flatten();
            let types = weightings.types.flatten();
            for ((color, size), kind) in colors.into_iter().zip(sizes).zip(types) {
                if remaining == 0 {
                    break;
                }
                let flower = Flower::new(size, color, kind);
                if inventory.take(&flower) {
                    trace!(%flower, "committed paired flower");
                    bouquet.add(flower, 1);
                    remaining -= 1;
                }
            }
        }

        while remaining > 0 {
            let pass: Vec<Flower> = inventory.in_stock().map(|(flower, _)| flower).collect();
            if pass.is_empty() {
                break;
            }
            for flower in pass {
                if remaining == 0 {
                    break;
                }
                if inventory.take(&flower) {
                    trace!(%flower, "filled from stock");
                    bouquet.add(flower, 1);
                    remaining -= 1;
                }
            }
        }

        bouquet
    }
}
