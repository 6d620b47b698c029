//! The shared flower inventory for one round.
//!
//! Counts never go below zero: [`FlowerCounts::take`] refuses to remove a
//! flower that is out of stock instead of underflowing.

use std::collections::BTreeMap;

use crate::bouquet::Bouquet;
use crate::flower::Flower;

/// Flower → available count.
///
/// Iteration is in [`Flower`] order, which is the inventory order used by
/// greedy fills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowerCounts {
    counts: BTreeMap<Flower, u32>,
}

impl FlowerCounts {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the available count for `flower`.
    pub fn set(&mut self, flower: Flower, count: u32) {
        self.counts.insert(flower, count);
    }

    /// Available count for `flower`.
    #[must_use]
    pub fn count(&self, flower: &Flower) -> u32 {
        self.counts.get(flower).copied().unwrap_or(0)
    }

    /// Total flowers in stock.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Returns true if nothing is in stock.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Removes one `flower` if any is in stock.
    ///
    /// Returns `false` and leaves the inventory untouched otherwise.
    pub fn take(&mut self, flower: &Flower) -> bool {
        match self.counts.get_mut(flower) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Removes every flower of `bouquet`, provided all are in stock.
    ///
    /// Either the whole bouquet is removed or nothing is.
    pub fn take_bouquet(&mut self, bouquet: &Bouquet) -> bool {
        if !self.covers(bouquet) {
            return false;
        }
        for (flower, count) in bouquet.flowers() {
            if let Some(available) = self.counts.get_mut(&flower) {
                *available -= count;
            }
        }
        true
    }

    /// Returns true if every flower of `bouquet` is available in the needed count.
    #[must_use]
    pub fn covers(&self, bouquet: &Bouquet) -> bool {
        bouquet
            .flowers()
            .all(|(flower, count)| self.count(&flower) >= count)
    }

    /// Iterates over flowers with positive stock.
    pub fn in_stock(&self) -> impl Iterator<Item = (Flower, u32)> + '_ {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(flower, count)| (*flower, *count))
    }

    /// Expands the inventory into one entry per available flower.
    #[must_use]
    pub fn flatten(&self) -> Vec<Flower> {
        self.in_stock()
            .flat_map(|(flower, count)| std::iter::repeat_n(flower, count as usize))
            .collect()
    }
}

impl FromIterator<(Flower, u32)> for FlowerCounts {
    fn from_iter<I: IntoIterator<Item = (Flower, u32)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (flower, count) in iter {
            let entry = counts.counts.entry(flower).or_insert(0);
            *entry = entry.saturating_add(count);
        }
        counts
    }
}
