//! Bouquets and per-dimension attribute profiles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::flower::{Attribute, Flower, FlowerColor, FlowerSize, FlowerType};

/// A multiset of flowers given to one recipient in one round.
///
/// Zero counts are permitted and contribute nothing to [`Bouquet::size`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bouquet {
    flowers: BTreeMap<Flower, u32>,
}

impl Bouquet {
    /// Creates an empty bouquet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a bouquet from explicit flower counts.
    #[must_use]
    pub fn from_counts(counts: impl IntoIterator<Item = (Flower, u32)>) -> Self {
        let mut bouquet = Self::empty();
        for (flower, count) in counts {
            bouquet.add(flower, count);
        }
        bouquet
    }

    /// Adds `count` copies of `flower`.
    pub fn add(&mut self, flower: Flower, count: u32) {
        let entry = self.flowers.entry(flower).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// Returns how many copies of `flower` the bouquet holds.
    #[must_use]
    pub fn count(&self, flower: &Flower) -> u32 {
        self.flowers.get(flower).copied().unwrap_or(0)
    }

    /// Total number of flowers.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.flowers.values().sum()
    }

    /// Returns true if the bouquet holds no flowers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Iterates over flowers with a positive count.
    pub fn flowers(&self) -> impl Iterator<Item = (Flower, u32)> + '_ {
        self.flowers
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(flower, count)| (*flower, *count))
    }

    /// Histogram of this bouquet along dimension `A`.
    #[must_use]
    pub fn attribute_profile<A: Attribute>(&self) -> Profile<A> {
        let mut profile = Profile::new();
        for (flower, count) in self.flowers() {
            profile.add(A::of(&flower), count);
        }
        profile
    }

    /// Color histogram.
    #[must_use]
    pub fn colors(&self) -> Profile<FlowerColor> {
        self.attribute_profile()
    }

    /// Size histogram.
    #[must_use]
    pub fn sizes(&self) -> Profile<FlowerSize> {
        self.attribute_profile()
    }

    /// Species histogram.
    #[must_use]
    pub fn types(&self) -> Profile<FlowerType> {
        self.attribute_profile()
    }

    /// All three histograms at once.
    #[must_use]
    pub fn profile(&self) -> BouquetProfile {
        BouquetProfile {
            colors: self.colors(),
            sizes: self.sizes(),
            types: self.types(),
        }
    }
}

impl FromIterator<Flower> for Bouquet {
    fn from_iter<I: IntoIterator<Item = Flower>>(iter: I) -> Self {
        let mut bouquet = Self::empty();
        for flower in iter {
            bouquet.add(flower, 1);
        }
        bouquet
    }
}

/// Attribute value → count for one dimension of a bouquet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile<A: Ord> {
    counts: BTreeMap<A, u32>,
}

impl<A: Ord> Default for Profile<A> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl<A: Attribute> Profile<A> {
    /// Creates an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` occurrences of `value`.
    pub fn add(&mut self, value: A, count: u32) {
        let entry = self.counts.entry(value).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// Count for `value`, zero when absent.
    #[must_use]
    pub fn get(&self, value: A) -> u32 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Number of values present, including zero counts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no value is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(value, count)` in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (A, u32)> + '_ {
        self.counts.iter().map(|(value, count)| (*value, *count))
    }

    /// The value with the largest count; ties resolve to the earliest value.
    #[must_use]
    pub fn dominant(&self) -> Option<A> {
        let mut best: Option<(A, u32)> = None;
        for (value, count) in self.iter() {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
    }
}

impl<A: Attribute> FromIterator<(A, u32)> for Profile<A> {
    fn from_iter<I: IntoIterator<Item = (A, u32)>>(iter: I) -> Self {
        let mut profile = Self::new();
        for (value, count) in iter {
            profile.add(value, count);
        }
        profile
    }
}

/// The three attribute histograms of one bouquet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BouquetProfile {
    /// Color histogram.
    pub colors: Profile<FlowerColor>,
    /// Size histogram.
    pub sizes: Profile<FlowerSize>,
    /// Species histogram.
    pub types: Profile<FlowerType>,
}

impl BouquetProfile {
    /// Selects the histogram for dimension `A`.
    #[must_use]
    pub fn get<A: Attribute>(&self) -> &Profile<A> {
        A::profile_of(self)
    }
}
