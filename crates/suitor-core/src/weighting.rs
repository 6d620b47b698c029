//! Desired counts per attribute value.
//!
//! A [`Weighting`] is an ordered list: synthesizers flatten it in order, so
//! the position of an entry matters as much as its count.

use serde::{Deserialize, Serialize};

use crate::bouquet::{BouquetProfile, Profile};
use crate::flower::{Attribute, FlowerColor, FlowerSize, FlowerType};

/// Ordered `(value, count)` pairs for one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weighting<A> {
    entries: Vec<(A, u32)>,
}

impl<A> Default for Weighting<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<A: Attribute> Weighting<A> {
    /// Creates an empty weighting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All `count` units on a single value.
    #[must_use]
    pub fn single(value: A, count: u32) -> Self {
        Self {
            entries: vec![(value, count)],
        }
    }

    /// Copies a bouquet histogram, in attribute order.
    #[must_use]
    pub fn from_profile(profile: &Profile<A>) -> Self {
        Self {
            entries: profile.iter().collect(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, value: A, count: u32) {
        self.entries.push((value, count));
    }

    /// Count for `value`, summed over duplicate entries.
    #[must_use]
    pub fn count(&self, value: A) -> u32 {
        self.entries
            .iter()
            .filter(|(v, _)| *v == value)
            .map(|(_, c)| *c)
            .sum()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, c)| *c).sum()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (A, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Repeats each value by its count, preserving entry order.
    #[must_use]
    pub fn flatten(&self) -> Vec<A> {
        self.entries
            .iter()
            .flat_map(|(value, count)| std::iter::repeat_n(*value, *count as usize))
            .collect()
    }
}

impl<A: Attribute> FromIterator<(A, u32)> for Weighting<A> {
    fn from_iter<I: IntoIterator<Item = (A, u32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// One weighting per dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weightings {
    /// Desired colors.
    pub colors: Weighting<FlowerColor>,
    /// Desired sizes.
    pub sizes: Weighting<FlowerSize>,
    /// Desired species.
    pub types: Weighting<FlowerType>,
}

impl Weightings {
    /// Raw histogram of a past bouquet, used as a weighting.
    #[must_use]
    pub fn from_profile(profile: &BouquetProfile) -> Self {
        Self {
            colors: Weighting::from_profile(&profile.colors),
            sizes: Weighting::from_profile(&profile.sizes),
            types: Weighting::from_profile(&profile.types),
        }
    }

    /// Selects the weighting for dimension `A`.
    #[must_use]
    pub fn get<A: Attribute>(&self) -> &Weighting<A> {
        A::weighting_of(self)
    }

    /// Returns true if every dimension has at least one entry.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.colors.is_empty() && !self.sizes.is_empty() && !self.types.is_empty()
    }

    /// Returns true if every dimension is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty() && self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bouquet::Bouquet;
    use crate::flower::Flower;

    #[test]
    fn flatten_preserves_entry_order() {
        let weighting: Weighting<FlowerColor> =
            [(FlowerColor::Blue, 2), (FlowerColor::White, 1), (FlowerColor::Red, 0)]
                .into_iter()
                .collect();
        assert_eq!(
            weighting.flatten(),
            vec![FlowerColor::Blue, FlowerColor::Blue, FlowerColor::White]
        );
        assert_eq!(weighting.total(), 3);
        assert_eq!(weighting.count(FlowerColor::Red), 0);
    }

    #[test]
    fn from_profile_copies_counts() {
        let bouquet = Bouquet::from_counts([
            (Flower::new(FlowerSize::Small, FlowerColor::Red, FlowerType::Rose), 2),
            (Flower::new(FlowerSize::Large, FlowerColor::Blue, FlowerType::Rose), 1),
        ]);
        let weightings = Weightings::from_profile(&bouquet.profile());

        assert_eq!(weightings.colors.count(FlowerColor::Red), 2);
        assert_eq!(weightings.get::<FlowerSize>().count(FlowerSize::Large), 1);
        assert_eq!(weightings.types.total(), 3);
        assert!(weightings.is_complete());
    }

    #[test]
    fn default_weightings_are_empty() {
        let weightings = Weightings::default();
        assert!(weightings.is_empty());
        assert!(!weightings.is_complete());
    }
}
