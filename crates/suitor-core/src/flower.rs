//! Flowers and their three attribute dimensions.
//!
//! Every flower is a (size, color, type) triple. The [`Attribute`] trait gives
//! each dimension a typed projection so estimators can be written once and
//! instantiated per dimension.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::bouquet::{BouquetProfile, Profile};
use crate::weighting::{Weighting, Weightings};

/// Flower size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerSize {
    /// Small flower.
    Small,
    /// Medium flower.
    Medium,
    /// Large flower.
    Large,
}

/// Flower color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerColor {
    /// White petals.
    White,
    /// Yellow petals.
    Yellow,
    /// Red petals.
    Red,
    /// Purple petals.
    Purple,
    /// Orange petals.
    Orange,
    /// Blue petals.
    Blue,
}

/// Flower species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerType {
    /// Rose.
    Rose,
    /// Chrysanthemum.
    Chrysanthemum,
    /// Tulip.
    Tulip,
    /// Begonia.
    Begonia,
}

/// Names one of the three attribute dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// [`FlowerColor`].
    Color,
    /// [`FlowerSize`].
    Size,
    /// [`FlowerType`].
    Type,
}

impl Dimension {
    /// Returns the number of distinct values in this dimension.
    #[must_use]
    pub const fn cardinality(self) -> usize {
        match self {
            Self::Color => FlowerColor::ALL.len(),
            Self::Size => FlowerSize::ALL.len(),
            Self::Type => FlowerType::ALL.len(),
        }
    }

    /// Total number of values across all three dimensions.
    #[must_use]
    pub const fn total_cardinality() -> usize {
        FlowerColor::ALL.len() + FlowerSize::ALL.len() + FlowerType::ALL.len()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color => write!(f, "color"),
            Self::Size => write!(f, "size"),
            Self::Type => write!(f, "type"),
        }
    }
}

/// An immutable flower. Equality and hashing are by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Flower {
    /// Size attribute.
    pub size: FlowerSize,
    /// Color attribute.
    pub color: FlowerColor,
    /// Species attribute.
    pub kind: FlowerType,
}

impl Flower {
    /// Creates a flower from its three attributes.
    #[must_use]
    pub const fn new(size: FlowerSize, color: FlowerColor, kind: FlowerType) -> Self {
        Self { size, color, kind }
    }

    /// Enumerates every possible flower, sizes outermost.
    pub fn all() -> impl Iterator<Item = Self> {
        FlowerSize::ALL.iter().flat_map(|&size| {
            FlowerType::ALL.iter().flat_map(move |&kind| {
                FlowerColor::ALL
                    .iter()
                    .map(move |&color| Self::new(size, color, kind))
            })
        })
    }
}

impl fmt::Display for Flower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}-{:?}", self.size, self.color, self.kind)
    }
}

/// One attribute dimension of a flower.
///
/// Implemented by [`FlowerSize`], [`FlowerColor`] and [`FlowerType`]. The
/// projection functions replace reading attributes by name.
pub trait Attribute: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// Dimension this attribute belongs to.
    const DIMENSION: Dimension;

    /// Every value of the dimension, in declaration order.
    const ALL: &'static [Self];

    /// Position of this value in [`Attribute::ALL`].
    fn index(self) -> usize;

    /// Projects a flower onto this dimension.
    fn of(flower: &Flower) -> Self;

    /// Selects this dimension's histogram from a bouquet profile.
    fn profile_of(profile: &BouquetProfile) -> &Profile<Self>;

    /// Selects this dimension's weighting.
    fn weighting_of(weightings: &Weightings) -> &Weighting<Self>;
}

impl Attribute for FlowerSize {
    const DIMENSION: Dimension = Dimension::Size;
    const ALL: &'static [Self] = &[Self::Small, Self::Medium, Self::Large];

    fn index(self) -> usize {
        self as usize
    }

    fn of(flower: &Flower) -> Self {
        flower.size
    }

    fn profile_of(profile: &BouquetProfile) -> &Profile<Self> {
        &profile.sizes
    }

    fn weighting_of(weightings: &Weightings) -> &Weighting<Self> {
        &weightings.sizes
    }
}

impl Attribute for FlowerColor {
    const DIMENSION: Dimension = Dimension::Color;
    const ALL: &'static [Self] = &[
        Self::White,
        Self::Yellow,
        Self::Red,
        Self::Purple,
        Self::Orange,
        Self::Blue,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn of(flower: &Flower) -> Self {
        flower.color
    }

    fn profile_of(profile: &BouquetProfile) -> &Profile<Self> {
        &profile.colors
    }

    fn weighting_of(weightings: &Weightings) -> &Weighting<Self> {
        &weightings.colors
    }
}

impl Attribute for FlowerType {
    const DIMENSION: Dimension = Dimension::Type;
    const ALL: &'static [Self] = &[Self::Rose, Self::Chrysanthemum, Self::Tulip, Self::Begonia];

    fn index(self) -> usize {
        self as usize
    }

    fn of(flower: &Flower) -> Self {
        flower.kind
    }

    fn profile_of(profile: &BouquetProfile) -> &Profile<Self> {
        &profile.types
    }

    fn weighting_of(weightings: &Weightings) -> &Weighting<Self> {
        &weightings.types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn all_flowers_cover_every_combination() {
        let flowers: Vec<Flower> = Flower::all().collect();
        assert_eq!(flowers.len(), 72);

        let unique: std::collections::BTreeSet<Flower> = flowers.iter().copied().collect();
        assert_eq!(unique.len(), 72);
    }

    #[test_case(Dimension::Color, 6 ; "six colors")]
    #[test_case(Dimension::Size, 3 ; "three sizes")]
    #[test_case(Dimension::Type, 4 ; "four types")]
    fn dimension_cardinality(dimension: Dimension, expected: usize) {
        assert_eq!(dimension.cardinality(), expected);
    }

    #[test]
    fn total_cardinality_is_thirteen() {
        assert_eq!(Dimension::total_cardinality(), 13);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, color) in FlowerColor::ALL.iter().enumerate() {
            assert_eq!(Attribute::index(*color), i);
        }
        for (i, size) in FlowerSize::ALL.iter().enumerate() {
            assert_eq!(Attribute::index(*size), i);
        }
        for (i, kind) in FlowerType::ALL.iter().enumerate() {
            assert_eq!(Attribute::index(*kind), i);
        }
    }

    #[test]
    fn projections_read_the_right_field() {
        let flower = Flower::new(FlowerSize::Large, FlowerColor::Purple, FlowerType::Tulip);
        assert_eq!(FlowerSize::of(&flower), FlowerSize::Large);
        assert_eq!(FlowerColor::of(&flower), FlowerColor::Purple);
        assert_eq!(FlowerType::of(&flower), FlowerType::Tulip);
    }

    #[test]
    fn attributes_serialize_lowercase() {
        let json = serde_json::to_string(&FlowerType::Chrysanthemum).unwrap();
        assert_eq!(json, "\"chrysanthemum\"");

        let parsed: FlowerColor = serde_json::from_str("\"orange\"").unwrap();
        assert_eq!(parsed, FlowerColor::Orange);
    }

    #[test]
    fn flower_display() {
        let flower = Flower::new(FlowerSize::Small, FlowerColor::White, FlowerType::Rose);
        assert_eq!(flower.to_string(), "Small-White-Rose");
    }
}
