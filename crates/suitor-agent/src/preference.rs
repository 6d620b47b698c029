//! A suitor's own hidden preferences.
//!
//! Two scorers back the self-description the environment grades with:
//! [`PreferenceOrder`], a fixed ranking of every attribute value, and
//! [`similarity`], overlap with a favorite bouquet.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use suitor_core::{Attribute, Dimension, Flower, FlowerColor, FlowerSize, FlowerType, Profile};

/// One permutation per dimension; a value's position is its preference rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceOrder {
    colors: Vec<FlowerColor>,
    sizes: Vec<FlowerSize>,
    types: Vec<FlowerType>,
}

impl PreferenceOrder {
    /// Draws a uniformly random permutation of every dimension.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            colors: shuffled(rng),
            sizes: shuffled(rng),
            types: shuffled(rng),
        }
    }

    /// Builds an order from explicit permutations, least preferred first.
    ///
    /// Returns `None` unless each list holds every value exactly once.
    #[must_use]
    pub fn from_permutations(
        colors: Vec<FlowerColor>,
        sizes: Vec<FlowerSize>,
        types: Vec<FlowerType>,
    ) -> Option<Self> {
        if is_permutation(&colors) && is_permutation(&sizes) && is_permutation(&types) {
            Some(Self {
                colors,
                sizes,
                types,
            })
        } else {
            None
        }
    }

    /// Color ranks, least preferred first.
    #[must_use]
    pub fn colors(&self) -> &[FlowerColor] {
        &self.colors
    }

    /// Size ranks, least preferred first.
    #[must_use]
    pub fn sizes(&self) -> &[FlowerSize] {
        &self.sizes
    }

    /// Species ranks, least preferred first.
    #[must_use]
    pub fn types(&self) -> &[FlowerType] {
        &self.types
    }

    /// The flower built from every dimension's least preferred value.
    #[must_use]
    pub fn least_preferred(&self) -> Flower {
        Flower::new(self.sizes[0], self.colors[0], self.types[0])
    }

    /// The flower built from every dimension's most preferred value.
    #[must_use]
    pub fn most_preferred(&self) -> Flower {
        Flower::new(
            self.sizes[self.sizes.len() - 1],
            self.colors[self.colors.len() - 1],
            self.types[self.types.len() - 1],
        )
    }
}

fn shuffled<A: Attribute, R: Rng + ?Sized>(rng: &mut R) -> Vec<A> {
    let mut values = A::ALL.to_vec();
    values.shuffle(rng);
    values
}

fn is_permutation<A: Attribute>(values: &[A]) -> bool {
    values.len() == A::ALL.len() && A::ALL.iter().all(|v| values.contains(v))
}

/// Normalizer that maps a dimension's rank-weighted sum into its share of [0, 1].
///
/// A bouquet of `max_bouquet_size` top flowers scores `n_d / n_total` on
/// dimension `d`, so the three shares of that bouquet sum to exactly 1.
#[must_use]
pub fn rank_normalizer(dimension: Dimension, max_bouquet_size: u32) -> f64 {
    let values = dimension.cardinality() as f64;
    let total = Dimension::total_cardinality() as f64;
    f64::from(max_bouquet_size) * (values - 1.0) * total / values
}

/// Σ count × rank over `profile`, divided by the dimension's normalizer.
#[must_use]
pub fn rank_score<A: Attribute>(order: &[A], profile: &Profile<A>, max_bouquet_size: u32) -> f64 {
    let normalizer = rank_normalizer(A::DIMENSION, max_bouquet_size);
    if normalizer <= 0.0 {
        return 0.0;
    }
    let weighted: f64 = profile
        .iter()
        .map(|(value, count)| {
            let rank = order.iter().position(|v| *v == value).unwrap_or(0);
            f64::from(count) * rank as f64
        })
        .sum();
    weighted / normalizer
}

/// Overlap of `given` with `favorite`, in [0, 1/3].
///
/// For each value of the favorite, min/max of the two counts; averaged over
/// the favorite's values and divided by 3 so three dimensions sum to 1.
/// An empty favorite scores 0.
#[must_use]
pub fn similarity<A: Attribute>(favorite: &Profile<A>, given: &Profile<A>) -> f64 {
    let mut total = 0.0;
    let mut values = 0usize;
    for (value, ours) in favorite.iter() {
        values += 1;
        let theirs = given.get(value);
        let union = ours.max(theirs);
        if union > 0 {
            total += f64::from(ours.min(theirs)) / f64::from(union);
        }
    }
    if values == 0 {
        return 0.0;
    }
    total / (values as f64 * 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use suitor_core::{Bouquet, MAX_BOUQUET_SIZE};
    use test_case::test_case;

    #[test_case(Dimension::Color, 130.0 ; "color")]
    #[test_case(Dimension::Size, 104.0 ; "size")]
    #[test_case(Dimension::Type, 117.0 ; "type")]
    fn normalizers_for_default_limit(dimension: Dimension, expected: f64) {
        assert!((rank_normalizer(dimension, MAX_BOUQUET_SIZE) - expected).abs() < 1e-9);
    }

    #[test]
    fn random_order_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let order = PreferenceOrder::random(&mut rng);
        assert!(is_permutation(order.colors()));
        assert!(is_permutation(order.sizes()));
        assert!(is_permutation(order.types()));
    }

    #[test]
    fn from_permutations_rejects_duplicates() {
        let order = PreferenceOrder::from_permutations(
            vec![FlowerColor::White; 6],
            FlowerSize::ALL.to_vec(),
            FlowerType::ALL.to_vec(),
        );
        assert!(order.is_none());
    }

    #[test]
    fn rank_score_weights_by_position() {
        let order = FlowerType::ALL.to_vec();
        let profile: Profile<FlowerType> =
            [(FlowerType::Rose, 5), (FlowerType::Begonia, 2)].into_iter().collect();
        // Rose ranks 0, Begonia ranks 3.
        assert!((rank_score(&order, &profile, MAX_BOUQUET_SIZE) - 6.0 / 117.0).abs() < 1e-12);
    }

    #[test]
    fn best_bouquet_scores_one() {
        let mut rng = StdRng::seed_from_u64(11);
        let order = PreferenceOrder::random(&mut rng);
        let bouquet = Bouquet::from_counts([(order.most_preferred(), MAX_BOUQUET_SIZE)]);
        let total = rank_score(order.colors(), &bouquet.colors(), MAX_BOUQUET_SIZE)
            + rank_score(order.sizes(), &bouquet.sizes(), MAX_BOUQUET_SIZE)
            + rank_score(order.types(), &bouquet.types(), MAX_BOUQUET_SIZE);
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn similarity_of_favorite_with_itself_is_a_third() {
        let favorite: Profile<FlowerColor> =
            [(FlowerColor::Red, 3), (FlowerColor::Blue, 1)].into_iter().collect();
        assert!((similarity(&favorite, &favorite) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn similarity_counts_partial_overlap() {
        let favorite: Profile<FlowerColor> =
            [(FlowerColor::Red, 4), (FlowerColor::Blue, 2)].into_iter().collect();
        let given: Profile<FlowerColor> =
            [(FlowerColor::Red, 2), (FlowerColor::White, 9)].into_iter().collect();
        // red: 2/4, blue: 0; two values.
        assert!((similarity(&favorite, &given) - 0.5 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn similarity_with_empty_favorite_is_zero() {
        let given: Profile<FlowerSize> = [(FlowerSize::Large, 1)].into_iter().collect();
        assert!(similarity(&Profile::new(), &given).abs() < f64::EPSILON);
    }
}
