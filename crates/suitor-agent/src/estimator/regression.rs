//! Regression-based preference estimation for one recipient.
//!
//! Each dimension is fitted independently: a row per completed round, a
//! column per attribute value ever sent, the round's score as target. The
//! positive coefficients become integer counts summing to the round target.

use suitor_core::{
    Attribute, Dimension, FlowerColor, FlowerSize, FlowerType, Profile, Weighting, Weightings,
};
use tracing::trace;

use super::ols::LinearModel;
use crate::history::RecipientHistory;

/// A linear model over one dimension's attribute-value columns.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionFit<A> {
    columns: Vec<A>,
    model: LinearModel,
}

impl<A: Attribute> DimensionFit<A> {
    /// Column order of the training table.
    #[must_use]
    pub fn columns(&self) -> &[A] {
        &self.columns
    }

    /// Fitted coefficient for `value`, if it was a column.
    #[must_use]
    pub fn coefficient(&self, value: A) -> Option<f64> {
        self.columns
            .iter()
            .position(|column| *column == value)
            .map(|i| self.model.coefficients()[i])
    }

    /// Predicted score of a bouquet shaped like `weighting`.
    ///
    /// Values that were never a column are ignored.
    #[must_use]
    pub fn predict(&self, weighting: &Weighting<A>) -> f64 {
        let row: Vec<f64> = self
            .columns
            .iter()
            .map(|column| f64::from(weighting.count(*column)))
            .collect();
        self.model.predict(&row)
    }
}

/// Per-dimension models from one estimate; a dimension with fewer than two
/// columns has no model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FittedModels {
    /// Color model.
    pub colors: Option<DimensionFit<FlowerColor>>,
    /// Size model.
    pub sizes: Option<DimensionFit<FlowerSize>>,
    /// Species model.
    pub types: Option<DimensionFit<FlowerType>>,
}

impl FittedModels {
    /// Sum of the per-dimension predictions; missing models contribute 0.
    #[must_use]
    pub fn predict(&self, weightings: &Weightings) -> f64 {
        self.colors
            .as_ref()
            .map_or(0.0, |fit| fit.predict(&weightings.colors))
            + self
                .sizes
                .as_ref()
                .map_or(0.0, |fit| fit.predict(&weightings.sizes))
            + self
                .types
                .as_ref()
                .map_or(0.0, |fit| fit.predict(&weightings.types))
    }
}

/// Number of units each learned dimension distributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Targets {
    /// Units spread over colors.
    pub colors: u32,
    /// Units spread over sizes.
    pub sizes: u32,
    /// Units spread over species.
    pub types: u32,
}

impl Targets {
    /// The same target for every dimension.
    #[must_use]
    pub const fn uniform(target: u32) -> Self {
        Self {
            colors: target,
            sizes: target,
            types: target,
        }
    }

    /// Target for `dimension`.
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Color => self.colors,
            Dimension::Size => self.sizes,
            Dimension::Type => self.types,
        }
    }
}

/// Candidate weightings for one recipient and the models behind them.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Counts derived from the regression coefficients.
    pub learned: Weightings,
    /// Raw counts of the best-scoring past bouquet, if any round completed.
    pub historical: Option<Weightings>,
    /// Models fitted for this estimate.
    pub models: FittedModels,
    /// Target each learned dimension sums to.
    pub targets: Targets,
}

/// Estimates what `history`'s recipient likes, with one target shared by
/// every dimension.
#[must_use]
pub fn estimate(history: &RecipientHistory, target: u32) -> Estimate {
    estimate_with(history, |_| target)
}

/// Estimates what `history`'s recipient likes.
///
/// `draw_target` is called once per dimension, colors then sizes then
/// types, for the number of units that dimension distributes.
pub fn estimate_with<F>(history: &RecipientHistory, mut draw_target: F) -> Estimate
where
    F: FnMut(Dimension) -> u32,
{
    let best = history.best().map(|(profile, _)| profile);
    let targets = Targets {
        colors: draw_target(Dimension::Color),
        sizes: draw_target(Dimension::Size),
        types: draw_target(Dimension::Type),
    };
    let (colors, color_fit) = learn_dimension::<FlowerColor>(
        history,
        targets.colors,
        best.and_then(|p| p.colors.dominant()),
    );
    let (sizes, size_fit) = learn_dimension::<FlowerSize>(
        history,
        targets.sizes,
        best.and_then(|p| p.sizes.dominant()),
    );
    let (types, type_fit) = learn_dimension::<FlowerType>(
        history,
        targets.types,
        best.and_then(|p| p.types.dominant()),
    );

    Estimate {
        learned: Weightings {
            colors,
            sizes,
            types,
        },
        historical: best.map(Weightings::from_profile),
        models: FittedModels {
            colors: color_fit,
            sizes: size_fit,
            types: type_fit,
        },
        targets,
    }
}

/// Fits one dimension and converts its coefficients into counts.
///
/// `fallback` names the value that receives every unit when the fit has no
/// strictly positive coefficient.
pub fn learn_dimension<A: Attribute>(
    history: &RecipientHistory,
    target: u32,
    fallback: Option<A>,
) -> (Weighting<A>, Option<DimensionFit<A>>) {
    let rows: Vec<(&Profile<A>, f64)> = history
        .completed()
        .map(|(profile, outcome)| (A::profile_of(profile), outcome.score))
        .collect();

    let mut columns: Vec<A> = Vec::new();
    for (profile, _) in &rows {
        for (value, _) in profile.iter() {
            if !columns.contains(&value) {
                columns.push(value);
            }
        }
    }

    match columns.as_slice() {
        [] => return (Weighting::new(), None),
        [only] => return (Weighting::single(*only, target), None),
        _ => {}
    }

    let table: Vec<Vec<f64>> = rows
        .iter()
        .map(|(profile, _)| {
            columns
                .iter()
                .map(|column| f64::from(profile.get(*column)))
                .collect()
        })
        .collect();
    let scores: Vec<f64> = rows.iter().map(|(_, score)| *score).collect();

    let Some(model) = LinearModel::fit(&table, &scores) else {
        return (Weighting::new(), None);
    };
    let fit = DimensionFit { columns, model };
    let fallback = fallback.unwrap_or(fit.columns[0]);
    let weighting = coefficients_to_counts(&fit.columns, fit.model.coefficients(), target)
        .unwrap_or_else(|| Weighting::single(fallback, target));

    trace!(
        dimension = %A::DIMENSION,
        coefficients = ?fit.model.coefficients(),
        weighting = ?weighting,
        "fitted dimension"
    );
    (weighting, Some(fit))
}

/// Turns coefficients into integer counts summing to `target`.
///
/// Only strictly positive coefficients are kept. Each is shifted down by
/// the smallest coefficient overall, scaled to `target` and floored; the
/// remainder goes to the largest weight, which is ordered last. Returns
/// `None` when no coefficient is positive.
fn coefficients_to_counts<A: Attribute>(
    columns: &[A],
    coefficients: &[f64],
    target: u32,
) -> Option<Weighting<A>> {
    let smallest = coefficients.iter().copied().fold(f64::INFINITY, f64::min);
    let mut kept: Vec<(usize, f64)> = coefficients
        .iter()
        .enumerate()
        .filter(|(_, c)| **c > 0.0)
        .map(|(i, c)| (i, c - smallest))
        .collect();
    if kept.is_empty() {
        return None;
    }

    let mut total: f64 = kept.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        // Every kept coefficient shifted to zero; weigh them equally.
        for entry in &mut kept {
            entry.1 = 1.0;
        }
        total = kept.len() as f64;
    }

    kept.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
    let scale = f64::from(target) / total;
    let mut counts: Vec<(A, u32)> = kept
        .iter()
        .map(|(i, w)| (columns[*i], (w * scale).floor() as u32))
        .collect();
    let assigned: u32 = counts.iter().map(|(_, c)| c).sum();
    if let Some(last) = counts.last_mut() {
        last.1 += target.saturating_sub(assigned);
    }
    Some(counts.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use suitor_core::{Bouquet, Flower, Outcome};

    fn flower_a() -> Flower {
        Flower::new(FlowerSize::Small, FlowerColor::White, FlowerType::Rose)
    }

    fn flower_b() -> Flower {
        Flower::new(FlowerSize::Large, FlowerColor::Blue, FlowerType::Tulip)
    }

    fn history_of(rounds: &[(u32, u32, f64)]) -> RecipientHistory {
        let mut history = RecipientHistory::new();
        for (a, b, score) in rounds {
            let bouquet = Bouquet::from_counts([(flower_a(), *a), (flower_b(), *b)]);
            history.record_sent(bouquet.profile());
            history.record_outcome(Outcome::new(1, *score));
        }
        history
    }

    #[test]
    fn empty_history_gives_empty_weightings() {
        let estimate = estimate(&RecipientHistory::new(), 5);
        assert!(estimate.learned.is_empty());
        assert!(estimate.historical.is_none());
        assert_eq!(estimate.models, FittedModels::default());
    }

    #[test]
    fn single_column_takes_whole_target() {
        let history = history_of(&[(2, 0, 0.3), (4, 0, 0.6)]);
        let estimate = estimate(&history, 6);

        assert_eq!(estimate.learned.colors, Weighting::single(FlowerColor::White, 6));
        assert!(estimate.models.colors.is_none());
    }

    #[test]
    fn single_round_falls_back_to_dominant_value() {
        let history = history_of(&[(3, 1, 0.5)]);
        let estimate = estimate(&history, 7);

        assert_eq!(estimate.learned.colors, Weighting::single(FlowerColor::White, 7));
        assert_eq!(estimate.learned.sizes.total(), 7);
        assert_eq!(estimate.learned.types.total(), 7);
    }

    #[test]
    fn preferred_values_get_the_target() {
        let history = history_of(&[(3, 1, 0.9), (1, 3, 0.1), (2, 2, 0.5)]);
        let estimate = estimate(&history, 5);

        assert_eq!(estimate.learned.colors.count(FlowerColor::White), 5);
        assert_eq!(estimate.learned.colors.count(FlowerColor::Blue), 0);
        assert_eq!(estimate.learned.sizes.count(FlowerSize::Small), 5);
        assert_eq!(estimate.learned.types.count(FlowerType::Rose), 5);

        let fit = estimate.models.colors.as_ref().unwrap();
        assert!(fit.coefficient(FlowerColor::White).unwrap() > 0.0);
        assert!(fit.coefficient(FlowerColor::Blue).unwrap() < 0.0);
        assert!(fit.coefficient(FlowerColor::Red).is_none());
    }

    #[test]
    fn historical_is_best_round_profile() {
        let history = history_of(&[(3, 1, 0.9), (1, 3, 0.1)]);
        let estimate = estimate(&history, 4);
        let historical = estimate.historical.unwrap();
        assert_eq!(historical.colors.count(FlowerColor::White), 3);
        assert_eq!(historical.colors.count(FlowerColor::Blue), 1);
    }

    #[test]
    fn counts_shift_by_smallest_and_give_leftover_to_largest() {
        let columns = [FlowerColor::White, FlowerColor::Red, FlowerColor::Blue];
        // Shifted by -1.0: white 2.0, red just above 1.0, blue dropped.
        // Floors give red 2 and white 4; the spare unit goes to white.
        let weighting = coefficients_to_counts(&columns, &[1.0, 1e-9, -1.0], 7).unwrap();
        assert_eq!(weighting.iter().collect::<Vec<_>>(), vec![
            (FlowerColor::Red, 2),
            (FlowerColor::White, 5),
        ]);
        assert_eq!(weighting.total(), 7);
    }

    #[test]
    fn equal_positive_coefficients_split_evenly() {
        let columns = [FlowerSize::Small, FlowerSize::Medium];
        let weighting = coefficients_to_counts(&columns, &[0.5, 0.5], 5).unwrap();
        assert_eq!(weighting.iter().collect::<Vec<_>>(), vec![
            (FlowerSize::Small, 2),
            (FlowerSize::Medium, 3),
        ]);
    }

    #[test]
    fn no_positive_coefficient_yields_none() {
        let columns = [FlowerSize::Small, FlowerSize::Medium];
        assert!(coefficients_to_counts(&columns, &[0.0, -0.5], 5).is_none());
    }

    #[test]
    fn pending_rounds_are_not_trained_on() {
        let mut history = history_of(&[(3, 1, 0.9), (1, 3, 0.1)]);
        history.record_sent(Bouquet::from_counts([(flower_b(), 9)]).profile());
        let estimate = estimate(&history, 4);
        assert_eq!(estimate.learned.colors.count(FlowerColor::White), 4);
    }

    #[test]
    fn each_dimension_distributes_its_own_target() {
        let history = history_of(&[(3, 1, 0.9), (1, 3, 0.1), (2, 2, 0.5)]);
        let estimate = estimate_with(&history, |dimension| match dimension {
            Dimension::Color => 4,
            Dimension::Size => 5,
            Dimension::Type => 7,
        });

        assert_eq!(estimate.targets, Targets { colors: 4, sizes: 5, types: 7 });
        assert_eq!(estimate.learned.colors.total(), 4);
        assert_eq!(estimate.learned.sizes.total(), 5);
        assert_eq!(estimate.learned.types.total(), 7);
        assert_eq!(estimate.targets.get(Dimension::Size), 5);
    }

    #[test]
    fn targets_are_drawn_in_dimension_order() {
        let mut drawn = Vec::new();
        let estimate = estimate_with(&RecipientHistory::new(), |dimension| {
            drawn.push(dimension);
            6
        });
        assert_eq!(drawn, vec![Dimension::Color, Dimension::Size, Dimension::Type]);
        assert_eq!(estimate.targets, Targets::uniform(6));
    }

    #[test]
    fn prediction_ignores_unknown_columns() {
        let history = history_of(&[(3, 1, 0.9), (1, 3, 0.1), (2, 2, 0.5)]);
        let estimate = estimate(&history, 4);
        let fit = estimate.models.colors.unwrap();

        let known = Weighting::single(FlowerColor::White, 3);
        let mut with_unknown = known.clone();
        with_unknown.push(FlowerColor::Purple, 10);
        assert!((fit.predict(&known) - fit.predict(&with_unknown)).abs() < 1e-12);
    }
}
