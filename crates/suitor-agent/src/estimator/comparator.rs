//! Choosing between learned and historical weightings.

use std::fmt;

use suitor_core::Weightings;

use super::regression::Estimate;

/// Which candidate of an [`Estimate`] to build from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Regression-derived counts.
    Learned,
    /// Counts of the best-scoring past bouquet.
    Historical,
}

/// Strategy for picking a candidate weighting.
pub trait WeightingComparator: fmt::Debug + Send + Sync {
    /// Picks a candidate. Must return [`Choice::Learned`] when there is no
    /// historical candidate.
    fn choose(&self, estimate: &Estimate) -> Choice;
}

/// Picks whichever candidate the just-fitted models predict scores higher.
///
/// Ties keep the learned counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictedScoreComparator;

impl WeightingComparator for PredictedScoreComparator {
    fn choose(&self, estimate: &Estimate) -> Choice {
        let Some(historical) = &estimate.historical else {
            return Choice::Learned;
        };
        let learned_score = estimate.models.predict(&estimate.learned);
        let historical_score = estimate.models.predict(historical);
        if historical_score > learned_score {
            Choice::Historical
        } else {
            Choice::Learned
        }
    }
}

/// Always builds from the regression counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LearnedOnlyComparator;

impl WeightingComparator for LearnedOnlyComparator {
    fn choose(&self, _estimate: &Estimate) -> Choice {
        Choice::Learned
    }
}

impl Estimate {
    /// Consumes the estimate, keeping the chosen candidate.
    #[must_use]
    pub fn into_weightings(self, choice: Choice) -> Weightings {
        match (choice, self.historical) {
            (Choice::Historical, Some(historical)) => historical,
            _ => self.learned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::regression::estimate;
    use crate::history::RecipientHistory;
    use suitor_core::{Bouquet, Flower, FlowerColor, FlowerSize, FlowerType, Outcome};

    fn flower(color: FlowerColor) -> Flower {
        Flower::new(FlowerSize::Medium, color, FlowerType::Begonia)
    }

    fn history(rounds: &[(u32, u32, f64)]) -> RecipientHistory {
        let mut history = RecipientHistory::new();
        for (red, blue, score) in rounds {
            let bouquet = Bouquet::from_counts([
                (flower(FlowerColor::Red), *red),
                (flower(FlowerColor::Blue), *blue),
            ]);
            history.record_sent(bouquet.profile());
            history.record_outcome(Outcome::new(1, *score));
        }
        history
    }

    #[test]
    fn no_history_keeps_learned() {
        let estimate = estimate(&RecipientHistory::new(), 4);
        assert_eq!(PredictedScoreComparator.choose(&estimate), Choice::Learned);
    }

    #[test]
    fn higher_predicted_history_wins() {
        // Score grows with red; the best round has 8 red, the learned
        // counts only distribute 4 units.
        let estimate = estimate(&history(&[(8, 0, 0.9), (0, 4, 0.1), (4, 2, 0.5)]), 4);
        assert_eq!(PredictedScoreComparator.choose(&estimate), Choice::Historical);

        let weightings = estimate.into_weightings(Choice::Historical);
        assert_eq!(weightings.colors.count(FlowerColor::Red), 8);
    }

    #[test]
    fn learned_wins_when_it_predicts_higher() {
        // The best round mixed in blue, which the model penalizes.
        let estimate = estimate(&history(&[(2, 2, 0.6), (0, 4, 0.1), (1, 3, 0.3)]), 7);
        assert_eq!(PredictedScoreComparator.choose(&estimate), Choice::Learned);
    }

    #[test]
    fn learned_only_ignores_history() {
        let estimate = estimate(&history(&[(8, 0, 0.9), (0, 4, 0.1), (4, 2, 0.5)]), 4);
        assert_eq!(LearnedOnlyComparator.choose(&estimate), Choice::Learned);
        let weightings = estimate.into_weightings(Choice::Learned);
        assert_eq!(weightings.colors.count(FlowerColor::Red), 4);
    }

    #[test]
    fn historical_choice_without_history_falls_back_to_learned() {
        let estimate = estimate(&RecipientHistory::new(), 4);
        let weightings = estimate.into_weightings(Choice::Historical);
        assert!(weightings.is_empty());
    }
}
