//! Preference estimation from feedback history.
//!
//! - [`regression`] — per-dimension least-squares fits turned into counts
//! - [`comparator`] — choosing between learned and best-historical counts
//! - [`ols`] — the least-squares solver itself

pub mod comparator;
pub mod ols;
pub mod regression;

pub use comparator::{Choice, LearnedOnlyComparator, PredictedScoreComparator, WeightingComparator};
pub use ols::LinearModel;
pub use regression::{
    DimensionFit, Estimate, FittedModels, Targets, estimate, estimate_with, learn_dimension,
};
