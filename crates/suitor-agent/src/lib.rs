//! # suitor-agent
//!
//! Bouquet-allocation strategies for the flower courtship game.
//!
//! This crate provides:
//!
//! - **Adaptive suitor** — [`AdaptiveSuitor`] bootstraps with random bouquets, then
//!   learns each recipient's taste by per-dimension regression
//! - **Fixed-order suitor** — [`FixedOrderSuitor`] scores by a hidden permutation and
//!   serves the recipients that rated it best first
//! - **Estimation** — [`estimate`] and the pluggable [`WeightingComparator`]
//! - **Synthesis** — [`Synthesizer`] turns weightings into bouquets without
//!   oversubscribing stock
//!
//! ## Example
//!
//! ```rust
//! use suitor_agent::{AdaptiveConfig, AdaptiveSuitor};
//! use suitor_core::{Flower, FlowerCounts, GameConfig, Suitor};
//!
//! let game = GameConfig::new(10, 3, 0);
//! let mut suitor = AdaptiveSuitor::new(game, AdaptiveConfig::default().with_seed(7))?;
//!
//! let stock: FlowerCounts = Flower::all().map(|flower| (flower, 1)).collect();
//! let gifts = suitor.prepare_bouquets(&stock);
//! assert_eq!(gifts.len(), 2);
//!
//! let favorite = suitor.one_score_bouquet();
//! assert!((suitor.score_bouquet(&favorite) - 1.0).abs() < 1e-9);
//! # Ok::<(), suitor_agent::AgentError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod adaptive;
pub mod config;
pub mod error;
pub mod estimator;
pub mod fixed_order;
pub mod history;
pub mod preference;
pub mod priority;
pub mod sampler;
pub mod synthesizer;

pub use adaptive::AdaptiveSuitor;
pub use config::{AdaptiveConfig, FixedOrderConfig};
pub use error::AgentError;
pub use estimator::{
    Choice, Estimate, LearnedOnlyComparator, PredictedScoreComparator, Targets,
    WeightingComparator, estimate, estimate_with,
};
pub use fixed_order::FixedOrderSuitor;
pub use history::{FeedbackRecord, RecipientHistory};
pub use preference::PreferenceOrder;
pub use priority::{RankedRecipient, rank_recipients};
pub use synthesizer::Synthesizer;
