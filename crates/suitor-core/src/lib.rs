//! # suitor-core
//!
//! Shared primitives for the flower courtship game.
//!
//! This crate provides:
//!
//! - [`Flower`] — An immutable (size, color, type) triple
//! - [`Attribute`] — Typed projection of a flower onto one attribute dimension
//! - [`Bouquet`] and [`Profile`] — Multisets of flowers and their per-dimension histograms
//! - [`FlowerCounts`] — The shared inventory a suitor draws bouquets from
//! - [`Weighting`] — Desired counts per attribute value, produced by estimators
//! - [`Suitor`] — The contract every participant implements
//!
//! ## Example
//!
//! ```rust
//! use suitor_core::{Bouquet, Flower, FlowerColor, FlowerCounts, FlowerSize, FlowerType};
//!
//! let rose = Flower::new(FlowerSize::Small, FlowerColor::Red, FlowerType::Rose);
//! let mut inventory = FlowerCounts::from_iter([(rose, 2)]);
//!
//! assert!(inventory.take(&rose));
//! assert_eq!(inventory.count(&rose), 1);
//!
//! let bouquet = Bouquet::from_iter([rose]);
//! assert_eq!(bouquet.colors().get(FlowerColor::Red), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bouquet;
pub mod config;
pub mod error;
pub mod feedback;
pub mod flower;
pub mod inventory;
pub mod suitor;
pub mod weighting;

pub use bouquet::{Bouquet, BouquetProfile, Profile};
pub use config::{GameConfig, MAX_BOUQUET_SIZE};
pub use error::SuitorError;
pub use feedback::{FeedbackEntry, Outcome};
pub use flower::{Attribute, Dimension, Flower, FlowerColor, FlowerSize, FlowerType};
pub use inventory::FlowerCounts;
pub use suitor::{Gift, Suitor, SuitorId};
pub use weighting::{Weighting, Weightings};
