//! Nutri-Score style grading engine.
//!
//! Each nutrient is converted into points through a descending threshold table
//! (or a short branch ladder for fruit content). Unhealthy nutrients add to the
//! negative subtotal, healthy ones to the positive subtotal, and the net score
//! is banded into a letter grade. Everything here is pure and allocation-light,
//! so it can be shared across request handlers without synchronization.

mod banding;
pub mod domain;
mod nutrients;
mod rules;
pub mod thresholds;
pub mod units;

pub use banding::{grade, Grade};
pub use domain::{Category, NutrientPoints, NutritionalData, ScoreBreakdown, ScoreResult};
pub use nutrients::{points, Nutrient, Polarity};
pub use rules::{score, score_with_breakdown};
pub use thresholds::points_from_thresholds;
