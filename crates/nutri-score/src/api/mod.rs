//! HTTP surface for the grading engine.

pub mod request;
pub mod response;
pub mod router;

#[cfg(test)]
mod tests;

pub use request::NutritionRequest;
pub use response::{ApiResponse, ScoreReport};
pub use router::nutrition_router;
