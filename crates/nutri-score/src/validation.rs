//! Input checks applied by callers before handing measurements to the engine.
//!
//! The scoring engine accepts any number; the HTTP handlers and the CSV
//! importer reject negative or non-finite measurements up front.

use crate::scoring::{Nutrient, NutritionalData};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NutritionValidationError {
    #[error("{} must not be negative (found {value} {})", .nutrient.label(), .nutrient.unit())]
    Negative { nutrient: Nutrient, value: f64 },
    #[error("{} must be a finite number", .nutrient.label())]
    NonFinite { nutrient: Nutrient, value: f64 },
}

impl NutritionValidationError {
    pub fn nutrient(&self) -> Nutrient {
        match self {
            Self::Negative { nutrient, .. } | Self::NonFinite { nutrient, .. } => *nutrient,
        }
    }
}

/// Checks every measurement, reporting the first offending nutrient.
pub fn validate_nutrients(data: &NutritionalData) -> Result<(), NutritionValidationError> {
    for nutrient in Nutrient::ordered() {
        let value = data.value(nutrient);
        if !value.is_finite() {
            return Err(NutritionValidationError::NonFinite { nutrient, value });
        }
        if value < 0.0 {
            return Err(NutritionValidationError::Negative { nutrient, value });
        }
    }
    Ok(())
}
