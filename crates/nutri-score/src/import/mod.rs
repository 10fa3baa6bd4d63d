//! Batch grading of products exported as CSV.

mod parser;

use serde::Serialize;
use std::io::Read;
use std::path::Path;

use crate::scoring::{grade, score, Grade, ScoreResult};
use crate::validation::{validate_nutrients, NutritionValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ProductImportError {
    #[error("failed to read product export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid product CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} has unknown category '{value}'")]
    UnknownCategory { row: usize, value: String },
    #[error("row {row} ({name}): {source}")]
    Invalid {
        row: usize,
        name: String,
        source: NutritionValidationError,
    },
}

/// Graded output for one imported row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedProduct {
    pub name: String,
    pub score: ScoreResult,
    pub grade: Grade,
}

pub struct ProductCsvImporter;

impl ProductCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<GradedProduct>, ProductImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses, validates and grades every row, stopping at the first bad one.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<GradedProduct>, ProductImportError> {
        parser::parse_products(reader)?
            .into_iter()
            .map(|product| -> Result<GradedProduct, ProductImportError> {
                validate_nutrients(&product.data).map_err(|source| ProductImportError::Invalid {
                    row: product.row,
                    name: product.name.clone(),
                    source,
                })?;

                let result = score(&product.data, product.category);
                Ok(GradedProduct {
                    name: product.name,
                    grade: grade(result.value),
                    score: result,
                })
            })
            .collect()
    }
}
