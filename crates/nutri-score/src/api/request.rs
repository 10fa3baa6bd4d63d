use serde::{Deserialize, Deserializer};

use crate::scoring::{Category, NutritionalData};

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Payload accepted by the scoring endpoints.
///
/// Field names are snake_case, with the PascalCase and camelCase spellings
/// emitted by upstream estimators accepted as aliases. Missing or `null`
/// measurements count as zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NutritionRequest {
    #[serde(default, alias = "Energy", deserialize_with = "null_as_zero")]
    pub energy: f64,
    #[serde(default, alias = "Sugars", deserialize_with = "null_as_zero")]
    pub sugars: f64,
    #[serde(
        default,
        alias = "SaturatedFattyAcids",
        alias = "saturatedFattyAcids",
        deserialize_with = "null_as_zero"
    )]
    pub saturated_fatty_acids: f64,
    #[serde(default, alias = "Sodium", deserialize_with = "null_as_zero")]
    pub sodium: f64,
    #[serde(default, alias = "Fruits", deserialize_with = "null_as_zero")]
    pub fruits: f64,
    #[serde(default, alias = "Fibre", deserialize_with = "null_as_zero")]
    pub fibre: f64,
    #[serde(default, alias = "Protein", deserialize_with = "null_as_zero")]
    pub protein: f64,
    #[serde(
        default,
        alias = "IsWater",
        alias = "isWater",
        deserialize_with = "null_as_false"
    )]
    pub is_water: bool,
    #[serde(default, alias = "Category")]
    pub category: Option<Category>,
}

impl NutritionRequest {
    /// Category the product is scored under: the explicit tag when present,
    /// otherwise `Water` for flagged water and `Food` for everything else.
    pub fn resolved_category(&self) -> Category {
        match self.category {
            Some(category) => category,
            None if self.is_water => Category::Water,
            None => Category::Food,
        }
    }

    pub fn nutritional_data(&self) -> NutritionalData {
        NutritionalData {
            is_water: self.is_water,
            energy: self.energy,
            sugars: self.sugars,
            saturated_fatty_acids: self.saturated_fatty_acids,
            sodium: self.sodium,
            fruits: self.fruits,
            fibre: self.fibre,
            protein: self.protein,
        }
    }
}
