use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::nutrients::{Nutrient, Polarity};

/// Product family used to select threshold tables and fruit ladders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Food,
    Water,
    Cheese,
    Beverage,
}

impl Category {
    pub const fn ordered() -> [Self; 4] {
        [Self::Food, Self::Water, Self::Cheese, Self::Beverage]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Water => "water",
            Self::Cheese => "cheese",
            Self::Beverage => "beverage",
        }
    }

    pub const fn is_beverage(self) -> bool {
        matches!(self, Self::Beverage)
    }

    /// Caveat attached to results for categories that have no dedicated rules
    /// yet and are scored with the food tables.
    pub const fn rule_note(self) -> Option<&'static str> {
        match self {
            Self::Water => Some("water has no dedicated rules; scored with food thresholds"),
            Self::Food | Self::Cheese | Self::Beverage => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "food" | "" => Some(Self::Food),
            "water" => Some(Self::Water),
            "cheese" => Some(Self::Cheese),
            "beverage" | "drink" => Some(Self::Beverage),
            _ => None,
        }
    }
}

// Shares `Category::parse` with the CLI and CSV paths.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| {
            serde::de::Error::unknown_variant(&raw, &["food", "water", "cheese", "beverage"])
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-100g (or per-100ml) nutrient measurements supplied by the caller.
///
/// Values are expected to be non-negative; the engine does not check this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalData {
    pub is_water: bool,
    /// Energy in kJ.
    pub energy: f64,
    /// Sugars in g.
    pub sugars: f64,
    /// Saturated fatty acids in g.
    pub saturated_fatty_acids: f64,
    /// Sodium in mg.
    pub sodium: f64,
    /// Fruit, vegetable and nut content in percent.
    pub fruits: f64,
    /// Fibre in g.
    pub fibre: f64,
    /// Protein in g.
    pub protein: f64,
}

impl NutritionalData {
    /// Raw measurement for a single nutrient.
    pub const fn value(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Sugars => self.sugars,
            Nutrient::SaturatedFattyAcids => self.saturated_fatty_acids,
            Nutrient::Sodium => self.sodium,
            Nutrient::Fruits => self.fruits,
            Nutrient::Fibre => self.fibre,
            Nutrient::Protein => self.protein,
        }
    }
}

/// Net score with its subtotals. `value` is always `negative - positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub value: i32,
    pub positive: i32,
    pub negative: i32,
    pub category: Category,
}

/// Points awarded to one nutrient, kept for audit trails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientPoints {
    pub nutrient: Nutrient,
    pub polarity: Polarity,
    pub value: f64,
    pub points: u8,
}

/// Score result plus the per-nutrient contributions that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub result: ScoreResult,
    pub components: Vec<NutrientPoints>,
}
