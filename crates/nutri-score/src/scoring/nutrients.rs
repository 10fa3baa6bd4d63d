use serde::{Deserialize, Serialize};

use super::domain::Category;
use super::thresholds::{
    points_from_thresholds, ENERGY_LEVELS, ENERGY_LEVELS_BEVERAGE, FIBRE_LEVELS, PROTEIN_LEVELS,
    SATURATED_FATTY_ACIDS_LEVELS, SODIUM_LEVELS, SUGARS_LEVELS, SUGARS_LEVELS_BEVERAGE,
};

/// The seven scored nutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Energy,
    Sugars,
    SaturatedFattyAcids,
    Sodium,
    Fruits,
    Fibre,
    Protein,
}

/// Whether a nutrient's points count against (`Negative`) or in favour of
/// (`Positive`) the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Negative,
    Positive,
}

impl Nutrient {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Energy,
            Self::Sugars,
            Self::SaturatedFattyAcids,
            Self::Sodium,
            Self::Fruits,
            Self::Fibre,
            Self::Protein,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Sugars => "Sugars",
            Self::SaturatedFattyAcids => "Saturated fatty acids",
            Self::Sodium => "Sodium",
            Self::Fruits => "Fruits, vegetables & nuts",
            Self::Fibre => "Fibre",
            Self::Protein => "Protein",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Energy => "kJ",
            Self::Sodium => "mg",
            Self::Fruits => "%",
            Self::Sugars | Self::SaturatedFattyAcids | Self::Fibre | Self::Protein => "g",
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Energy | Self::Sugars | Self::SaturatedFattyAcids | Self::Sodium => {
                Polarity::Negative
            }
            Self::Fruits | Self::Fibre | Self::Protein => Polarity::Positive,
        }
    }

    /// Threshold table used for this nutrient, or `None` for fruit content,
    /// which is scored on a fixed ladder instead.
    pub fn thresholds(self, category: Category) -> Option<&'static [f64]> {
        let table: &'static [f64] = match (self, category.is_beverage()) {
            (Self::Energy, true) => &ENERGY_LEVELS_BEVERAGE,
            (Self::Energy, false) => &ENERGY_LEVELS,
            (Self::Sugars, true) => &SUGARS_LEVELS_BEVERAGE,
            (Self::Sugars, false) => &SUGARS_LEVELS,
            (Self::SaturatedFattyAcids, _) => &SATURATED_FATTY_ACIDS_LEVELS,
            (Self::Sodium, _) => &SODIUM_LEVELS,
            (Self::Fibre, _) => &FIBRE_LEVELS,
            (Self::Protein, _) => &PROTEIN_LEVELS,
            (Self::Fruits, _) => return None,
        };
        Some(table)
    }
}

/// Points awarded to `value` of `nutrient` for a product of `category`.
pub fn points(nutrient: Nutrient, value: f64, category: Category) -> u8 {
    match nutrient.thresholds(category) {
        Some(table) => points_from_thresholds(value, table),
        None => fruit_points(value, category),
    }
}

fn fruit_points(percent: f64, category: Category) -> u8 {
    let (high, mid, low) = if category.is_beverage() {
        (10, 4, 2)
    } else {
        (5, 2, 1)
    };

    if percent > 80.0 {
        high
    } else if percent > 60.0 {
        mid
    } else if percent > 40.0 {
        low
    } else {
        0
    }
}
