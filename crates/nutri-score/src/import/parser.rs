use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::ProductImportError;
use crate::scoring::{Category, NutritionalData};

#[derive(Debug)]
pub(crate) struct ProductRecord {
    pub(crate) row: usize,
    pub(crate) name: String,
    pub(crate) category: Category,
    pub(crate) data: NutritionalData,
}

pub(crate) fn parse_products<R: Read>(reader: R) -> Result<Vec<ProductRecord>, ProductImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<ProductRow>().enumerate() {
        let row = record?;
        let line = index + 1;
        let category = match row.category.as_deref() {
            None => Category::Food,
            Some(raw) => Category::parse(raw).ok_or_else(|| ProductImportError::UnknownCategory {
                row: line,
                value: raw.to_string(),
            })?,
        };

        records.push(ProductRecord {
            row: line,
            data: row.nutritional_data(category),
            name: row.name,
            category,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(default, deserialize_with = "empty_number_as_zero")]
    energy: f64,
    #[serde(default, deserialize_with = "empty_number_as_zero")]
    sugars: f64,
    #[serde(default, deserialize_with = "empty_number_as_zero")]
    saturated_fatty_acids: f64,
    #[serde(default, deserialize_with = "empty_number_as_zero")]
    sodium: f64,
    #[serde(default, deserialize_with = "empty_number_as_zero")]
    fruits: f64,
    #[serde(default, deserialize_with = "empty_number_as_zero")]
    fibre: f64,
    #[serde(default, deserialize_with = "empty_number_as_zero")]
    protein: f64,
}

impl ProductRow {
    fn nutritional_data(&self, category: Category) -> NutritionalData {
        NutritionalData {
            is_water: category == Category::Water,
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

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn empty_number_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(0.0),
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|err| D::Error::custom(format!("invalid number '{raw}': {err}"))),
    }
}
