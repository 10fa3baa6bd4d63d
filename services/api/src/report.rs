use crate::infra::parse_category;
use clap::Args;
use nutri_score::error::AppError;
use nutri_score::import::{GradedProduct, ProductCsvImporter};
use nutri_score::scoring::units::{energy_from_kcal, sodium_from_salt};
use nutri_score::scoring::{
    grade, score_with_breakdown, Category, NutritionalData, Polarity, ScoreBreakdown,
};
use nutri_score::validation::validate_nutrients;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Energy per 100g/100ml in kJ
    #[arg(long, default_value_t = 0.0, conflicts_with = "energy_kcal")]
    pub(crate) energy: f64,
    /// Energy per 100g/100ml in kcal (converted to kJ)
    #[arg(long)]
    pub(crate) energy_kcal: Option<f64>,
    /// Sugars in g
    #[arg(long, default_value_t = 0.0)]
    pub(crate) sugars: f64,
    /// Saturated fatty acids in g
    #[arg(long, default_value_t = 0.0)]
    pub(crate) saturated_fat: f64,
    /// Sodium in mg
    #[arg(long, default_value_t = 0.0, conflicts_with = "salt")]
    pub(crate) sodium: f64,
    /// Salt in mg (converted to sodium)
    #[arg(long)]
    pub(crate) salt: Option<f64>,
    /// Fruit, vegetable and nut content in percent
    #[arg(long, default_value_t = 0.0)]
    pub(crate) fruits: f64,
    /// Fibre in g
    #[arg(long, default_value_t = 0.0)]
    pub(crate) fibre: f64,
    /// Protein in g
    #[arg(long, default_value_t = 0.0)]
    pub(crate) protein: f64,
    /// Product category: food, water, cheese or beverage (defaults to food)
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<Category>,
    /// Mark the product as water
    #[arg(long)]
    pub(crate) water: bool,
}

impl ScoreArgs {
    fn category(&self) -> Category {
        match self.category {
            Some(category) => category,
            None if self.water => Category::Water,
            None => Category::Food,
        }
    }

    fn nutritional_data(&self) -> NutritionalData {
        NutritionalData {
            is_water: self.water,
            energy: self.energy_kcal.map_or(self.energy, energy_from_kcal),
            sugars: self.sugars,
            saturated_fatty_acids: self.saturated_fat,
            sodium: self.salt.map_or(self.sodium, sodium_from_salt),
            fruits: self.fruits,
            fibre: self.fibre,
            protein: self.protein,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with a `name` column and one column per nutrient
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let data = args.nutritional_data();
    validate_nutrients(&data)?;

    let breakdown = score_with_breakdown(&data, args.category());
    render_breakdown(&breakdown);
    Ok(())
}

pub(crate) fn run_batch_report(args: BatchArgs) -> Result<(), AppError> {
    let products = ProductCsvImporter::from_path(&args.csv)?;
    render_batch(&args.csv, &products);
    Ok(())
}

fn render_breakdown(breakdown: &ScoreBreakdown) {
    let result = &breakdown.result;
    println!("Nutrition score ({})", result.category);

    for polarity in [Polarity::Negative, Polarity::Positive] {
        match polarity {
            Polarity::Negative => println!("\nNegative points"),
            Polarity::Positive => println!("\nPositive points"),
        }
        for component in breakdown
            .components
            .iter()
            .filter(|component| component.polarity == polarity)
        {
            println!(
                "- {}: {} {} -> {} pts",
                component.nutrient.label(),
                component.value,
                component.nutrient.unit(),
                component.points
            );
        }
    }

    println!(
        "\nNet score: {} (negative {} - positive {})",
        result.value, result.negative, result.positive
    );
    println!("Grade: {}", grade(result.value));

    if let Some(note) = result.category.rule_note() {
        println!("Note: {note}");
    }
}

fn render_batch(source: &std::path::Path, products: &[GradedProduct]) {
    println!("Graded {} product(s) from {}", products.len(), source.display());
    if products.is_empty() {
        return;
    }

    println!();
    for product in products {
        println!(
            "- {} [{}]: score {} -> {}",
            product.name, product.score.category, product.score.value, product.grade
        );
    }
}
