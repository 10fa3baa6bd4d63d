use super::domain::{Category, NutrientPoints, NutritionalData, ScoreBreakdown, ScoreResult};
use super::nutrients::{points, Nutrient, Polarity};

fn nutrient_points(
    data: &NutritionalData,
    category: Category,
) -> impl Iterator<Item = NutrientPoints> + '_ {
    Nutrient::ordered().into_iter().map(move |nutrient| {
        let value = data.value(nutrient);
        NutrientPoints {
            nutrient,
            polarity: nutrient.polarity(),
            value,
            points: points(nutrient, value, category),
        }
    })
}

fn total<I>(components: I, category: Category) -> ScoreResult
where
    I: IntoIterator<Item = NutrientPoints>,
{
    let (negative, positive) = components.into_iter().fold(
        (0_i32, 0_i32),
        |(negative, positive), component| {
            let awarded = i32::from(component.points);
            match component.polarity {
                Polarity::Negative => (negative + awarded, positive),
                Polarity::Positive => (negative, positive + awarded),
            }
        },
    );

    ScoreResult {
        value: negative - positive,
        positive,
        negative,
        category,
    }
}

/// Net nutritional score for `data` under `category`.
pub fn score(data: &NutritionalData, category: Category) -> ScoreResult {
    total(nutrient_points(data, category), category)
}

/// Same as [`score`], also returning each nutrient's contribution. The result
/// is totalled from those same components.
pub fn score_with_breakdown(data: &NutritionalData, category: Category) -> ScoreBreakdown {
    let components: Vec<NutrientPoints> = nutrient_points(data, category).collect();

    ScoreBreakdown {
        result: total(components.iter().copied(), category),
        components,
    }
}
