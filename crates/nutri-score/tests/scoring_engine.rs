use nutri_score::scoring::units::{energy_from_kcal, sodium_from_salt};
use nutri_score::scoring::{
    grade, points, score, score_with_breakdown, Category, Grade, Nutrient, NutritionalData,
    Polarity,
};

fn granola_bar() -> NutritionalData {
    NutritionalData {
        is_water: false,
        energy: 1000.0,
        sugars: 15.0,
        saturated_fatty_acids: 4.0,
        sodium: 500.0,
        fruits: 45.0,
        fibre: 2.0,
        protein: 3.0,
    }
}

#[test]
fn sample_food_product_has_non_zero_score() {
    let result = score(&granola_bar(), Category::Food);

    assert_ne!(result.value, 0, "expected non-zero score");
    assert_eq!(result.value, result.negative - result.positive);
    assert_eq!(grade(result.value), Grade::C);
}

#[test]
fn lentil_salad_grades_a() {
    let salad = NutritionalData {
        energy: 420.0,
        sugars: 2.0,
        saturated_fatty_acids: 0.4,
        sodium: 150.0,
        fruits: 85.0,
        fibre: 5.2,
        protein: 9.0,
        ..NutritionalData::default()
    };

    let result = score(&salad, Category::Food);

    // energy 1, sodium 1 | fruits 5, fibre 5, protein 5
    assert_eq!(result.negative, 2);
    assert_eq!(result.positive, 15);
    assert_eq!(grade(result.value), Grade::A);
}

#[test]
fn cola_grades_worse_as_beverage() {
    let cola = NutritionalData {
        energy: 180.0,
        sugars: 10.6,
        sodium: 10.0,
        ..NutritionalData::default()
    };

    let as_drink = score(&cola, Category::Beverage);
    let as_food = score(&cola, Category::Food);

    // energy: not above 180, above 150 => 6; sugars: above 10.5 => 8
    assert_eq!(as_drink.negative, 14);
    assert_eq!(grade(as_drink.value), Grade::D);
    assert_eq!(as_food.negative, 2);
    assert_eq!(grade(as_food.value), Grade::B);
}

#[test]
fn salty_fatty_snack_sits_on_d_e_boundary() {
    let snack = NutritionalData {
        energy: 2300.0,
        sugars: 3.0,
        saturated_fatty_acids: 11.0,
        sodium: 950.0,
        fibre: 3.9,
        protein: 6.5,
        ..NutritionalData::default()
    };

    let result = score(&snack, Category::Food);

    // energy 6, saturated fat 10, sodium 10 | fibre 4, protein 4
    assert_eq!(result.negative, 26);
    assert_eq!(result.positive, 8);
    assert_eq!(result.value, 18);
    assert_eq!(grade(result.value), Grade::D);

    let less_protein = NutritionalData {
        protein: 6.0,
        ..snack
    };
    assert_eq!(grade(score(&less_protein, Category::Food).value), Grade::E);
}

#[test]
fn category_is_recorded_on_result() {
    for category in Category::ordered() {
        assert_eq!(score(&granola_bar(), category).category, category);
    }
}

#[test]
fn breakdown_lists_every_nutrient_once() {
    let breakdown = score_with_breakdown(&granola_bar(), Category::Cheese);

    let nutrients: Vec<Nutrient> = breakdown
        .components
        .iter()
        .map(|component| component.nutrient)
        .collect();
    assert_eq!(nutrients, Nutrient::ordered());
    assert!(breakdown
        .components
        .iter()
        .all(|component| component.polarity == component.nutrient.polarity()));
    assert_eq!(breakdown.result, score(&granola_bar(), Category::Cheese));
}

#[test]
fn sign_convention_is_applied_by_aggregation_not_lookup() {
    // Table points always grow with the value, whichever side they count for.
    assert!(
        points(Nutrient::Protein, 9.0, Category::Food)
            > points(Nutrient::Protein, 1.0, Category::Food)
    );
    assert_eq!(Nutrient::Protein.polarity(), Polarity::Positive);

    let more_protein = NutritionalData {
        protein: 9.0,
        ..granola_bar()
    };
    assert!(
        score(&more_protein, Category::Food).value < score(&granola_bar(), Category::Food).value
    );
}

#[test]
fn label_units_convert_before_scoring() {
    let data = NutritionalData {
        energy: energy_from_kcal(239.0),
        sodium: sodium_from_salt(1250.0),
        ..NutritionalData::default()
    };

    // 239 kcal ~= 1000 kJ, 1250 mg salt => 500 mg sodium
    assert_eq!(points(Nutrient::Energy, data.energy, Category::Food), 2);
    assert_eq!(points(Nutrient::Sodium, data.sodium, Category::Food), 5);
}

#[test]
fn scoring_is_shareable_across_threads() {
    let handles: Vec<_> = Category::ordered()
        .into_iter()
        .map(|category| std::thread::spawn(move || score(&granola_bar(), category)))
        .collect();

    for handle in handles {
        let result = handle.join().expect("scoring thread completes");
        assert_eq!(result.value, result.negative - result.positive);
    }
}
