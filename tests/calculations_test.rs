#[macro_use]
extern crate assert_float_eq;

use meal_wizard_rs::models::{ActivityLevel, Category, Gender, Goal, Ingredient, Profile};
use meal_wizard_rs::planner::{
    allocate_meal, candidate_mass, compute_bmr, compute_goal_calories, compute_tdee,
    generate_meal_plan, ingredients_in, meal_ceiling, CATALOG, GOAL_CALORIES_FLOOR,
};

fn make_profile(age: u32, gender: Gender, height: f64, weight: f64) -> Profile {
    Profile {
        name: "Test".to_string(),
        age,
        gender: Some(gender),
        height_cm: height,
        weight_kg: weight,
    }
}

#[test]
fn test_bmr_formulas() {
    for (age, height, weight) in [(25, 175.0, 70.0), (42, 160.0, 55.5), (67, 190.0, 101.0)] {
        let male = compute_bmr(&make_profile(age, Gender::Male, height, weight));
        let expected_male =
            (66.0 + 13.7 * weight + 5.0 * height - 6.76 * age as f64).round() as i32;
        assert_eq!(male, expected_male);

        let female = compute_bmr(&make_profile(age, Gender::Female, height, weight));
        let expected_female =
            (655.0 + 9.6 * weight + 1.8 * height - 4.7 * age as f64).round() as i32;
        assert_eq!(female, expected_female);
    }
}

#[test]
fn test_activity_multipliers() {
    let expected = [1.2, 1.375, 1.55, 1.725, 1.9];
    for (level, multiplier) in ActivityLevel::ALL.iter().zip(expected) {
        assert_float_absolute_eq!(level.multiplier(), multiplier, 1e-12);
        assert_eq!(
            compute_tdee(2000, *level),
            (2000.0 * multiplier).round() as i32
        );
    }
}

#[test]
fn test_goal_calories_monotonic() {
    for tdee in [900, 1800, 2600] {
        let cut = compute_goal_calories(tdee, Goal::Cutting.calorie_adjustment());
        let healthy = compute_goal_calories(tdee, Goal::EatHealthy.calorie_adjustment());
        let bulk = compute_goal_calories(tdee, Goal::Bulking.calorie_adjustment());
        assert!(cut < healthy && healthy < bulk);
    }
    assert_eq!(compute_goal_calories(100, -400), GOAL_CALORIES_FLOOR);
}

#[test]
fn test_ceiling_respected_for_every_single_category_mix() {
    for category in Category::ALL {
        let input = ingredients_in(category);
        for ceiling in (0..=1200).step_by(37) {
            let meal = allocate_meal(&input, ceiling);
            let total: u32 = meal.iter().map(|i| i.calories).sum();
            assert!(total as i32 <= ceiling);
        }
    }
}

#[test]
fn test_skipped_item_is_not_shrunk() {
    // Budget 100: oats at min(100, 33) = 33 g = 51 kcal fits; then salmon at
    // min(120, round(49/2) = 25) = 25 g = 52 kcal does not and is dropped.
    let input: Vec<&Ingredient> = ["oats", "salmon"]
        .iter()
        .filter_map(|k| CATALOG.iter().find(|i| i.key == *k))
        .collect();
    let meal = allocate_meal(&input, 100);

    assert_eq!(meal.len(), 1);
    assert_eq!(meal[0].ingredient_key, "oats");
    assert_eq!(meal[0].mass_units, candidate_mass(Category::Carbs, 100));
}

#[test]
fn test_generation_is_deterministic() {
    let input: Vec<&Ingredient> = CATALOG.iter().collect();
    let ceiling = meal_ceiling(2500);
    let first = generate_meal_plan(&input, ceiling);
    for _ in 0..5 {
        assert_eq!(generate_meal_plan(&input, ceiling), first);
    }
    assert_eq!(first.breakfast, first.dinner);
}
