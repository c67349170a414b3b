use tracing::debug;

use crate::models::{Category, Ingredient, MealItem, MealPlan, MealSlot};
use crate::planner::catalog::find_ingredient;
use crate::planner::constants::*;

/// Portion size for an ingredient given the meal's remaining budget.
pub fn candidate_mass(category: Category, remaining: i32) -> u32 {
    let share = |divisor: f64| (remaining.max(0) as f64 / divisor).round() as u32;
    match category {
        Category::Carbs => CARB_MAX_MASS.min(share(CARB_BUDGET_DIVISOR)),
        Category::Proteins => PROTEIN_MAX_MASS.min(share(PROTEIN_BUDGET_DIVISOR)),
        Category::Veggies => VEGGIE_FIXED_MASS,
        Category::Fats => FAT_MAX_MASS.min(share(FAT_BUDGET_DIVISOR)),
    }
}

/// Fill one meal with a single greedy pass over `ingredients`.
///
/// Each ingredient is sized from its category and the budget left, and kept
/// only if the budget is still positive and the portion fits. A portion can
/// round down to 0 g on a tiny budget; it is still kept so the quantity can be
/// raised later. A skipped ingredient is never revisited or shrunk.
pub fn allocate_meal(ingredients: &[&Ingredient], ceiling: i32) -> Vec<MealItem> {
    let mut items = Vec::new();
    let mut remaining = ceiling;

    for ingredient in ingredients {
        if remaining <= 0 {
            break;
        }

        let mass = candidate_mass(ingredient.category, remaining);
        let item = MealItem::new(ingredient, mass);
        if item.calories as i32 > remaining {
            debug!(
                ingredient = %ingredient.debug_string(),
                calories = item.calories,
                remaining,
                "skipped: portion exceeds remaining budget"
            );
            continue;
        }

        remaining -= item.calories as i32;
        items.push(item);
    }

    items
}

/// Build breakfast, lunch and dinner from the same ingredients and ceiling.
///
/// The three meals come out identical; they only diverge through later
/// quantity edits.
pub fn generate_meal_plan(ingredients: &[&Ingredient], ceiling: i32) -> MealPlan {
    let meal = allocate_meal(ingredients, ceiling);
    MealPlan {
        breakfast: meal.clone(),
        lunch: meal.clone(),
        dinner: meal,
    }
}

/// Set an item's portion and recompute its derived values.
///
/// Returns false and leaves the plan untouched if `new_mass` is below
/// [`MIN_MASS_UNITS`], the index is out of range, or the item's ingredient
/// is not in the catalog. The meal ceiling is not re-checked.
pub fn set_quantity(plan: &mut MealPlan, slot: MealSlot, index: usize, new_mass: u32) -> bool {
    if new_mass < MIN_MASS_UNITS {
        return false;
    }

    let Some(item) = plan.meal_mut(slot).get_mut(index) else {
        return false;
    };

    match find_ingredient(&item.ingredient_key) {
        Some(ingredient) => {
            item.resize(ingredient, new_mass);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::catalog::resolve_keys;

    fn ingredients(keys: &[&str]) -> Vec<&'static Ingredient> {
        resolve_keys(keys.iter().copied())
    }

    #[test]
    fn test_candidate_mass_by_category() {
        assert_eq!(candidate_mass(Category::Carbs, 549), 100);
        assert_eq!(candidate_mass(Category::Carbs, 150), 50);
        assert_eq!(candidate_mass(Category::Proteins, 437), 120);
        assert_eq!(candidate_mass(Category::Proteins, 100), 50);
        assert_eq!(candidate_mass(Category::Veggies, 5), 80);
        assert_eq!(candidate_mass(Category::Fats, 1000), 20);
        assert_eq!(candidate_mass(Category::Fats, 80), 10);
    }

    #[test]
    fn test_allocate_scenario_meal() {
        let meal = allocate_meal(&ingredients(&["brown-rice", "chicken-breast"]), 549);
        assert_eq!(meal.len(), 2);

        assert_eq!(meal[0].ingredient_key, "brown-rice");
        assert_eq!(meal[0].mass_units, 100);
        assert_eq!(meal[0].calories, 112);

        assert_eq!(meal[1].ingredient_key, "chicken-breast");
        assert_eq!(meal[1].mass_units, 120);
        assert_eq!(meal[1].calories, 198);
    }

    #[test]
    fn test_allocate_skips_items_over_budget() {
        // Veggies are a fixed 80 g regardless of budget: 80 g broccoli = 20 kcal.
        let meal = allocate_meal(&ingredients(&["broccoli", "spinach"]), 30);
        assert_eq!(meal.len(), 1);
        assert_eq!(meal[0].ingredient_key, "broccoli");
        assert_eq!(meal[0].calories, 20);
    }

    #[test]
    fn test_skipped_ingredient_does_not_block_later_ones() {
        // Remaining 10 after broccoli: spinach (18) is skipped, then zucchini (14) too,
        // tomatoes (14) too; nothing shrinks to fit.
        let meal = allocate_meal(
            &ingredients(&["broccoli", "spinach", "zucchini", "tomatoes"]),
            30,
        );
        assert_eq!(
            meal.iter().map(|i| i.ingredient_key.as_str()).collect::<Vec<_>>(),
            vec!["broccoli"]
        );
    }

    #[test]
    fn test_allocate_respects_ceiling() {
        let all: Vec<&Ingredient> = crate::planner::catalog::CATALOG.iter().collect();
        for ceiling in [0, 50, 137, 400, 549, 800, 1200] {
            let meal = allocate_meal(&all, ceiling);
            let total: u32 = meal.iter().map(|i| i.calories).sum();
            assert!(total as i32 <= ceiling.max(0), "ceiling {} exceeded: {}", ceiling, total);
        }
    }

    #[test]
    fn test_allocate_keeps_zero_mass_portion() {
        // round(1 / 3) = 0 g of rice, 0 kcal, still fits a budget of 1.
        let meal = allocate_meal(&ingredients(&["brown-rice"]), 1);
        assert_eq!(meal.len(), 1);
        assert_eq!(meal[0].ingredient_key, "brown-rice");
        assert_eq!(meal[0].mass_units, 0);
        assert_eq!(meal[0].calories, 0);
    }

    #[test]
    fn test_zero_mass_portion_does_not_consume_budget() {
        // Both round to 0 g on a budget of 1, so the second still sees remaining = 1.
        let meal = allocate_meal(&ingredients(&["brown-rice", "olive-oil"]), 1);
        assert_eq!(meal.len(), 2);
        assert!(meal.iter().all(|i| i.mass_units == 0 && i.calories == 0));
    }

    #[test]
    fn test_allocate_empty_inputs() {
        assert!(allocate_meal(&[], 500).is_empty());
        assert!(allocate_meal(&ingredients(&["oats"]), 0).is_empty());
        assert!(allocate_meal(&ingredients(&["oats"]), -20).is_empty());
    }

    #[test]
    fn test_generate_meal_plan_is_identical_and_deterministic() {
        let input = ingredients(&["oats", "eggs", "spinach", "avocado"]);
        let plan = generate_meal_plan(&input, 600);
        assert_eq!(plan.breakfast, plan.lunch);
        assert_eq!(plan.lunch, plan.dinner);
        assert_eq!(plan, generate_meal_plan(&input, 600));
    }

    #[test]
    fn test_set_quantity_recomputes_fields() {
        let mut plan = generate_meal_plan(&ingredients(&["chicken-breast"]), 549);
        assert!(set_quantity(&mut plan, MealSlot::Lunch, 0, 200));

        let item = &plan.lunch[0];
        assert_eq!(item.mass_units, 200);
        assert_eq!(item.calories, 330);
        assert_eq!(item.protein, 62);
        // Other meals untouched.
        assert_eq!(plan.breakfast[0].mass_units, 120);
    }

    #[test]
    fn test_set_quantity_rejects_below_floor() {
        let mut plan = generate_meal_plan(&ingredients(&["brown-rice"]), 549);
        let before = plan.clone();
        assert!(!set_quantity(&mut plan, MealSlot::Breakfast, 0, 9));
        assert!(!set_quantity(&mut plan, MealSlot::Breakfast, 0, 0));
        assert_eq!(plan, before);

        assert!(set_quantity(&mut plan, MealSlot::Breakfast, 0, MIN_MASS_UNITS));
        assert_eq!(plan.breakfast[0].mass_units, MIN_MASS_UNITS);
    }

    #[test]
    fn test_set_quantity_same_value_is_noop_on_fields() {
        let mut plan = generate_meal_plan(&ingredients(&["quinoa", "tofu"]), 700);
        let before = plan.clone();
        let mass = plan.dinner[1].mass_units;
        assert!(set_quantity(&mut plan, MealSlot::Dinner, 1, mass));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_set_quantity_may_exceed_ceiling() {
        let mut plan = generate_meal_plan(&ingredients(&["oats"]), 300);
        assert!(set_quantity(&mut plan, MealSlot::Breakfast, 0, 500));
        assert!(plan.meal_calories(MealSlot::Breakfast) > 300);
    }

    #[test]
    fn test_set_quantity_out_of_range() {
        let mut plan = MealPlan::default();
        assert!(!set_quantity(&mut plan, MealSlot::Breakfast, 3, 50));
    }
}
