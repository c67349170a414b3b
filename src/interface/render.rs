use crate::models::{
    Ingredient, MacroTotals, MealItem, MealPlan, MealSelection, MealSlot, OrderRecord,
};
use crate::state::PlannerSession;

fn signed(value: i32) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Display the BMR → TDEE → goal calories chain.
pub fn display_energy_summary(session: &PlannerSession) {
    let energy = session.energy();

    println!();
    println!("=== Calorie Targets ===");
    println!();
    println!("BMR:                 {} cal/day", energy.bmr);
    match energy.activity {
        Some(activity) => println!(
            "Maintenance (TDEE):  {} cal/day  ({} x {})",
            energy.tdee,
            energy.bmr,
            activity.multiplier()
        ),
        None => println!("Maintenance (TDEE):  (no activity level chosen)"),
    }
    match energy.goal {
        Some(goal) => println!(
            "Goal calories:       {} cal/day  ({}, {} cal)",
            energy.goal_calories,
            goal,
            signed(goal.calorie_adjustment())
        ),
        None => println!("Goal calories:       (no goal chosen)"),
    }
    println!("Per meal:            ~{} cal", session.meal_ceiling());
    println!();
}

fn display_items(items: &[MealItem]) {
    if items.is_empty() {
        println!("    (no items fit this meal)");
        return;
    }

    let max_name_len = items.iter().map(|i| i.display_name.len()).max().unwrap_or(10);

    for (i, item) in items.iter().enumerate() {
        println!(
            "  {:>2}. {:<width$}  {:<10} {:>4}g  {:>4} cal | P {:>3}g  C {:>3}g  F {:>3}g",
            i + 1,
            item.display_name,
            item.category.label(),
            item.mass_units,
            item.calories,
            item.protein,
            item.carbs,
            item.fats,
            width = max_name_len
        );
    }
}

fn display_totals(label: &str, totals: &MacroTotals) {
    println!(
        "{}: {} cal | Protein {}g | Carbs {}g | Fats {}g",
        label, totals.calories, totals.protein, totals.carbs, totals.fats
    );
}

/// Display all three meals, marking which are selected for ordering.
pub fn display_meal_plan(plan: &MealPlan, selection: &MealSelection, ceiling: i32) {
    if plan.is_empty() {
        println!("No meal plan generated (no ingredients selected or zero calorie budget).");
        return;
    }

    println!();
    println!("=== Meal Plan ({} cal per meal) ===", ceiling);

    for slot in MealSlot::ALL {
        let mark = if selection.is_selected(slot) { "[x]" } else { "[ ]" };
        println!();
        println!("{} {} - {} cal", mark, slot, plan.meal_calories(slot));
        display_items(plan.meal(slot));
    }
    println!();
}

/// Display the review screen: plan plus totals and price for the selection.
pub fn display_review(session: &PlannerSession) {
    display_meal_plan(
        session.meal_plan(),
        session.meal_selection(),
        session.meal_ceiling(),
    );

    println!("--- Selected Meals ---");
    display_totals("Total", session.macros());
    let count = session.meal_selection().count_selected();
    println!(
        "Price: {} meal(s) x ₹{} = ₹{}",
        count,
        session.config().unit_price,
        count * session.config().unit_price
    );
    println!();
}

/// Display a placed order.
pub fn display_order(record: &OrderRecord) {
    let info = &record.customer_info;
    let prefs = &record.preferences;

    println!();
    println!("=== Order Confirmed ===");
    println!();
    println!("Order ID:  {}", record.order_id);
    println!(
        "Placed:    {}",
        record.order_date.format("%d %B %Y, %H:%M UTC")
    );
    println!();
    println!("--- Customer ---");
    println!("Name:      {}", info.name);
    println!(
        "Age: {}  Gender: {}  Height: {}cm  Weight: {}kg",
        info.age,
        info.gender.map(|g| g.to_string()).unwrap_or_else(|| "-".to_string()),
        info.height,
        info.weight
    );
    println!("BMR: {}  TDEE: {}", info.bmr, info.tdee);
    println!();
    println!("--- Preferences ---");
    println!(
        "Activity:  {}",
        prefs
            .activity_level
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "Goal:      {}",
        prefs.goal.map(|g| g.to_string()).unwrap_or_else(|| "-".to_string())
    );
    if !prefs.medical_conditions.is_empty() {
        let names: Vec<&str> = prefs.medical_conditions.iter().map(|c| c.label()).collect();
        println!("Medical:   {}", names.join(", "));
    }
    if !prefs.allergies.is_empty() {
        let names: Vec<&str> = prefs.allergies.iter().map(|a| a.label()).collect();
        println!("Allergies: {}", names.join(", "));
    }
    println!(
        "Calories:  maintenance {} / goal {}",
        record.calories.maintenance, record.calories.goal
    );

    for (slot, items) in record.meal_plan.iter() {
        println!();
        println!("--- {} ---", slot);
        display_items(items);
    }

    println!();
    display_totals("Nutrition", &record.nutrition);
    println!(
        "Total price: ₹{} ({} meal(s))",
        record.total_price,
        record.selected_meals.count_selected()
    );
    println!();
}

/// Display catalog entries with their per-100 g values.
pub fn display_ingredient_list(ingredients: &[&Ingredient], title: &str) {
    if ingredients.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, ingredients.len());
    println!();

    for ingredient in ingredients {
        println!(
            "  {:<18} {:<18} {:>4} cal  P:{} C:{} F:{} (per 100g)",
            ingredient.key,
            ingredient.display_name,
            ingredient.calories_per_100,
            ingredient.protein_per_100,
            ingredient.carbs_per_100,
            ingredient.fats_per_100
        );
    }

    println!();
}
