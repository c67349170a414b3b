use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

use crate::models::{
    CalorieTargets, CustomerInfo, EnergyState, MacroTotals, MealPlan, MealSelection,
    OrderRecord, OrderedMeals, Preferences, Profile, Restrictions,
};
use crate::planner::constants::ORDER_ID_PREFIX;

/// Borrowed view of everything an order snapshots.
#[derive(Debug, Clone, Copy)]
pub struct OrderInputs<'a> {
    pub profile: &'a Profile,
    pub energy: &'a EnergyState,
    pub restrictions: &'a Restrictions,
    pub meal_plan: &'a MealPlan,
    pub selection: &'a MealSelection,
    pub macros: &'a MacroTotals,
}

static LAST_ORDER_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Time-based order id, strictly increasing within the process.
///
/// Two orders placed in the same millisecond get consecutive ids.
pub fn next_order_id(now: DateTime<Utc>) -> String {
    let now_ms = now.timestamp_millis();
    let mut last = LAST_ORDER_MILLIS.load(Ordering::Relaxed);
    loop {
        let candidate = now_ms.max(last + 1);
        match LAST_ORDER_MILLIS.compare_exchange_weak(
            last,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return format!("{}{}", ORDER_ID_PREFIX, candidate),
            Err(current) => last = current,
        }
    }
}

pub fn total_price(selection: &MealSelection, unit_price: u32) -> u32 {
    selection.count_selected() * unit_price
}

/// Copy the selected meals; deselected slots are left out entirely.
pub fn selected_meals(plan: &MealPlan, selection: &MealSelection) -> OrderedMeals {
    let mut meals = OrderedMeals::default();
    for slot in selection.selected_slots() {
        meals.insert(slot, plan.meal(slot).to_vec());
    }
    meals
}

/// Snapshot the current state into an immutable order record.
pub fn assemble(inputs: OrderInputs<'_>, unit_price: u32) -> OrderRecord {
    let order_date = Utc::now();
    let OrderInputs {
        profile,
        energy,
        restrictions,
        meal_plan,
        selection,
        macros,
    } = inputs;

    OrderRecord {
        customer_info: CustomerInfo {
            name: profile.name.clone(),
            age: profile.age,
            gender: profile.gender,
            height: profile.height_cm,
            weight: profile.weight_kg,
            bmr: energy.bmr,
            tdee: energy.tdee,
        },
        preferences: Preferences {
            activity_level: energy.activity,
            goal: energy.goal,
            medical_conditions: restrictions.medical_conditions.iter().copied().collect(),
            allergies: restrictions.allergies.iter().copied().collect(),
        },
        calories: CalorieTargets {
            maintenance: energy.maintenance_calories(),
            goal: energy.goal_calories,
        },
        meal_plan: selected_meals(meal_plan, selection),
        selected_meals: *selection,
        nutrition: *macros,
        total_price: total_price(selection, unit_price),
        order_date,
        order_id: next_order_id(order_date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealSlot;
    use crate::planner::allocator::generate_meal_plan;
    use crate::planner::catalog::resolve_keys;
    use crate::planner::constants::UNIT_PRICE_PER_MEAL;
    use crate::planner::macros::aggregate;

    #[test]
    fn test_price_counts_selected_meals() {
        assert_eq!(total_price(&MealSelection::default(), UNIT_PRICE_PER_MEAL), 99);
        assert_eq!(total_price(&MealSelection::all(), UNIT_PRICE_PER_MEAL), 297);
        let none = MealSelection {
            breakfast: false,
            lunch: false,
            dinner: false,
        };
        assert_eq!(total_price(&none, UNIT_PRICE_PER_MEAL), 0);
    }

    #[test]
    fn test_order_ids_are_unique_for_same_instant() {
        let now = Utc::now();
        let a = next_order_id(now);
        let b = next_order_id(now);
        assert_ne!(a, b);
        assert!(a.starts_with(ORDER_ID_PREFIX));
    }

    #[test]
    fn test_assemble_omits_deselected_meals() {
        let plan = generate_meal_plan(&resolve_keys(["oats", "eggs"]), 500);
        let mut selection = MealSelection::default();
        selection.set(MealSlot::Dinner, true);
        let macros = aggregate(&plan, &selection);

        let record = assemble(
            OrderInputs {
                profile: &Profile::default(),
                energy: &EnergyState::default(),
                restrictions: &Restrictions::default(),
                meal_plan: &plan,
                selection: &selection,
                macros: &macros,
            },
            UNIT_PRICE_PER_MEAL,
        );

        assert!(record.meal_plan.breakfast.is_some());
        assert!(record.meal_plan.lunch.is_none());
        assert!(record.meal_plan.dinner.is_some());
        assert_eq!(record.total_price, 198);
        assert_eq!(record.nutrition, macros);

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["mealPlan"].get("lunch").is_none());
        assert!(json.get("orderId").is_some());
    }
}
