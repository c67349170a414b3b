use crate::models::{MacroTotals, MealPlan, MealSelection, MealSlot};

/// Sum calories and macros over every item in the selected meals.
///
/// Always computed from scratch so totals can never drift from the plan.
pub fn aggregate(plan: &MealPlan, selection: &MealSelection) -> MacroTotals {
    MealSlot::ALL
        .into_iter()
        .filter(|slot| selection.is_selected(*slot))
        .flat_map(|slot| plan.meal(slot).iter().map(|item| item.macros()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::allocator::{generate_meal_plan, set_quantity};
    use crate::planner::catalog::resolve_keys;

    fn plan() -> MealPlan {
        let input = resolve_keys(["brown-rice", "chicken-breast", "broccoli"]);
        generate_meal_plan(&input, 549)
    }

    #[test]
    fn test_aggregate_breakfast_only() {
        let plan = plan();
        let totals = aggregate(&plan, &MealSelection::default());
        // 112 + 198 + 20
        assert_eq!(totals.calories, 330);
    }

    #[test]
    fn test_aggregate_nothing_selected() {
        let none = MealSelection {
            breakfast: false,
            lunch: false,
            dinner: false,
        };
        assert_eq!(aggregate(&plan(), &none), MacroTotals::default());
    }

    #[test]
    fn test_toggle_removes_exactly_one_meal() {
        let mut plan = plan();
        set_quantity(&mut plan, MealSlot::Lunch, 0, 150);

        let all = aggregate(&plan, &MealSelection::all());
        let mut without_lunch = MealSelection::all();
        without_lunch.set(MealSlot::Lunch, false);
        let partial = aggregate(&plan, &without_lunch);

        let lunch_only = MealSelection {
            breakfast: false,
            lunch: true,
            dinner: false,
        };
        assert_eq!(partial + aggregate(&plan, &lunch_only), all);
    }

    #[test]
    fn test_all_meals_equal_sum_of_each() {
        let plan = plan();
        let each: MacroTotals = MealSlot::ALL
            .into_iter()
            .map(|slot| {
                let mut sel = MealSelection {
                    breakfast: false,
                    lunch: false,
                    dinner: false,
                };
                sel.set(slot, true);
                aggregate(&plan, &sel)
            })
            .sum();
        assert_eq!(aggregate(&plan, &MealSelection::all()), each);
    }
}
