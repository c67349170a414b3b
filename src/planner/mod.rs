pub mod allocator;
pub mod catalog;
pub mod constants;
pub mod energy;
pub mod macros;
pub mod order;

pub use allocator::{allocate_meal, candidate_mass, generate_meal_plan, set_quantity};
pub use catalog::{
    filter_by_restrictions, filter_candidates, find_ingredient, ingredients_in,
    search_ingredients, ConditionFilter, NoConditionFilter, CATALOG,
};
pub use constants::*;
pub use energy::{
    compute_bmr, compute_expected_weight, compute_goal_calories, compute_tdee, meal_ceiling,
};
pub use macros::aggregate;
pub use order::{assemble, next_order_id, OrderInputs};
