pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_order_csv;
pub use prompts::{prompt_yes_no, review_meals, run_wizard, ReviewOutcome};
pub use render::{
    display_energy_summary, display_ingredient_list, display_meal_plan, display_order,
    display_review,
};
