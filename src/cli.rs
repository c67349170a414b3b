use clap::{Parser, Subcommand};

/// MealWizard — derive a calorie budget and build a three-meal plan from your ingredients.
#[derive(Parser, Debug)]
#[command(name = "meal_wizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory where placed orders are stored.
    #[arg(short, long, default_value = "orders")]
    pub store: String,

    /// Optional JSON file overriding planner settings.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through the interactive meal wizard.
    Plan,

    /// Build a plan from flags without prompting.
    Quote {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long)]
        age: u32,

        /// male or female.
        #[arg(long)]
        gender: String,

        /// Height in cm.
        #[arg(long)]
        height: f64,

        /// Weight in kg.
        #[arg(long)]
        weight: f64,

        /// sedentary, light, moderate, heavy, very-heavy, or a multiplier
        /// such as 1.55.
        #[arg(long)]
        activity: String,

        /// bulking, cutting, build-muscle, eat-healthy.
        #[arg(long)]
        goal: String,

        /// Medical condition (repeatable).
        #[arg(long = "condition")]
        conditions: Vec<String>,

        /// Allergy (repeatable).
        #[arg(long = "allergy")]
        allergies: Vec<String>,

        /// Ingredient key or name, fuzzy matched (repeatable).
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,

        /// Meals to order (comma-separated).
        #[arg(long, default_value = "breakfast")]
        meals: String,

        /// Save the order instead of only printing the plan.
        #[arg(long)]
        place: bool,
    },

    /// Show a stored order (the latest if no id is given).
    Show {
        #[arg(long)]
        order_id: Option<String>,
    },

    /// List the ingredient catalog.
    Catalog {
        /// Hide ingredients excluded by this allergy (repeatable).
        #[arg(long = "allergy")]
        allergies: Vec<String>,

        /// Fuzzy search by name.
        #[arg(long)]
        search: Option<String>,
    },

    /// Export a stored order's meals to CSV.
    Export {
        #[arg(long)]
        order_id: Option<String>,

        /// Output CSV path.
        #[arg(short, long, default_value = "order.csv")]
        out: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
