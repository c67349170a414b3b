/// Share of the daily goal calories given to each meal slot.
pub const MEAL_CEILING_FRACTION: f64 = 0.30;

/// Lowest goal-calorie target ever produced. A low BMR combined with a
/// deficit goal would otherwise go negative.
pub const GOAL_CALORIES_FLOOR: i32 = 0;

/// Body-mass index used for the suggested weight.
pub const IDEAL_BMI: f64 = 22.0;

/// Price of one ordered meal (₹).
pub const UNIT_PRICE_PER_MEAL: u32 = 99;

/// Prefix of generated order ids.
pub const ORDER_ID_PREFIX: &str = "SW";

// ─────────────────────────────────────────────────────────────────────────────
// Portion sizing (grams)
// ─────────────────────────────────────────────────────────────────────────────

/// Smallest portion a quantity edit may set.
pub const MIN_MASS_UNITS: u32 = 10;

/// Step used by the +/- quantity controls.
pub const MASS_STEP: u32 = 10;

pub const CARB_MAX_MASS: u32 = 100;
pub const CARB_BUDGET_DIVISOR: f64 = 3.0;

pub const PROTEIN_MAX_MASS: u32 = 120;
pub const PROTEIN_BUDGET_DIVISOR: f64 = 2.0;

pub const VEGGIE_FIXED_MASS: u32 = 80;

pub const FAT_MAX_MASS: u32 = 20;
pub const FAT_BUDGET_DIVISOR: f64 = 8.0;

// ─────────────────────────────────────────────────────────────────────────────
// Fuzzy matching
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler similarity for an ingredient search hit.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;
