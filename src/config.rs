use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MealError, Result};
use crate::planner::constants::{GOAL_CALORIES_FLOOR, MEAL_CEILING_FRACTION, UNIT_PRICE_PER_MEAL};

/// Tunable planner settings.
///
/// Every field falls back to the matching constant when missing from a
/// config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Price of one ordered meal.
    pub unit_price: u32,
    /// Share of goal calories allotted to each meal.
    pub meal_ceiling_fraction: f64,
    /// Floor applied to goal calories.
    pub min_goal_calories: i32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            unit_price: UNIT_PRICE_PER_MEAL,
            meal_ceiling_fraction: MEAL_CEILING_FRACTION,
            min_goal_calories: GOAL_CALORIES_FLOOR,
        }
    }
}

impl PlannerConfig {
    /// Load a config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.meal_ceiling_fraction > 0.0 && self.meal_ceiling_fraction <= 1.0) {
            return Err(MealError::InvalidInput(format!(
                "meal_ceiling_fraction must be in (0, 1], got {}",
                self.meal_ceiling_fraction
            )));
        }
        if self.min_goal_calories < GOAL_CALORIES_FLOOR {
            return Err(MealError::InvalidInput(format!(
                "min_goal_calories must be >= {}",
                GOAL_CALORIES_FLOOR
            )));
        }
        Ok(())
    }
}
