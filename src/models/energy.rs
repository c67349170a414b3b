use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MealError;

/// Canonical activity table used for every TDEE computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little to no exercise, desk job.
    Sedentary,
    /// 1-2 days per week of light activity.
    Light,
    /// 3-5 days per week of moderate activity.
    Moderate,
    /// 6-7 days per week of intense activity.
    Heavy,
    /// Twice daily or very intense training.
    VeryHeavy,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Heavy,
        ActivityLevel::VeryHeavy,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Heavy => 1.725,
            ActivityLevel::VeryHeavy => 1.9,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Heavy => "heavy",
            ActivityLevel::VeryHeavy => "very-heavy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light Exercise",
            ActivityLevel::Moderate => "Moderate Exercise",
            ActivityLevel::Heavy => "Heavy Exercise",
            ActivityLevel::VeryHeavy => "Very Heavy Exercise",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little to no exercise, desk job",
            ActivityLevel::Light => "1-2 days per week of light activity",
            ActivityLevel::Moderate => "3-5 days per week of moderate activity",
            ActivityLevel::Heavy => "6-7 days per week of intense activity",
            ActivityLevel::VeryHeavy => "Twice daily or very intense training",
        }
    }

    /// Look up the level whose multiplier matches exactly.
    ///
    /// Any value outside the five supported multipliers is rejected. Parsing
    /// a numeric string such as `"1.55"` goes through here.
    pub fn from_multiplier(multiplier: f64) -> crate::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.multiplier() - multiplier).abs() < 1e-9)
            .ok_or(MealError::InvalidActivityMultiplier(multiplier))
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ActivityLevel {
    type Err = MealError;

    /// Accepts the canonical keys, the older `lightly-active` style names,
    /// or a raw multiplier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(multiplier) = s.trim().parse::<f64>() {
            return Self::from_multiplier(multiplier);
        }
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" | "lightly-active" => Ok(ActivityLevel::Light),
            "moderate" | "moderately-active" => Ok(ActivityLevel::Moderate),
            "heavy" | "very-active" => Ok(ActivityLevel::Heavy),
            "very-heavy" | "extra-active" => Ok(ActivityLevel::VeryHeavy),
            other => Err(MealError::InvalidInput(format!(
                "unknown activity level '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    Bulking,
    Cutting,
    BuildMuscle,
    EatHealthy,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::Bulking, Goal::Cutting, Goal::BuildMuscle, Goal::EatHealthy];

    /// Daily calorie adjustment applied on top of maintenance.
    pub fn calorie_adjustment(&self) -> i32 {
        match self {
            Goal::Bulking | Goal::BuildMuscle => 400,
            Goal::Cutting => -400,
            Goal::EatHealthy => 0,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Goal::Bulking => "bulking",
            Goal::Cutting => "cutting",
            Goal::BuildMuscle => "build-muscle",
            Goal::EatHealthy => "eat-healthy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Goal::Bulking => "Bulking",
            Goal::Cutting => "Cutting",
            Goal::BuildMuscle => "Build Muscle",
            Goal::EatHealthy => "Eat Healthy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::Bulking => "Gain weight and build muscle mass",
            Goal::Cutting => "Lose weight while maintaining muscle",
            Goal::BuildMuscle => "Focus on muscle growth and strength",
            Goal::EatHealthy => "Maintain a balanced, nutritious diet",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Goal {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goal::ALL
            .into_iter()
            .find(|g| g.key() == s.trim().to_lowercase())
            .ok_or_else(|| MealError::InvalidInput(format!("unknown goal '{}'", s)))
    }
}

/// Derived energy figures kept in step with the profile, activity and goal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyState {
    pub bmr: i32,
    pub activity: Option<ActivityLevel>,
    /// Maintenance calories (BMR scaled by activity).
    pub tdee: i32,
    pub goal: Option<Goal>,
    pub goal_calories: i32,
}

impl EnergyState {
    pub fn maintenance_calories(&self) -> i32 {
        self.tdee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_multiplier_accepts_table_values() {
        for level in ActivityLevel::ALL {
            assert_eq!(
                ActivityLevel::from_multiplier(level.multiplier()).unwrap(),
                level
            );
        }
    }

    #[test]
    fn test_from_multiplier_rejects_other_values() {
        assert!(matches!(
            ActivityLevel::from_multiplier(1.3),
            Err(MealError::InvalidActivityMultiplier(_))
        ));
        assert!(ActivityLevel::from_multiplier(0.0).is_err());
    }

    #[test]
    fn test_parse_raw_multiplier() {
        assert_eq!(
            "1.55".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::Moderate
        );
        assert_eq!(" 1.2 ".parse::<ActivityLevel>().unwrap(), ActivityLevel::Sedentary);
        assert!(matches!(
            "1.6".parse::<ActivityLevel>(),
            Err(MealError::InvalidActivityMultiplier(_))
        ));
    }

    #[test]
    fn test_legacy_activity_aliases() {
        assert_eq!(
            "lightly-active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::Light
        );
        assert_eq!(
            "extra-active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryHeavy
        );
        assert_eq!(
            "very-heavy".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryHeavy
        );
    }

    #[test]
    fn test_goal_adjustments_are_ordered() {
        assert!(Goal::Cutting.calorie_adjustment() < Goal::EatHealthy.calorie_adjustment());
        assert!(Goal::EatHealthy.calorie_adjustment() < Goal::Bulking.calorie_adjustment());
        assert_eq!(
            Goal::BuildMuscle.calorie_adjustment(),
            Goal::Bulking.calorie_adjustment()
        );
    }

    #[test]
    fn test_goal_parse_and_serde_key_agree() {
        for goal in Goal::ALL {
            let json = serde_json::to_string(&goal).unwrap();
            assert_eq!(json, format!("\"{}\"", goal.key()));
            assert_eq!(goal.key().parse::<Goal>().unwrap(), goal);
        }
    }
}
