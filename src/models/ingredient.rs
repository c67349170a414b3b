use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MealError;

/// Ingredient group. Declaration order is the order groups are fed to the
/// allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Carbs,
    Proteins,
    Veggies,
    Fats,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Carbs,
        Category::Proteins,
        Category::Veggies,
        Category::Fats,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Carbs => "carbs",
            Category::Proteins => "proteins",
            Category::Veggies => "veggies",
            Category::Fats => "fats",
        }
    }

    /// Label shown next to meal items.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Carbs => "Carbs",
            Category::Proteins => "Protein",
            Category::Veggies => "Vegetables",
            Category::Fats => "Fats",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "carbs" | "carb" => Ok(Category::Carbs),
            "proteins" | "protein" => Ok(Category::Proteins),
            "veggies" | "vegetables" => Ok(Category::Veggies),
            "fats" | "fat" => Ok(Category::Fats),
            other => Err(MealError::InvalidInput(format!("unknown category '{}'", other))),
        }
    }
}

/// Immutable catalog entry. Nutrient values are per 100 g.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ingredient {
    pub key: &'static str,
    pub display_name: &'static str,
    pub category: Category,
    pub calories_per_100: f64,
    pub protein_per_100: f64,
    pub carbs_per_100: f64,
    pub fats_per_100: f64,
}

impl Ingredient {
    /// Portion values for `mass` grams, rounded to whole units.
    ///
    /// Returns (calories, protein, carbs, fats).
    pub fn portion(&self, mass: u32) -> (u32, u32, u32, u32) {
        let multiplier = mass as f64 / 100.0;
        let scale = |per_100: f64| (per_100 * multiplier).round().max(0.0) as u32;
        (
            scale(self.calories_per_100),
            scale(self.protein_per_100),
            scale(self.carbs_per_100),
            scale(self.fats_per_100),
        )
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} cal, P:{} C:{} F:{} per 100g",
            self.display_name,
            self.category.key(),
            self.calories_per_100,
            self.protein_per_100,
            self.carbs_per_100,
            self.fats_per_100
        )
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Ingredient {}

impl std::hash::Hash for Ingredient {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken() -> Ingredient {
        Ingredient {
            key: "chicken-breast",
            display_name: "Chicken Breast",
            category: Category::Proteins,
            calories_per_100: 165.0,
            protein_per_100: 31.0,
            carbs_per_100: 0.0,
            fats_per_100: 3.6,
        }
    }

    #[test]
    fn test_portion_scales_and_rounds() {
        let (cal, protein, carbs, fats) = chicken().portion(120);
        assert_eq!(cal, 198);
        assert_eq!(protein, 37); // 37.2
        assert_eq!(carbs, 0);
        assert_eq!(fats, 4); // 4.32
    }

    #[test]
    fn test_debug_string_lists_per_100_values() {
        assert_eq!(
            chicken().debug_string(),
            "Chicken Breast [proteins]: 165 cal, P:31 C:0 F:3.6 per 100g"
        );
    }

    #[test]
    fn test_portion_of_100_is_identity_after_rounding() {
        let (cal, protein, _, fats) = chicken().portion(100);
        assert_eq!(cal, 165);
        assert_eq!(protein, 31);
        assert_eq!(fats, 4);
    }

    #[test]
    fn test_equality_by_key() {
        let mut renamed = chicken();
        renamed.display_name = "Chicken";
        assert_eq!(chicken(), renamed);
    }

    #[test]
    fn test_category_order_matches_allocation_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert_eq!("vegetables".parse::<Category>().unwrap(), Category::Veggies);
    }
}
