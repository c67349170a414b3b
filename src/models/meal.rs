use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::models::{Category, Ingredient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn key(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        })
    }
}

/// A sized portion of one ingredient inside a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    pub ingredient_key: String,
    pub display_name: String,
    pub category: Category,
    /// Portion size in grams.
    pub mass_units: u32,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

impl MealItem {
    pub fn new(ingredient: &Ingredient, mass_units: u32) -> Self {
        let (calories, protein, carbs, fats) = ingredient.portion(mass_units);
        Self {
            ingredient_key: ingredient.key.to_string(),
            display_name: ingredient.display_name.to_string(),
            category: ingredient.category,
            mass_units,
            calories,
            protein,
            carbs,
            fats,
        }
    }

    /// Resize the portion, recomputing every derived field from the
    /// canonical per-100 profile.
    pub fn resize(&mut self, ingredient: &Ingredient, mass_units: u32) {
        let (calories, protein, carbs, fats) = ingredient.portion(mass_units);
        self.mass_units = mass_units;
        self.calories = calories;
        self.protein = protein;
        self.carbs = carbs;
        self.fats = fats;
    }

    pub fn macros(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: Vec<MealItem>,
    pub lunch: Vec<MealItem>,
    pub dinner: Vec<MealItem>,
}

impl MealPlan {
    pub fn meal(&self, slot: MealSlot) -> &[MealItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn meal_mut(&mut self, slot: MealSlot) -> &mut Vec<MealItem> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    pub fn is_empty(&self) -> bool {
        MealSlot::ALL.iter().all(|s| self.meal(*s).is_empty())
    }

    /// Calories of a single meal. Saturates at `u32::MAX`.
    pub fn meal_calories(&self, slot: MealSlot) -> u32 {
        self.meal(slot)
            .iter()
            .fold(0u32, |total, i| total.saturating_add(i.calories))
    }
}

/// Which meals the user is ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSelection {
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
}

impl Default for MealSelection {
    fn default() -> Self {
        Self {
            breakfast: true,
            lunch: false,
            dinner: false,
        }
    }
}

impl MealSelection {
    pub fn all() -> Self {
        Self {
            breakfast: true,
            lunch: true,
            dinner: true,
        }
    }

    pub fn is_selected(&self, slot: MealSlot) -> bool {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    pub fn set(&mut self, slot: MealSlot, selected: bool) {
        match slot {
            MealSlot::Breakfast => self.breakfast = selected,
            MealSlot::Lunch => self.lunch = selected,
            MealSlot::Dinner => self.dinner = selected,
        }
    }

    pub fn selected_slots(&self) -> Vec<MealSlot> {
        MealSlot::ALL
            .into_iter()
            .filter(|s| self.is_selected(*s))
            .collect()
    }

    pub fn count_selected(&self) -> u32 {
        MealSlot::ALL.iter().filter(|s| self.is_selected(**s)).count() as u32
    }
}

/// Summed calories and macros. Addition saturates rather than overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

impl Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, rhs: Self) -> Self::Output {
        MacroTotals {
            calories: self.calories.saturating_add(rhs.calories),
            protein: self.protein.saturating_add(rhs.protein),
            carbs: self.carbs.saturating_add(rhs.carbs),
            fats: self.fats.saturating_add(rhs.fats),
        }
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroTotals::default(), Add::add)
    }
}
