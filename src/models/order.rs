use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    ActivityLevel, Allergy, Gender, Goal, MacroTotals, MealItem, MealSelection, MealSlot,
    MedicalCondition,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub age: u32,
    pub gender: Option<Gender>,
    pub height: f64,
    pub weight: f64,
    pub bmr: i32,
    pub tdee: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
    pub medical_conditions: Vec<MedicalCondition>,
    pub allergies: Vec<Allergy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieTargets {
    pub maintenance: i32,
    pub goal: i32,
}

/// Meals included in an order. Deselected slots are absent, not empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderedMeals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Vec<MealItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Vec<MealItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Vec<MealItem>>,
}

impl OrderedMeals {
    pub fn meal(&self, slot: MealSlot) -> Option<&[MealItem]> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_deref(),
            MealSlot::Lunch => self.lunch.as_deref(),
            MealSlot::Dinner => self.dinner.as_deref(),
        }
    }

    pub fn insert(&mut self, slot: MealSlot, items: Vec<MealItem>) {
        match slot {
            MealSlot::Breakfast => self.breakfast = Some(items),
            MealSlot::Lunch => self.lunch = Some(items),
            MealSlot::Dinner => self.dinner = Some(items),
        }
    }

    /// Present meals in breakfast, lunch, dinner order.
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &[MealItem])> {
        MealSlot::ALL
            .into_iter()
            .filter_map(|slot| self.meal(slot).map(|items| (slot, items)))
    }
}

/// Immutable snapshot handed to the order store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub customer_info: CustomerInfo,
    pub preferences: Preferences,
    pub calories: CalorieTargets,
    pub meal_plan: OrderedMeals,
    pub selected_meals: MealSelection,
    pub nutrition: MacroTotals,
    pub total_price: u32,
    pub order_date: DateTime<Utc>,
    pub order_id: String,
}
