use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Ingredient keys chosen per category, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub carbs: Vec<String>,
    pub proteins: Vec<String>,
    pub veggies: Vec<String>,
    pub fats: Vec<String>,
}

impl Selection {
    pub fn keys(&self, category: Category) -> &[String] {
        match category {
            Category::Carbs => &self.carbs,
            Category::Proteins => &self.proteins,
            Category::Veggies => &self.veggies,
            Category::Fats => &self.fats,
        }
    }

    fn keys_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Carbs => &mut self.carbs,
            Category::Proteins => &mut self.proteins,
            Category::Veggies => &mut self.veggies,
            Category::Fats => &mut self.fats,
        }
    }

    /// Check or uncheck a key. Returns true if the selection changed.
    pub fn set(&mut self, category: Category, key: &str, checked: bool) -> bool {
        let keys = self.keys_mut(category);
        let present = keys.iter().any(|k| k == key);

        match (checked, present) {
            (true, false) => {
                keys.push(key.to_string());
                true
            }
            (false, true) => {
                keys.retain(|k| k != key);
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, category: Category, key: &str) -> bool {
        self.keys(category).iter().any(|k| k == key)
    }

    /// All keys in allocation order: carbs, proteins, veggies, fats.
    pub fn flatten(&self) -> Vec<&str> {
        Category::ALL
            .iter()
            .flat_map(|c| self.keys(*c).iter().map(String::as_str))
            .collect()
    }

    /// At least one carb and one protein must be picked before review.
    pub fn is_ready_for_review(&self) -> bool {
        !self.carbs.is_empty() && !self.proteins.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.keys(*c).is_empty())
    }
}
