use std::collections::HashMap;
use std::sync::LazyLock;

use strsim::jaro_winkler;

use crate::error::{MealError, Result};
use crate::models::{Category, Ingredient, MedicalCondition, Restrictions};
use crate::planner::constants::FUZZY_MATCH_THRESHOLD;

const fn entry(
    key: &'static str,
    display_name: &'static str,
    category: Category,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
) -> Ingredient {
    Ingredient {
        key,
        display_name,
        category,
        calories_per_100: calories,
        protein_per_100: protein,
        carbs_per_100: carbs,
        fats_per_100: fats,
    }
}

/// Every orderable ingredient, grouped by category in allocation order.
///
/// Columns: calories, protein, carbs, fats per 100 g.
pub static CATALOG: [Ingredient; 22] = [
    entry("brown-rice", "Brown Rice", Category::Carbs, 112.0, 2.6, 23.0, 0.9),
    entry("quinoa", "Quinoa", Category::Carbs, 120.0, 4.4, 22.0, 1.9),
    entry("sweet-potato", "Sweet Potato", Category::Carbs, 103.0, 2.0, 24.0, 0.1),
    entry("oats", "Oats", Category::Carbs, 154.0, 13.2, 67.0, 6.5),
    entry("whole-wheat-bread", "Whole Wheat Bread", Category::Carbs, 80.0, 3.6, 12.0, 1.9),
    entry("chicken-breast", "Chicken Breast", Category::Proteins, 165.0, 31.0, 0.0, 3.6),
    entry("salmon", "Salmon", Category::Proteins, 208.0, 25.0, 0.0, 12.0),
    entry("eggs", "Eggs", Category::Proteins, 155.0, 13.0, 1.1, 11.0),
    entry("greek-yogurt", "Greek Yogurt", Category::Proteins, 100.0, 10.0, 4.0, 0.4),
    entry("tofu", "Tofu", Category::Proteins, 94.0, 8.0, 1.9, 4.8),
    entry("lentils", "Lentils", Category::Proteins, 116.0, 9.0, 20.0, 0.4),
    entry("broccoli", "Broccoli", Category::Veggies, 25.0, 2.8, 5.0, 0.4),
    entry("spinach", "Spinach", Category::Veggies, 23.0, 2.9, 3.6, 0.4),
    entry("bell-peppers", "Bell Peppers", Category::Veggies, 20.0, 1.0, 4.6, 0.2),
    entry("carrots", "Carrots", Category::Veggies, 25.0, 0.9, 5.8, 0.2),
    entry("zucchini", "Zucchini", Category::Veggies, 17.0, 1.2, 3.1, 0.3),
    entry("tomatoes", "Tomatoes", Category::Veggies, 18.0, 0.9, 3.9, 0.2),
    entry("avocado", "Avocado", Category::Fats, 160.0, 2.0, 9.0, 15.0),
    entry("olive-oil", "Olive Oil", Category::Fats, 119.0, 0.0, 0.0, 13.5),
    entry("almonds", "Almonds", Category::Fats, 164.0, 21.0, 22.0, 50.0),
    entry("chia-seeds", "Chia Seeds", Category::Fats, 137.0, 17.0, 42.0, 31.0),
    entry("coconut-oil", "Coconut Oil", Category::Fats, 117.0, 0.0, 0.0, 13.0),
];

static CATALOG_INDEX: LazyLock<HashMap<&'static str, &'static Ingredient>> =
    LazyLock::new(|| CATALOG.iter().map(|i| (i.key, i)).collect());

/// Look up an ingredient by its key.
pub fn find_ingredient(key: &str) -> Option<&'static Ingredient> {
    CATALOG_INDEX.get(key).copied()
}

/// Look up an ingredient by key, failing for unknown keys.
pub fn require_ingredient(key: &str) -> Result<&'static Ingredient> {
    find_ingredient(key).ok_or_else(|| MealError::UnknownIngredient(key.to_string()))
}

/// All ingredients of one category, in catalog order.
pub fn ingredients_in(category: Category) -> Vec<&'static Ingredient> {
    CATALOG.iter().filter(|i| i.category == category).collect()
}

/// Resolve keys against the catalog, dropping unknown keys.
pub fn resolve_keys<'a, I>(keys: I) -> Vec<&'static Ingredient>
where
    I: IntoIterator<Item = &'a str>,
{
    keys.into_iter().filter_map(find_ingredient).collect()
}

/// Drop ingredients disqualified by any allergy. Order is preserved.
pub fn filter_by_restrictions<'a>(
    ingredients: &[&'a Ingredient],
    restrictions: &Restrictions,
) -> Vec<&'a Ingredient> {
    ingredients
        .iter()
        .copied()
        .filter(|i| !restrictions.excludes_key(i.key))
        .collect()
}

/// Hook for excluding ingredients based on medical conditions.
///
/// Conditions are collected by the wizard but carry no built-in rules; an
/// implementation decides which ingredients a condition rules out.
pub trait ConditionFilter {
    fn excludes(&self, condition: MedicalCondition, ingredient: &Ingredient) -> bool;
}

/// Filter that never excludes anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConditionFilter;

impl ConditionFilter for NoConditionFilter {
    fn excludes(&self, _condition: MedicalCondition, _ingredient: &Ingredient) -> bool {
        false
    }
}

/// Apply both the allergy map and the medical-condition hook.
pub fn filter_candidates<'a>(
    ingredients: &[&'a Ingredient],
    restrictions: &Restrictions,
    condition_filter: &dyn ConditionFilter,
) -> Vec<&'a Ingredient> {
    filter_by_restrictions(ingredients, restrictions)
        .into_iter()
        .filter(|i| {
            !restrictions
                .medical_conditions
                .iter()
                .any(|c| condition_filter.excludes(*c, i))
        })
        .collect()
}

/// Fuzzy search over keys and display names, best match first.
///
/// An exact key or name match (case-insensitive) is returned alone.
pub fn search_ingredients(query: &str) -> Vec<&'static Ingredient> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let exact = CATALOG
        .iter()
        .find(|i| i.key == query || i.display_name.to_lowercase() == query);
    if let Some(ingredient) = exact {
        return vec![ingredient];
    }

    let mut candidates: Vec<(&'static Ingredient, f64)> = CATALOG
        .iter()
        .map(|i| {
            let by_key = jaro_winkler(i.key, &query);
            let by_name = jaro_winkler(&i.display_name.to_lowercase(), &query);
            (i, by_key.max(by_name))
        })
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(i, _)| i).collect()
}
