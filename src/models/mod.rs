mod energy;
mod ingredient;
mod meal;
mod order;
mod profile;
mod restrictions;
mod selection;

pub use energy::{ActivityLevel, EnergyState, Goal};
pub use ingredient::{Category, Ingredient};
pub use meal::{MacroTotals, MealItem, MealPlan, MealSelection, MealSlot};
pub use order::{CalorieTargets, CustomerInfo, OrderRecord, OrderedMeals, Preferences};
pub use profile::{Gender, Profile};
pub use restrictions::{Allergy, MedicalCondition, Restrictions};
pub use selection::Selection;
