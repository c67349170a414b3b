use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::error::{MealError, Result};
use crate::models::{
    ActivityLevel, Allergy, Category, EnergyState, Goal, Ingredient, MacroTotals, MealPlan,
    MealSelection, MealSlot, MedicalCondition, OrderRecord, Profile, Restrictions, Selection,
};
use crate::planner::allocator::{generate_meal_plan, set_quantity};
use crate::planner::catalog::{
    filter_candidates, ingredients_in, require_ingredient, resolve_keys, ConditionFilter,
    NoConditionFilter,
};
use crate::planner::constants::MASS_STEP;
use crate::planner::energy::{
    compute_bmr, compute_expected_weight, compute_goal_calories, compute_tdee,
    meal_ceiling_with_fraction,
};
use crate::planner::macros::aggregate;
use crate::planner::order::{assemble, OrderInputs};
use crate::state::persistence::OrderStore;

/// An input that changed. Drives which derived values get recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Profile,
    Activity,
    Goal,
    Restrictions,
    Selection,
    MealPlan,
    MealSelection,
}

impl Change {
    /// bmr reads: profile.
    fn touches_bmr(self) -> bool {
        self == Change::Profile
    }

    /// tdee reads: bmr, activity.
    fn touches_tdee(self) -> bool {
        self.touches_bmr() || self == Change::Activity
    }

    /// goal calories (and the meal ceiling) read: tdee, goal.
    fn touches_goal_calories(self) -> bool {
        self.touches_tdee() || self == Change::Goal
    }

    /// meal plan reads: ceiling, restrictions, selection.
    fn touches_meal_plan(self) -> bool {
        self.touches_goal_calories()
            || matches!(self, Change::Restrictions | Change::Selection)
    }

    /// macros read: meal plan, meal selection.
    fn touches_macros(self) -> bool {
        self.touches_meal_plan() || matches!(self, Change::MealPlan | Change::MealSelection)
    }
}

/// Owns every wizard input and all values derived from them.
///
/// Each setter applies its whole update first and then recomputes the
/// downstream values in dependency order, so readers never see a mix of
/// old and new figures. The meal plan is first built by
/// [`PlannerSession::enter_review`]; after that, any upstream edit rebuilds
/// it (discarding quantity edits).
pub struct PlannerSession {
    config: PlannerConfig,
    condition_filter: Box<dyn ConditionFilter>,

    profile: Profile,
    energy: EnergyState,
    restrictions: Restrictions,
    selection: Selection,

    meal_plan: MealPlan,
    plan_generated: bool,
    meal_selection: MealSelection,
    macros: MacroTotals,
}

impl Default for PlannerSession {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl PlannerSession {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            condition_filter: Box::new(NoConditionFilter),
            profile: Profile::default(),
            energy: EnergyState::default(),
            restrictions: Restrictions::default(),
            selection: Selection::default(),
            meal_plan: MealPlan::default(),
            plan_generated: false,
            meal_selection: MealSelection::default(),
            macros: MacroTotals::default(),
        }
    }

    /// Install a medical-condition filter and re-derive candidates.
    pub fn with_condition_filter(mut self, filter: Box<dyn ConditionFilter>) -> Self {
        self.condition_filter = filter;
        self.propagate(Change::Restrictions);
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn energy(&self) -> &EnergyState {
        &self.energy
    }

    pub fn restrictions(&self) -> &Restrictions {
        &self.restrictions
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn meal_plan(&self) -> &MealPlan {
        &self.meal_plan
    }

    pub fn meal_selection(&self) -> &MealSelection {
        &self.meal_selection
    }

    pub fn macros(&self) -> &MacroTotals {
        &self.macros
    }

    pub fn is_plan_generated(&self) -> bool {
        self.plan_generated
    }

    // ── Inputs ──────────────────────────────────────────────────────────

    /// Apply any number of profile edits as one update.
    pub fn update_profile<F: FnOnce(&mut Profile)>(&mut self, edit: F) {
        edit(&mut self.profile);
        self.propagate(Change::Profile);
    }

    /// Suggested weight for the current height (0 if height is unset).
    pub fn expected_weight(&self) -> u32 {
        compute_expected_weight(self.profile.height_cm)
    }

    /// Overwrite the weight with the suggested value. Returns false when
    /// there is no suggestion yet.
    pub fn accept_expected_weight(&mut self) -> bool {
        let expected = self.expected_weight();
        if expected == 0 {
            return false;
        }
        self.update_profile(|p| p.weight_kg = expected as f64);
        true
    }

    pub fn set_activity(&mut self, activity: Option<ActivityLevel>) {
        self.energy.activity = activity;
        self.propagate(Change::Activity);
    }

    pub fn set_goal(&mut self, goal: Option<Goal>) {
        self.energy.goal = goal;
        self.propagate(Change::Goal);
    }

    pub fn set_condition(&mut self, condition: MedicalCondition, checked: bool) {
        self.restrictions.set_condition(condition, checked);
        self.propagate(Change::Restrictions);
    }

    pub fn set_allergy(&mut self, allergy: Allergy, checked: bool) {
        self.restrictions.set_allergy(allergy, checked);
        self.propagate(Change::Restrictions);
    }

    /// Ingredients the user may currently pick in a category.
    pub fn available_ingredients(&self, category: Category) -> Vec<&'static Ingredient> {
        filter_candidates(
            &ingredients_in(category),
            &self.restrictions,
            self.condition_filter.as_ref(),
        )
    }

    /// Check or uncheck an ingredient. Returns whether the selection changed.
    ///
    /// Checking an ingredient ruled out by the current restrictions fails.
    pub fn select_ingredient(&mut self, key: &str, checked: bool) -> Result<bool> {
        let ingredient = require_ingredient(key)?;

        if checked
            && !self
                .available_ingredients(ingredient.category)
                .contains(&ingredient)
        {
            return Err(MealError::InvalidInput(format!(
                "{} is excluded by your restrictions",
                ingredient.display_name
            )));
        }

        let changed = self.selection.set(ingredient.category, ingredient.key, checked);
        if changed {
            self.propagate(Change::Selection);
        }
        Ok(changed)
    }

    pub fn set_meal_selected(&mut self, slot: MealSlot, selected: bool) {
        self.meal_selection.set(slot, selected);
        self.propagate(Change::MealSelection);
    }

    // ── Review stage ────────────────────────────────────────────────────

    /// Calorie budget per meal slot.
    pub fn meal_ceiling(&self) -> i32 {
        meal_ceiling_with_fraction(self.energy.goal_calories, self.config.meal_ceiling_fraction)
    }

    /// Selected ingredients that survive the current restrictions, in
    /// allocation order.
    pub fn allocation_input(&self) -> Vec<&'static Ingredient> {
        let selected = resolve_keys(self.selection.flatten());
        filter_candidates(&selected, &self.restrictions, self.condition_filter.as_ref())
    }

    /// Build a fresh meal plan. Any earlier quantity edits are discarded.
    pub fn enter_review(&mut self) {
        self.plan_generated = true;
        self.regenerate_plan();
        self.macros = aggregate(&self.meal_plan, &self.meal_selection);
    }

    /// Set an item's portion. Returns false if the edit was rejected.
    pub fn set_quantity(&mut self, slot: MealSlot, index: usize, new_mass: u32) -> bool {
        let changed = set_quantity(&mut self.meal_plan, slot, index, new_mass);
        if changed {
            debug!(meal = slot.key(), index, new_mass, "quantity updated");
            self.propagate(Change::MealPlan);
        }
        changed
    }

    /// Move an item's portion by `steps` increments of [`MASS_STEP`].
    pub fn nudge_quantity(&mut self, slot: MealSlot, index: usize, steps: i32) -> bool {
        let Some(item) = self.meal_plan.meal(slot).get(index) else {
            return false;
        };
        let target = item.mass_units as i64 + steps as i64 * MASS_STEP as i64;
        match u32::try_from(target) {
            Ok(mass) => self.set_quantity(slot, index, mass),
            Err(_) => false,
        }
    }

    // ── Order ───────────────────────────────────────────────────────────

    pub fn order_inputs(&self) -> OrderInputs<'_> {
        OrderInputs {
            profile: &self.profile,
            energy: &self.energy,
            restrictions: &self.restrictions,
            meal_plan: &self.meal_plan,
            selection: &self.meal_selection,
            macros: &self.macros,
        }
    }

    /// Snapshot the session into an order and hand it to `store`.
    pub fn place_order(&self, store: &mut dyn OrderStore) -> Result<OrderRecord> {
        let record = assemble(self.order_inputs(), self.config.unit_price);
        store.save(&record)?;
        info!(
            order_id = %record.order_id,
            meals = self.meal_selection.count_selected(),
            price = record.total_price,
            "order placed"
        );
        Ok(record)
    }

    // ── Recompute ───────────────────────────────────────────────────────

    fn propagate(&mut self, change: Change) {
        if change.touches_bmr() {
            self.energy.bmr = compute_bmr(&self.profile);
        }

        if change.touches_tdee() {
            self.energy.tdee = match self.energy.activity {
                Some(activity) if self.energy.bmr > 0 => compute_tdee(self.energy.bmr, activity),
                _ => 0,
            };
        }

        if change.touches_goal_calories() {
            self.energy.goal_calories = match self.energy.goal {
                Some(goal) if self.energy.tdee > 0 => {
                    compute_goal_calories(self.energy.tdee, goal.calorie_adjustment())
                        .max(self.config.min_goal_calories)
                }
                _ => 0,
            };
            debug!(
                ?change,
                bmr = self.energy.bmr,
                tdee = self.energy.tdee,
                goal_calories = self.energy.goal_calories,
                "energy recomputed"
            );
        }

        if change.touches_meal_plan() && self.plan_generated {
            self.regenerate_plan();
        }

        if change.touches_macros() {
            self.macros = aggregate(&self.meal_plan, &self.meal_selection);
        }
    }

    fn regenerate_plan(&mut self) {
        let ceiling = self.meal_ceiling();
        let input = self.allocation_input();
        self.meal_plan = generate_meal_plan(&input, ceiling);
        debug!(
            ceiling,
            ingredients = input.len(),
            items = self.meal_plan.breakfast.len(),
            "meal plan generated"
        );
    }
}
