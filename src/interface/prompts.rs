use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{MealError, Result};
use crate::interface::render::{display_energy_summary, display_review};
use crate::models::{ActivityLevel, Allergy, Category, Gender, Goal, MealSlot, MedicalCondition};
use crate::planner::constants::MIN_MASS_UNITS;
use crate::state::PlannerSession;

fn prompt_number<T: std::str::FromStr>(prompt: &str, what: &str) -> Result<T> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    input
        .trim()
        .parse()
        .map_err(|_| MealError::InvalidInput(format!("Invalid {}", what)))
}

/// Ask until a positive number is entered.
fn prompt_positive(prompt: &str, what: &str) -> Result<f64> {
    loop {
        match prompt_number::<f64>(prompt, what) {
            Ok(value) if value > 0.0 => return Ok(value),
            Ok(_) => println!("Please enter a {} greater than 0.", what),
            Err(MealError::InvalidInput(msg)) => println!("{}", msg),
            Err(e) => return Err(e),
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Step 1: name, age, gender, height, weight.
pub fn prompt_profile(session: &mut PlannerSession) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Full name")
        .interact_text()?;

    let age = loop {
        match prompt_number::<u32>("Age (years)", "age") {
            Ok(age) if age > 0 => break age,
            Ok(_) => println!("Please enter an age greater than 0."),
            Err(MealError::InvalidInput(msg)) => println!("{}", msg),
            Err(e) => return Err(e),
        }
    };

    let genders: Vec<String> = Gender::ALL.iter().map(|g| g.to_string()).collect();
    let gender_idx = Select::new()
        .with_prompt("Gender")
        .items(&genders)
        .default(0)
        .interact()?;

    let height = prompt_positive("Height (cm)", "height")?;
    let weight = prompt_positive("Weight (kg)", "weight")?;

    session.update_profile(|p| {
        p.name = name.trim().to_string();
        p.age = age;
        p.gender = Some(Gender::ALL[gender_idx]);
        p.height_cm = height;
        p.weight_kg = weight;
    });

    let expected = session.expected_weight();
    if expected > 0 && (expected as f64 - weight).abs() >= 1.0 {
        let accept = prompt_yes_no(
            &format!(
                "Based on your height ({}cm), your ideal weight is around {}kg (BMI 22). Use it?",
                height, expected
            ),
            false,
        )?;
        if accept {
            session.accept_expected_weight();
        }
    }

    println!("Your BMR: {} calories/day", session.energy().bmr);
    Ok(())
}

/// Step 2: activity level, showing the resulting TDEE for each option.
pub fn prompt_activity(session: &mut PlannerSession) -> Result<()> {
    let bmr = session.energy().bmr;
    let options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| {
            format!(
                "{} - {} (x{} = {} cal/day)",
                level.title(),
                level.description(),
                level.multiplier(),
                crate::planner::compute_tdee(bmr, *level)
            )
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(0)
        .interact()?;

    session.set_activity(Some(ActivityLevel::ALL[selection]));
    println!("Your maintenance calories (TDEE): {}", session.energy().tdee);
    Ok(())
}

/// Step 3: goal.
pub fn prompt_goal(session: &mut PlannerSession) -> Result<()> {
    let options: Vec<String> = Goal::ALL
        .iter()
        .map(|goal| {
            let adj = goal.calorie_adjustment();
            let sign = if adj > 0 { "+" } else { "" };
            format!("{} - {} ({}{} cal)", goal.title(), goal.description(), sign, adj)
        })
        .collect();

    let selection = Select::new()
        .with_prompt("What is your goal?")
        .items(&options)
        .default(0)
        .interact()?;

    session.set_goal(Some(Goal::ALL[selection]));
    Ok(())
}

/// Step 4: medical conditions. Picking "None of the above" clears the rest.
pub fn prompt_conditions(session: &mut PlannerSession) -> Result<()> {
    let labels: Vec<&str> = MedicalCondition::ALL.iter().map(|c| c.label()).collect();
    let defaults: Vec<bool> = MedicalCondition::ALL
        .iter()
        .map(|c| session.restrictions().medical_conditions.contains(c))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Medical conditions (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    for condition in MedicalCondition::ALL {
        session.set_condition(condition, false);
    }
    for idx in chosen {
        session.set_condition(MedicalCondition::ALL[idx], true);
    }
    Ok(())
}

/// Step 5: allergies.
pub fn prompt_allergies(session: &mut PlannerSession) -> Result<()> {
    let labels: Vec<&str> = Allergy::ALL.iter().map(|a| a.label()).collect();
    let defaults: Vec<bool> = Allergy::ALL
        .iter()
        .map(|a| session.restrictions().allergies.contains(a))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Allergies (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    for (idx, allergy) in Allergy::ALL.into_iter().enumerate() {
        session.set_allergy(allergy, chosen.contains(&idx));
    }

    if session.restrictions().allergies.is_empty() {
        println!("No allergies selected - you have access to the full menu.");
    }
    Ok(())
}

/// Step 6: ingredient choices. Repeats until at least one carb and one
/// protein are picked.
pub fn prompt_ingredients(session: &mut PlannerSession) -> Result<()> {
    display_energy_summary(session);

    loop {
        for category in Category::ALL {
            let available = session.available_ingredients(category);
            let labels: Vec<String> = available
                .iter()
                .map(|i| format!("{} ({} cal/100g)", i.display_name, i.calories_per_100))
                .collect();
            let defaults: Vec<bool> = available
                .iter()
                .map(|i| session.selection().contains(category, i.key))
                .collect();

            let chosen = MultiSelect::new()
                .with_prompt(format!("Choose {}", category.label()))
                .items(&labels)
                .defaults(&defaults)
                .interact()?;

            for (idx, ingredient) in available.iter().enumerate() {
                session.select_ingredient(ingredient.key, chosen.contains(&idx))?;
            }
        }

        if session.selection().is_ready_for_review() {
            return Ok(());
        }
        println!("Please choose at least one carb and one protein.");
    }
}

fn prompt_slot(prompt: &str) -> Result<MealSlot> {
    let labels: Vec<String> = MealSlot::ALL.iter().map(|s| s.to_string()).collect();
    let idx = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MealSlot::ALL[idx])
}

fn prompt_quantity_edit(session: &mut PlannerSession) -> Result<()> {
    let slot = prompt_slot("Which meal?")?;
    let items = session.meal_plan().meal(slot);
    if items.is_empty() {
        println!("{} has no items.", slot);
        return Ok(());
    }

    let labels: Vec<String> = items
        .iter()
        .map(|i| format!("{} ({}g)", i.display_name, i.mass_units))
        .collect();
    let index = Select::new()
        .with_prompt("Which item?")
        .items(&labels)
        .default(0)
        .interact()?;

    let actions = ["+10g", "-10g", "Enter grams"];
    let action = Select::new()
        .with_prompt("Adjust")
        .items(&actions)
        .default(0)
        .interact()?;

    let changed = match action {
        0 => session.nudge_quantity(slot, index, 1),
        1 => session.nudge_quantity(slot, index, -1),
        _ => match prompt_number::<u32>("Grams", "quantity") {
            Ok(mass) => session.set_quantity(slot, index, mass),
            Err(MealError::InvalidInput(msg)) => {
                println!("{}", msg);
                false
            }
            Err(e) => return Err(e),
        },
    };

    if !changed {
        println!("Quantity unchanged (minimum is {}g).", MIN_MASS_UNITS);
    }
    Ok(())
}

/// What the user decided on the review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    PlaceOrder,
    Cancel,
}

/// Step 7: meal review. Toggle meals, edit quantities, go back to the
/// ingredient step, or place the order.
pub fn review_meals(session: &mut PlannerSession) -> Result<ReviewOutcome> {
    session.enter_review();

    loop {
        display_review(session);

        let mut options: Vec<String> = MealSlot::ALL
            .iter()
            .map(|slot| {
                let verb = if session.meal_selection().is_selected(*slot) {
                    "Remove"
                } else {
                    "Add"
                };
                format!("{} {}", verb, slot)
            })
            .collect();
        options.push("Adjust a quantity".to_string());
        options.push("Change ingredients".to_string());
        options.push("Place order".to_string());
        options.push("Cancel".to_string());

        let choice = Select::new()
            .with_prompt("Review your meals")
            .items(&options)
            .default(options.len() - 2)
            .interact()?;

        match choice {
            0..=2 => {
                let slot = MealSlot::ALL[choice];
                let selected = session.meal_selection().is_selected(slot);
                session.set_meal_selected(slot, !selected);
            }
            3 => prompt_quantity_edit(session)?,
            4 => {
                prompt_ingredients(session)?;
                session.enter_review();
            }
            5 => {
                if session.meal_selection().count_selected() == 0 {
                    println!("Select at least one meal to order.");
                    continue;
                }
                return Ok(ReviewOutcome::PlaceOrder);
            }
            _ => return Ok(ReviewOutcome::Cancel),
        }
    }
}

/// Run the whole wizard from the first step to the review screen.
pub fn run_wizard(session: &mut PlannerSession) -> Result<ReviewOutcome> {
    prompt_profile(session)?;
    prompt_activity(session)?;
    prompt_goal(session)?;
    prompt_conditions(session)?;
    prompt_allergies(session)?;
    prompt_ingredients(session)?;
    review_meals(session)
}
