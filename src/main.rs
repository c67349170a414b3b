use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use meal_wizard_rs::cli::{Cli, Command};
use meal_wizard_rs::config::PlannerConfig;
use meal_wizard_rs::error::{MealError, Result};
use meal_wizard_rs::interface::{
    display_energy_summary, display_ingredient_list, display_order, display_review,
    prompt_yes_no, run_wizard, write_order_csv, ReviewOutcome,
};
use meal_wizard_rs::models::{
    ActivityLevel, Allergy, Category, Gender, Goal, MealSlot, MedicalCondition, OrderRecord,
    Restrictions,
};
use meal_wizard_rs::planner::{filter_by_restrictions, ingredients_in, search_ingredients};
use meal_wizard_rs::state::{JsonFileOrderStore, OrderStore, PlannerSession};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };
    debug!(?config, store = %cli.store, "starting");

    let mut store = JsonFileOrderStore::new(&cli.store);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(config, &mut store),
        Command::Quote {
            name,
            age,
            gender,
            height,
            weight,
            activity,
            goal,
            conditions,
            allergies,
            ingredients,
            meals,
            place,
        } => {
            let mut session = PlannerSession::new(config);
            let gender: Gender = gender.parse()?;
            session.update_profile(|p| {
                p.name = name;
                p.age = age;
                p.gender = Some(gender);
                p.height_cm = height;
                p.weight_kg = weight;
            });
            session.set_activity(Some(activity.parse::<ActivityLevel>()?));
            session.set_goal(Some(goal.parse::<Goal>()?));
            for condition in &conditions {
                session.set_condition(condition.parse::<MedicalCondition>()?, true);
            }
            for allergy in &allergies {
                session.set_allergy(allergy.parse::<Allergy>()?, true);
            }
            cmd_quote(session, &ingredients, &meals, place, &mut store)
        }
        Command::Show { order_id } => cmd_show(&store, order_id.as_deref()),
        Command::Catalog { allergies, search } => cmd_catalog(&allergies, search.as_deref()),
        Command::Export { order_id, out } => cmd_export(&store, order_id.as_deref(), &out),
    }
}

/// Run the interactive wizard and optionally place the order.
fn cmd_plan(config: PlannerConfig, store: &mut dyn OrderStore) -> Result<()> {
    let mut session = PlannerSession::new(config);

    match run_wizard(&mut session)? {
        ReviewOutcome::PlaceOrder => {
            let record = session.place_order(store)?;
            display_order(&record);
        }
        ReviewOutcome::Cancel => println!("Order cancelled."),
    }

    Ok(())
}

/// Build a plan from command-line inputs.
fn cmd_quote(
    mut session: PlannerSession,
    ingredients: &[String],
    meals: &str,
    place: bool,
    store: &mut dyn OrderStore,
) -> Result<()> {
    for query in ingredients {
        let ingredient = search_ingredients(query)
            .into_iter()
            .next()
            .ok_or_else(|| MealError::UnknownIngredient(query.clone()))?;
        if ingredient.key != query.trim().to_lowercase() {
            println!("Matched '{}' to {}", query, ingredient.display_name);
        }
        session.select_ingredient(ingredient.key, true)?;
    }

    if !session.selection().is_ready_for_review() {
        println!("Note: a plan usually needs at least one carb and one protein.");
    }

    for slot in MealSlot::ALL {
        session.set_meal_selected(slot, false);
    }
    for part in meals.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let slot = MealSlot::ALL
            .into_iter()
            .find(|s| s.key() == part.to_lowercase())
            .ok_or_else(|| MealError::InvalidInput(format!("unknown meal '{}'", part)))?;
        session.set_meal_selected(slot, true);
    }

    session.enter_review();
    display_energy_summary(&session);
    display_review(&session);

    if place {
        let record = session.place_order(store)?;
        display_order(&record);
    }

    Ok(())
}

fn find_order(store: &dyn OrderStore, order_id: Option<&str>) -> Result<OrderRecord> {
    let found = match order_id {
        Some(id) => store.load(id)?,
        None => store.latest()?,
    };
    found.ok_or_else(|| MealError::OrderNotFound(order_id.unwrap_or("latest").to_string()))
}

/// Show a stored order.
fn cmd_show(store: &dyn OrderStore, order_id: Option<&str>) -> Result<()> {
    let record = find_order(store, order_id)?;
    display_order(&record);
    Ok(())
}

/// List the catalog, optionally filtered by allergies or a search term.
fn cmd_catalog(allergies: &[String], search: Option<&str>) -> Result<()> {
    let mut restrictions = Restrictions::default();
    for allergy in allergies {
        restrictions.set_allergy(allergy.parse()?, true);
    }

    if let Some(query) = search {
        let hits = search_ingredients(query);
        let hits = filter_by_restrictions(&hits, &restrictions);
        display_ingredient_list(&hits, &format!("Matches for '{}'", query));
        return Ok(());
    }

    for category in Category::ALL {
        let items = filter_by_restrictions(&ingredients_in(category), &restrictions);
        display_ingredient_list(&items, category.label());
    }

    Ok(())
}

/// Export a stored order to CSV.
fn cmd_export(store: &dyn OrderStore, order_id: Option<&str>, out: &str) -> Result<()> {
    let record = find_order(store, order_id)?;
    let path = std::path::Path::new(out);

    if path.exists() && !prompt_yes_no(&format!("{} exists. Overwrite?", out), false)? {
        return Ok(());
    }

    write_order_csv(&record, path)?;
    println!("Exported order {} to {}", record.order_id, out);
    Ok(())
}
