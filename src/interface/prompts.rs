use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{OvenError, Result};
use crate::models::{check_count, Order};
use crate::oven::constants::{
    DEFAULT_DRINK_COUNT, DEFAULT_SLICE_COUNT, FORM_DEFAULT_DRINK, FORM_DEFAULT_TOPPING,
    FUZZY_MATCH_THRESHOLD, MAX_DRINK_COUNT, MAX_SLICE_COUNT,
};

/// Player names similar to `input`, best match first.
pub fn suggest_players<'a>(names: &[&'a str], input: &str) -> Vec<(&'a str, f64)> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&str, f64)> = names
        .iter()
        .map(|name| (*name, jaro_winkler(&name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Resolve a typed player name against the event roster.
///
/// Exact (case-insensitive) matches win outright. Otherwise the closest
/// names are offered for confirmation. Returns `None` if the user declines.
pub fn resolve_player(names: &[&str], input: &str) -> Result<Option<String>> {
    let input = input.trim();

    let exact_match = names
        .iter()
        .find(|name| name.to_lowercase() == input.to_lowercase());
    if let Some(name) = exact_match {
        return Ok(Some(name.to_string()));
    }

    let candidates = suggest_players(names, input);

    if candidates.is_empty() {
        println!("No matching player found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let name = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;

        return Ok(confirm.then(|| name.to_string()));
    }

    // Multiple matches - let user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(name, _)| name.to_string())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which player did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    Ok(options.get(selection).cloned())
}

/// Parse a typed count, rejecting anything above `max`.
pub fn parse_count(what: &str, input: &str, max: u32) -> Result<u32> {
    let value = input
        .trim()
        .parse()
        .map_err(|_| OvenError::InvalidInput(format!("'{}' is not a whole number", input)))?;
    check_count(what, value, max)
}

fn prompt_count(prompt: &str, default: u32, max: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    parse_count(&prompt.to_lowercase(), &input, max)
}

/// Values preselected in the order form: (topping, slices, drink, drinks).
pub fn form_defaults(existing: Option<&Order>) -> (&str, u32, &str, u32) {
    match existing {
        Some(o) => (
            o.topping.as_str(),
            o.slice_count,
            o.drink.as_str(),
            o.drink_count,
        ),
        None => (
            FORM_DEFAULT_TOPPING,
            DEFAULT_SLICE_COUNT,
            FORM_DEFAULT_DRINK,
            DEFAULT_DRINK_COUNT,
        ),
    }
}

/// Pick from the menu, or type freely when the menu list is empty.
fn prompt_choice(prompt: &str, options: &[&str], current: &str) -> Result<String> {
    if options.is_empty() {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(current.to_string())
            .interact_text()?;
        return Ok(input.trim().to_string());
    }

    let default = options.iter().position(|o| *o == current).unwrap_or(0);
    let selection = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;

    Ok(options[selection].to_string())
}

/// Interactive order form. Editing keeps the existing paid/collected flags.
pub fn prompt_order_form(
    slug: &str,
    toppings: &[&str],
    drinks: &[&str],
    existing: Option<&Order>,
) -> Result<Order> {
    let mut player = Input::<String>::new().with_prompt("Player name");
    if let Some(order) = existing {
        player = player.default(order.player_name.clone());
    }
    let player_name = player.interact_text()?.trim().to_string();
    if player_name.is_empty() {
        return Err(OvenError::InvalidInput("player name is empty".to_string()));
    }

    let (topping, slices, drink, drinks_default) = form_defaults(existing);

    let topping = prompt_choice("Topping", toppings, topping)?;
    let slice_count = prompt_count("Slices", slices, MAX_SLICE_COUNT)?;
    let drink = prompt_choice("Drink", drinks, drink)?;
    let drink_count = prompt_count("Drinks", drinks_default, MAX_DRINK_COUNT)?;

    let mut order = Order::new(slug, player_name, topping, drink, slice_count, drink_count);
    if let Some(prev) = existing {
        order.is_paid = prev.is_paid;
        order.is_collected = prev.is_collected;
    }
    Ok(order)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
