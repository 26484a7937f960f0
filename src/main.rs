use clap::Parser;

use pizza_oven_rs::cli::{Cli, Command, MenuAction};
use pizza_oven_rs::error::{OvenError, Result};
use pizza_oven_rs::interface::{
    display_door, display_handoffs, display_menu, display_oven_plan, display_tally,
    plan_json, prompt_order_form, prompt_yes_no, resolve_player,
};
use pizza_oven_rs::logging;
use pizza_oven_rs::models::MenuCategory;
use pizza_oven_rs::oven::{pack_orders, tally_deals, tally_drinks};
use pizza_oven_rs::state::{
    import_orders_csv, load_preferences, load_state, save_preferences, save_state, OrderBook,
};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Shared per-invocation context: where state lives and which event is active.
struct Desk {
    file: String,
    event: String,
    book: OrderBook,
}

impl Desk {
    fn open(cli: &Cli) -> Result<Self> {
        let event = match &cli.event {
            Some(slug) => slug.trim().to_string(),
            None => load_preferences(&cli.prefs)?.current_event,
        };
        if event.is_empty() {
            return Err(OvenError::NoActiveEvent);
        }

        let book = OrderBook::new(load_state(&cli.file)?);
        Ok(Self {
            file: cli.file.clone(),
            event,
            book,
        })
    }

    fn save(&self) -> Result<()> {
        save_state(&self.file, &self.book.to_state())
    }

    /// Map typed input to a roster name, offering fuzzy suggestions.
    fn resolve(&self, input: &str) -> Result<Option<String>> {
        resolve_player(&self.book.player_names(&self.event), input)
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::default()) {
        Command::Door { search } => cmd_door(&cli, search.as_deref()),
        Command::Pay { player } => cmd_pay(&cli, player),
        Command::Serve { player } => cmd_serve(&cli, player.as_deref()),
        Command::Add { player } => cmd_add(&cli, player.as_deref()),
        Command::Remove { player } => cmd_remove(&cli, player),
        Command::Oven { json } => cmd_oven(&cli, *json),
        Command::Tally => cmd_tally(&cli),
        Command::Import { csv } => cmd_import(&cli, csv),
        Command::Menu { action } => {
            cmd_menu(&cli, action.as_ref().unwrap_or(&MenuAction::List))
        }
        Command::Event { slug } => cmd_event(&cli, slug.as_deref()),
    }
}

/// Show the roster for the current event.
fn cmd_door(cli: &Cli, search: Option<&str>) -> Result<()> {
    let desk = Desk::open(cli)?;
    let orders = desk.book.search(&desk.event, search.unwrap_or(""));
    display_door(&orders, &desk.event);
    Ok(())
}

/// Toggle payment for a player.
fn cmd_pay(cli: &Cli, input: &str) -> Result<()> {
    let mut desk = Desk::open(cli)?;
    let Some(player) = desk.resolve(input)? else {
        return Ok(());
    };

    let paid = desk.book.toggle_paid(&desk.event, &player)?;
    desk.save()?;
    println!("{}: {}", player, if paid { "PAID" } else { "CASH" });
    Ok(())
}

/// Toggle hand-off for a player, or list pending hand-offs.
fn cmd_serve(cli: &Cli, input: Option<&str>) -> Result<()> {
    let mut desk = Desk::open(cli)?;

    let Some(input) = input else {
        display_handoffs(&desk.book.pending_handoffs(&desk.event));
        return Ok(());
    };

    let Some(player) = desk.resolve(input)? else {
        return Ok(());
    };

    if let Some(order) = desk.book.get(&desk.event, &player) {
        if !order.is_paid {
            println!("{} has not paid yet.", player);
            return Ok(());
        }
    }

    let collected = desk.book.toggle_collected(&desk.event, &player)?;
    desk.save()?;
    println!("{}: {}", player, if collected { "DONE" } else { "WAITING" });
    Ok(())
}

/// Add a new order, or edit an existing player's order.
fn cmd_add(cli: &Cli, input: Option<&str>) -> Result<()> {
    let mut desk = Desk::open(cli)?;

    let editing = match input {
        Some(input) => match desk.resolve(input)? {
            Some(player) => Some(player),
            None => return Ok(()),
        },
        None => None,
    };

    let order = {
        let existing = editing
            .as_deref()
            .and_then(|player| desk.book.get(&desk.event, player));
        let toppings = desk.book.toppings();
        let drinks = desk.book.drinks();
        prompt_order_form(&desk.event, &toppings, &drinks, existing)?
    };

    let player = order.player_name.clone();
    if let Some(previous) = editing.filter(|p| *p != player) {
        // Renamed while editing: drop the old record.
        desk.book.remove(&desk.event, &previous)?;
    }

    let inserted = desk.book.upsert(order)?;
    desk.save()?;
    println!(
        "{} order for {}.",
        if inserted { "Added" } else { "Updated" },
        player
    );
    Ok(())
}

/// Remove a player's order after confirmation.
fn cmd_remove(cli: &Cli, input: &str) -> Result<()> {
    let mut desk = Desk::open(cli)?;
    let Some(player) = desk.resolve(input)? else {
        return Ok(());
    };

    let confirm = prompt_yes_no(
        &format!("Remove {} from the list? This cannot be undone.", player),
        false,
    )?;
    if !confirm {
        return Ok(());
    }

    desk.book.remove(&desk.event, &player)?;
    desk.save()?;
    println!("Removed {}.", player);
    Ok(())
}

/// Print the kitchen call list for all paid orders.
fn cmd_oven(cli: &Cli, json: bool) -> Result<()> {
    let desk = Desk::open(cli)?;
    let paid = desk.book.paid_orders(&desk.event);
    let boxes = pack_orders(&paid);

    if json {
        println!("{}", plan_json(&boxes)?);
        return Ok(());
    }

    display_oven_plan(&boxes);
    display_tally("Drink Inventory", &tally_drinks(&paid));
    Ok(())
}

/// Show drink and pizza deal tallies for paid orders.
fn cmd_tally(cli: &Cli) -> Result<()> {
    let desk = Desk::open(cli)?;
    let paid = desk.book.paid_orders(&desk.event);
    let (total, paid_count) = desk.book.counts(&desk.event);

    println!("{} of {} orders paid", paid_count, total);
    display_tally("Drink Inventory", &tally_drinks(&paid));
    display_tally("Pizza Deals", &tally_deals(&paid));
    Ok(())
}

/// Import a start.gg CSV export.
fn cmd_import(cli: &Cli, csv_path: &str) -> Result<()> {
    let mut desk = Desk::open(cli)?;

    let summary = import_orders_csv(&mut desk.book, csv_path, &desk.event)?;
    desk.save()?;

    println!(
        "Imported {} players into {} ({} new, {} updated, {} rows skipped)",
        summary.total(),
        desk.event,
        summary.inserted,
        summary.updated,
        summary.skipped
    );
    Ok(())
}

/// List, add, or remove menu items.
fn cmd_menu(cli: &Cli, action: &MenuAction) -> Result<()> {
    let mut desk = Desk::open(cli)?;

    match action {
        MenuAction::List => {}
        MenuAction::Add { category, label } => {
            desk.book.add_menu_item(*category, label)?;
            desk.save()?;
            println!("Added {} '{}'.", category, label.trim());
        }
        MenuAction::Remove { category, label } => {
            let removed = desk.book.remove_menu_item(*category, label)?;
            desk.save()?;
            println!("Removed {} '{}'.", category, removed.label);
        }
    }

    display_menu(MenuCategory::Topping, &desk.book.toppings());
    display_menu(MenuCategory::Drink, &desk.book.drinks());
    Ok(())
}

/// Show or switch the active event.
fn cmd_event(cli: &Cli, slug: Option<&str>) -> Result<()> {
    let mut prefs = load_preferences(&cli.prefs)?;

    if let Some(slug) = slug {
        if !prefs.select_event(slug) {
            return Err(OvenError::InvalidInput("event slug is empty".to_string()));
        }
        save_preferences(&cli.prefs, &prefs)?;
    }

    println!("Current event: {}", prefs.current_event);
    if !prefs.recent_events.is_empty() {
        println!("Recent: {}", prefs.recent_events.join(", "));
    }
    Ok(())
}
