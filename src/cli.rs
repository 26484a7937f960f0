use clap::{Parser, Subcommand};

use crate::models::MenuCategory;

/// Oven — tournament pizza desk: check-in, payments, and kitchen box packing.
#[derive(Parser, Debug)]
#[command(name = "oven")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the order state JSON file.
    #[arg(short, long, global = true, default_value = "pizza_state.json")]
    pub file: String,

    /// Path to the local preferences JSON file.
    #[arg(long, global = true, default_value = "pizza_prefs.json")]
    pub prefs: String,

    /// Event slug to use instead of the remembered one.
    #[arg(short, long, global = true)]
    pub event: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the door roster with payment status.
    Door {
        /// Only show players whose name contains this text.
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Toggle a player's paid status.
    Pay { player: String },

    /// Toggle a player's hand-off, or list who is still waiting.
    Serve { player: Option<String> },

    /// Add an order interactively, or edit an existing player's order.
    Add { player: Option<String> },

    /// Remove a player's order.
    Remove { player: String },

    /// Print the kitchen call list (boxes to order).
    Oven {
        /// Print the box plan as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show drink inventory and pizza deal counts.
    Tally,

    /// Import a start.gg registration CSV into the current event.
    Import { csv: String },

    /// Manage the topping and drink menu.
    Menu {
        #[command(subcommand)]
        action: Option<MenuAction>,
    },

    /// Show or switch the current event.
    Event { slug: Option<String> },
}

#[derive(Subcommand, Debug)]
pub enum MenuAction {
    /// List toppings and drinks.
    List,

    /// Add a menu item.
    Add {
        category: MenuCategory,
        label: String,
    },

    /// Remove a menu item.
    Remove {
        category: MenuCategory,
        label: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Door { search: None }
    }
}
