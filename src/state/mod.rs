mod import;
mod manager;
mod persistence;
mod preferences;

pub use import::{import_orders_csv, parse_registrations, ImportSummary};
pub use manager::OrderBook;
pub use persistence::{load_state, save_state, PizzaState};
pub use preferences::{load_preferences, save_preferences, Preferences};
