pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod oven;
pub mod state;

pub use error::{OvenError, Result};
pub use models::{MenuCategory, MenuItem, Order, PizzaBox, Side, SideKind};
pub use oven::{pack_orders, BoxClass};
