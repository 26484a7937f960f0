mod menu;
mod order;
mod packing;

pub use menu::{MenuCategory, MenuItem};
pub use order::{check_count, display_name, Order};
pub use packing::{PizzaBox, Side, SideKind};
