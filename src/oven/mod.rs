pub mod aggregate;
pub mod classify;
pub mod constants;
pub mod packer;
pub mod sides;

pub use aggregate::{aggregate_slices, tally_deals, tally_drinks};
pub use classify::{classify, BoxClass};
pub use constants::*;
pub use packer::pack_sides;
pub use sides::decompose_sides;

use crate::models::{Order, PizzaBox};

/// Turn a snapshot of paid orders into a box plan.
///
/// Aggregate slices per topping, split them into halves, then pack the halves.
/// Every order given is packed; the caller filters by payment. Identical
/// input always yields an identical plan.
pub fn pack_orders(orders: &[Order]) -> Vec<PizzaBox> {
    let totals = aggregate_slices(orders);
    let sides = decompose_sides(&totals);
    pack_sides(&sides)
}
