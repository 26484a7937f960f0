use std::collections::HashMap;

use crate::models::Order;
use crate::oven::constants::SLICES_PER_DEAL;

/// Fold `value` per `key` with `add`, keeping keys in order of first appearance.
fn sum_by_key<'a, T, K, V, A>(orders: &'a [Order], key: K, value: V, add: A) -> Vec<(String, T)>
where
    T: Copy,
    K: Fn(&'a Order) -> &'a str,
    V: Fn(&Order) -> T,
    A: Fn(T, T) -> T,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(String, T)> = Vec::new();

    for order in orders {
        let k = key(order);
        match index.get(k) {
            Some(&i) => totals[i].1 = add(totals[i].1, value(order)),
            None => {
                index.insert(k, totals.len());
                totals.push((k.to_string(), value(order)));
            }
        }
    }

    totals
}

/// Total slice units per topping, in order of first appearance.
///
/// Every order passed in is counted; filter to paid orders first. Totals
/// saturate at `u32::MAX`; order counts are capped where orders enter the
/// book, so that bound is never reached in practice.
pub fn aggregate_slices(orders: &[Order]) -> Vec<(String, u32)> {
    sum_by_key(
        orders,
        |o| o.topping.as_str(),
        |o| o.slice_count,
        u32::saturating_add,
    )
}

/// Drinks to hand out per drink label, in order of first appearance.
pub fn tally_drinks(orders: &[Order]) -> Vec<(String, u32)> {
    sum_by_key(
        orders,
        |o| o.drink.as_str(),
        |o| o.drink_count,
        u32::saturating_add,
    )
}

/// Pizza deals per topping (one deal = two slices), in order of first appearance.
pub fn tally_deals(orders: &[Order]) -> Vec<(String, f64)> {
    sum_by_key(
        orders,
        |o| o.topping.as_str(),
        |o| o.slice_count as f64 / SLICES_PER_DEAL,
        |a: f64, b: f64| a + b,
    )
}
