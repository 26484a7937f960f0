use tracing::debug;

use crate::models::{PizzaBox, Side};
use crate::oven::constants::SIDES_PER_BOX;

/// Pack box halves into boxes.
///
/// Two greedy phases over the immutable `sides` slice:
///
/// 1. For each topping in order of first appearance, its sides are paired
///    two at a time (earliest first) until fewer than two remain.
/// 2. Everything left is paired in original order regardless of topping.
///    With an odd side count the final box has no second half.
///
/// Every side lands in exactly one box, so the box count is always
/// `ceil(sides.len() / 2)`. Pairing never depends on sides of one topping
/// being adjacent.
pub fn pack_sides(sides: &[Side]) -> Vec<PizzaBox> {
    let mut consumed = vec![false; sides.len()];
    let mut boxes = Vec::with_capacity(sides.len().div_ceil(SIDES_PER_BOX));

    // Phase 1: same-topping pairs.
    for queue in topping_queues(sides) {
        for pair in queue.chunks_exact(SIDES_PER_BOX) {
            let (a, b) = (pair[0], pair[1]);
            consumed[a] = true;
            consumed[b] = true;
            boxes.push(PizzaBox::pair(sides[a].clone(), sides[b].clone()));
        }
    }
    let same_topping = boxes.len();

    // Phase 2: leftovers in original order.
    let leftovers: Vec<&Side> = sides
        .iter()
        .zip(&consumed)
        .filter(|(_, used)| !**used)
        .map(|(side, _)| side)
        .collect();

    let pairs = leftovers.chunks_exact(SIDES_PER_BOX);
    let odd_one = pairs.remainder().first();
    for pair in pairs {
        boxes.push(PizzaBox::pair(pair[0].clone(), pair[1].clone()));
    }
    if let Some(side) = odd_one {
        boxes.push(PizzaBox::single((*side).clone()));
    }

    debug!(
        sides = sides.len(),
        boxes = boxes.len(),
        same_topping,
        cross_topping = boxes.len() - same_topping,
        "packed sides into boxes"
    );

    boxes
}

/// Side indices grouped per topping, toppings in order of first appearance.
fn topping_queues(sides: &[Side]) -> Vec<Vec<usize>> {
    let mut toppings: Vec<&str> = Vec::new();
    let mut queues: Vec<Vec<usize>> = Vec::new();

    for (i, side) in sides.iter().enumerate() {
        match toppings.iter().position(|t| *t == side.topping) {
            Some(q) => queues[q].push(i),
            None => {
                toppings.push(&side.topping);
                queues.push(vec![i]);
            }
        }
    }

    queues
}
