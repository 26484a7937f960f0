use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pizza_oven_rs::models::{Order, PizzaBox, Side, SideKind};
use pizza_oven_rs::oven::{
    aggregate_slices, decompose_sides, pack_orders, BoxClass, SLICES_PER_SIDE,
};

fn paid(player: &str, topping: &str, slices: u32) -> Order {
    let mut order = Order::new("test-event", player, topping, "Coke", slices, 1);
    order.is_paid = true;
    order
}

fn repeat(topping: &str, slices: u32, n: usize) -> Vec<Order> {
    (0..n)
        .map(|i| paid(&format!("{}-{}", topping, i), topping, slices))
        .collect()
}

const TOPPINGS: [&str; 5] = ["Pepperoni", "Mushroom", "Cheese", "Ham", "Olive"];

fn random_orders(rng: &mut StdRng) -> Vec<Order> {
    let n = rng.gen_range(0..40);
    (0..n)
        .map(|i| {
            let topping = TOPPINGS[rng.gen_range(0..TOPPINGS.len())];
            paid(&format!("p{}", i), topping, rng.gen_range(0..=7))
        })
        .collect()
}

#[test]
fn test_scenario_a_single_partial() {
    let boxes = pack_orders(&[paid("a", "Pepperoni", 2)]);
    assert_eq!(boxes, vec![PizzaBox::single(Side::partial("Pepperoni", 2))]);
    assert_eq!(boxes[0].classify(), BoxClass::HalfEmpty);
    assert!(boxes[0].side_a.is_incomplete());
}

#[test]
fn test_scenario_b_single_full_side() {
    let boxes = pack_orders(&repeat("Pepperoni", 2, 2));
    assert_eq!(boxes, vec![PizzaBox::single(Side::full("Pepperoni"))]);
}

#[test]
fn test_scenario_c_three_quarter() {
    let boxes = pack_orders(&repeat("Pepperoni", 2, 3));
    assert_eq!(
        boxes,
        vec![PizzaBox::pair(
            Side::full("Pepperoni"),
            Side::partial("Pepperoni", 2)
        )]
    );
    assert!(boxes[0].is_three_quarter());
    assert!(!boxes[0].is_full_box());
    assert_eq!(
        boxes[0].classify(),
        BoxClass::ThreeQuarter("Pepperoni".to_string())
    );
}

#[test]
fn test_scenario_d_mixed() {
    let boxes = pack_orders(&[paid("a", "Pepperoni", 2), paid("b", "Mushroom", 2)]);
    assert_eq!(
        boxes,
        vec![PizzaBox::pair(
            Side::partial("Pepperoni", 2),
            Side::partial("Mushroom", 2)
        )]
    );
    assert_eq!(boxes[0].classify(), BoxClass::Mixed);
}

#[test]
fn test_scenario_e_whole() {
    let boxes = pack_orders(&repeat("Pepperoni", 2, 4));
    assert_eq!(boxes.len(), 1);
    assert!(boxes[0].is_full_box());
    assert_eq!(boxes[0].classify(), BoxClass::Whole("Pepperoni".to_string()));
}

#[test]
fn test_empty_and_zero_slice_orders() {
    assert!(pack_orders(&[]).is_empty());
    assert!(pack_orders(&[paid("a", "Cheese", 0)]).is_empty());
}

#[test]
fn test_interleaved_toppings_pair_same_first() {
    let orders = vec![
        paid("a", "Ham", 4),
        paid("b", "Olive", 2),
        paid("c", "Ham", 2),
        paid("d", "Corn", 2),
    ];
    let boxes = pack_orders(&orders);
    assert_eq!(boxes.len(), 2);
    assert!(boxes[0].is_three_quarter());
    assert_eq!(boxes[0].shared_topping(), Some("Ham"));
    assert_eq!(
        boxes[1],
        PizzaBox::pair(Side::partial("Olive", 2), Side::partial("Corn", 2))
    );
}

#[test]
fn test_random_orders_conserve_slices_and_box_count() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let orders = random_orders(&mut rng);
        let boxes = pack_orders(&orders);

        let ordered: u32 = orders.iter().map(|o| o.slice_count).sum();
        let packed: u32 = boxes.iter().map(|b| b.slices()).sum();
        assert_eq!(ordered, packed);

        let side_count: u32 = aggregate_slices(&orders)
            .iter()
            .map(|(_, total)| total.div_ceil(SLICES_PER_SIDE))
            .sum();
        assert_eq!(boxes.len(), side_count.div_ceil(2) as usize);

        let open: Vec<usize> = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.side_b.is_none())
            .map(|(i, _)| i)
            .collect();
        assert!(open.len() <= 1);
        if let Some(&i) = open.first() {
            assert_eq!(i, boxes.len() - 1);
        }
    }
}

#[test]
fn test_random_orders_every_side_packed_once() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let orders = random_orders(&mut rng);
        let sides = decompose_sides(&aggregate_slices(&orders));
        let boxes = pack_orders(&orders);

        let mut expected: HashMap<(String, SideKind, u32), usize> = HashMap::new();
        for side in &sides {
            *expected
                .entry((side.topping.clone(), side.kind, side.slices))
                .or_default() += 1;
        }
        let mut actual: HashMap<(String, SideKind, u32), usize> = HashMap::new();
        for side in boxes.iter().flat_map(|b| b.sides()) {
            *actual
                .entry((side.topping.clone(), side.kind, side.slices))
                .or_default() += 1;
        }
        assert_eq!(expected, actual);
    }
}

#[test]
fn test_random_orders_even_side_toppings_never_mixed() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..200 {
        let orders = random_orders(&mut rng);
        let sides = decompose_sides(&aggregate_slices(&orders));
        let boxes = pack_orders(&orders);

        for topping in TOPPINGS {
            let count = sides.iter().filter(|s| s.topping == topping).count();
            if count == 0 || count % 2 == 1 {
                continue;
            }
            for b in boxes.iter().filter(|b| b.sides().any(|s| s.topping == topping)) {
                assert_eq!(b.shared_topping(), Some(topping));
            }
        }

        // At most one partial half per topping, and partials carry 1..=3 slices.
        for topping in TOPPINGS {
            let partials: Vec<&Side> = sides
                .iter()
                .filter(|s| s.topping == topping && s.kind == SideKind::Partial)
                .collect();
            assert!(partials.len() <= 1);
            assert!(partials.iter().all(|s| (1..SLICES_PER_SIDE).contains(&s.slices)));
        }
    }
}

#[test]
fn test_packing_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(99);
    let orders = random_orders(&mut rng);
    assert_eq!(pack_orders(&orders), pack_orders(&orders));
}
