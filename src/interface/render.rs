use crate::error::Result;
use crate::models::{MenuCategory, Order, PizzaBox, Side};
use crate::oven::BoxClass;

fn format_side(label: &str, side: Option<&Side>) -> String {
    match side {
        Some(side) if side.is_incomplete() => format!(
            "{} (50%): {}  [{} EMPTY SLICES]",
            label,
            side.topping,
            side.empty_slices()
        ),
        Some(side) => format!("{} (50%): {}", label, side.topping),
        None => format!("{}: EMPTY", label),
    }
}

/// Render one box of the call list.
pub fn format_box(number: usize, pizza_box: &PizzaBox) -> String {
    let header = match pizza_box.classify() {
        BoxClass::Mixed => format!("Box #{}", number),
        class => format!("Box #{}  {}", number, class),
    };

    format!(
        "{}\n    {}\n    {}",
        header,
        format_side("Side A", Some(&pizza_box.side_a)),
        format_side("Side B", pizza_box.side_b.as_ref())
    )
}

/// Display the shop call list.
pub fn display_oven_plan(boxes: &[PizzaBox]) {
    println!();
    println!("=== Shop Call List ===");
    println!();

    if boxes.is_empty() {
        println!("No paid orders yet.");
        println!();
        return;
    }

    for (i, pizza_box) in boxes.iter().enumerate() {
        println!("{}", format_box(i + 1, pizza_box));
    }

    let whole = boxes.iter().filter(|b| b.is_full_box()).count();
    println!();
    println!("--- Summary ---");
    println!("Boxes: {}", boxes.len());
    println!("Whole pizzas: {}", whole);
    println!(
        "Slices: {}",
        boxes.iter().map(PizzaBox::slices).sum::<u32>()
    );
    println!();
}

/// The box plan as pretty JSON, one entry per box with its classification.
pub fn plan_json(boxes: &[PizzaBox]) -> Result<String> {
    let json = serde_json::json!({
        "boxes": boxes.iter().enumerate().map(|(i, b)| {
            serde_json::json!({
                "number": i + 1,
                "label": b.classify(),
                "side_a": b.side_a,
                "side_b": b.side_b,
            })
        }).collect::<Vec<_>>(),
        "total_boxes": boxes.len(),
        "total_slices": boxes.iter().map(PizzaBox::slices).sum::<u32>(),
    });

    Ok(serde_json::to_string_pretty(&json)?)
}

/// Display the door roster with payment status.
pub fn display_door(orders: &[&Order], slug: &str) {
    let paid = orders.iter().filter(|o| o.is_paid).count();

    println!();
    println!("=== {} ({} players, {} paid) ===", slug, orders.len(), paid);
    println!();

    if orders.is_empty() {
        println!("No orders for this event.");
        println!();
        return;
    }

    let max_name_len = orders
        .iter()
        .map(|o| o.display_name().len())
        .max()
        .unwrap_or(10);

    for order in orders {
        println!(
            "  {:<4} {:<width$}  {} x {} | {} x {}",
            if order.is_paid { "PAID" } else { "CASH" },
            order.display_name(),
            order.slice_count,
            order.topping,
            order.drink_count,
            order.drink,
            width = max_name_len
        );
    }
    println!();
}

/// Display paid orders still waiting for hand-off.
pub fn display_handoffs(orders: &[&Order]) {
    println!();
    println!("=== Hand-off ({} waiting) ===", orders.len());
    println!();

    for order in orders {
        println!(
            "  {} - {} • {} SLICES | {} x{}",
            order.display_name(),
            order.topping,
            order.slice_count,
            order.drink,
            order.drink_count
        );
    }
    println!();
}

/// Display a labelled count table.
pub fn display_tally<T: std::fmt::Display>(title: &str, tally: &[(String, T)]) {
    println!();
    println!("=== {} ===", title);
    println!();

    if tally.is_empty() {
        println!("  (none)");
    }
    for (label, count) in tally {
        println!("  {:<20} {}", label, count);
    }
    println!();
}

/// Display one menu category.
pub fn display_menu(category: MenuCategory, labels: &[&str]) {
    if labels.is_empty() {
        println!("{}s: (none)", category);
    } else {
        println!("{}s: {}", category, labels.join(", "));
    }
}
