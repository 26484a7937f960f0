use std::fmt;

use serde::Serialize;

use crate::models::{PizzaBox, SideKind};

/// How the kitchen should read a packed box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "class", content = "topping", rename_all = "snake_case")]
pub enum BoxClass {
    /// Two full halves of one topping: a whole pizza.
    Whole(String),
    /// A full half plus a partial half of one topping.
    ThreeQuarter(String),
    /// Two halves that do not form a whole or three-quarter pizza.
    Mixed,
    /// Only one half is filled; the other half stays empty.
    HalfEmpty,
}

impl fmt::Display for BoxClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxClass::Whole(topping) => write!(f, "WHOLE {}", topping),
            BoxClass::ThreeQuarter(topping) => write!(f, "75% {}", topping),
            BoxClass::Mixed => write!(f, "MIXED"),
            BoxClass::HalfEmpty => write!(f, "HALF EMPTY"),
        }
    }
}

impl PizzaBox {
    /// Both halves present, same topping, both full.
    pub fn is_full_box(&self) -> bool {
        matches!(&self.side_b, Some(b)
            if b.topping == self.side_a.topping
                && self.side_a.kind == SideKind::Full
                && b.kind == SideKind::Full)
    }

    /// Both halves present, same topping, second half partial.
    pub fn is_three_quarter(&self) -> bool {
        matches!(&self.side_b, Some(b)
            if b.topping == self.side_a.topping && b.kind == SideKind::Partial)
    }

    pub fn classify(&self) -> BoxClass {
        classify(self)
    }
}

/// Classify a packed box. Pure and read-only.
pub fn classify(pizza_box: &PizzaBox) -> BoxClass {
    if pizza_box.side_b.is_none() {
        BoxClass::HalfEmpty
    } else if pizza_box.is_full_box() {
        BoxClass::Whole(pizza_box.side_a.topping.clone())
    } else if pizza_box.is_three_quarter() {
        BoxClass::ThreeQuarter(pizza_box.side_a.topping.clone())
    } else {
        BoxClass::Mixed
    }
}
