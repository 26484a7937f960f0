use serde::Serialize;

use crate::oven::constants::SLICES_PER_SIDE;

/// Fill state of one half of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SideKind {
    /// All four slice units of the half are used.
    Full,
    /// The leftover of a topping: 1 to 3 slice units.
    Partial,
}

/// One half of a pizza box, assigned to a single topping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Side {
    pub topping: String,
    pub kind: SideKind,
    /// Slice units carried by this half.
    pub slices: u32,
}

impl Side {
    pub fn full(topping: impl Into<String>) -> Self {
        Self {
            topping: topping.into(),
            kind: SideKind::Full,
            slices: SLICES_PER_SIDE,
        }
    }

    pub fn partial(topping: impl Into<String>, slices: u32) -> Self {
        debug_assert!(slices > 0 && slices < SLICES_PER_SIDE);
        Self {
            topping: topping.into(),
            kind: SideKind::Partial,
            slices,
        }
    }

    /// A partial half is not fully covered by its topping.
    #[inline]
    pub fn is_incomplete(&self) -> bool {
        self.kind == SideKind::Partial
    }

    /// Slice slots on this half that stay empty.
    #[inline]
    pub fn empty_slices(&self) -> u32 {
        SLICES_PER_SIDE.saturating_sub(self.slices)
    }
}

/// A physical box holding one or two sides.
///
/// `side_b` is only absent on the last box of a plan with an odd side count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PizzaBox {
    pub side_a: Side,
    pub side_b: Option<Side>,
}

impl PizzaBox {
    pub fn pair(side_a: Side, side_b: Side) -> Self {
        Self {
            side_a,
            side_b: Some(side_b),
        }
    }

    pub fn single(side_a: Side) -> Self {
        Self {
            side_a,
            side_b: None,
        }
    }

    /// Iterate over the sides that are present.
    pub fn sides(&self) -> impl Iterator<Item = &Side> {
        std::iter::once(&self.side_a).chain(self.side_b.as_ref())
    }

    /// Total slice units in the box.
    pub fn slices(&self) -> u32 {
        self.sides().map(|s| s.slices).sum()
    }

    /// Topping shared by both halves, if the box holds two halves of one topping.
    pub fn shared_topping(&self) -> Option<&str> {
        match &self.side_b {
            Some(b) if b.topping == self.side_a.topping => Some(&self.side_a.topping),
            _ => None,
        }
    }
}
