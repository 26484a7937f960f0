use serde::{Deserialize, Serialize};

use crate::error::{OvenError, Result};
use crate::oven::constants::{MAX_DRINK_COUNT, MAX_SLICE_COUNT};

/// One player's pre-order for a tournament.
///
/// A player holds at most one order per event; `(tournament_slug, player_name)`
/// is the record key. Slice counts are unsigned, so negative quantities are
/// rejected when the state file is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub tournament_slug: String,

    pub player_name: String,

    pub topping: String,

    pub drink: String,

    #[serde(default = "default_slice_count")]
    pub slice_count: u32,

    #[serde(default = "default_drink_count")]
    pub drink_count: u32,

    #[serde(default)]
    pub is_paid: bool,

    #[serde(default)]
    pub is_collected: bool,
}

fn default_slice_count() -> u32 {
    crate::oven::constants::DEFAULT_SLICE_COUNT
}

fn default_drink_count() -> u32 {
    crate::oven::constants::DEFAULT_DRINK_COUNT
}

impl Order {
    /// A fresh unpaid, uncollected order.
    pub fn new(
        tournament_slug: impl Into<String>,
        player_name: impl Into<String>,
        topping: impl Into<String>,
        drink: impl Into<String>,
        slice_count: u32,
        drink_count: u32,
    ) -> Self {
        Self {
            tournament_slug: tournament_slug.into(),
            player_name: player_name.into(),
            topping: topping.into(),
            drink: drink.into(),
            slice_count,
            drink_count,
            is_paid: false,
            is_collected: false,
        }
    }

    /// Whether this order has the same record key as `other`.
    pub fn same_key(&self, other: &Order) -> bool {
        self.tournament_slug == other.tournament_slug && self.player_name == other.player_name
    }

    /// Reject slice or drink counts above the per-order caps.
    ///
    /// Keeps per-topping totals far from `u32` overflow no matter how many
    /// orders an event holds.
    pub fn validate(&self) -> Result<()> {
        check_count("slice count", self.slice_count, MAX_SLICE_COUNT)?;
        check_count("drink count", self.drink_count, MAX_DRINK_COUNT)?;
        Ok(())
    }

    /// Player name with any sponsor prefix ("TEAM | Tag") removed.
    pub fn display_name(&self) -> &str {
        display_name(&self.player_name)
    }
}

/// Ensure `value` is at most `max`.
pub fn check_count(what: &str, value: u32, max: u32) -> Result<u32> {
    if value > max {
        return Err(OvenError::InvalidInput(format!(
            "{} {} exceeds the limit of {}",
            what, value, max
        )));
    }
    Ok(value)
}

/// Strip a sponsor prefix from a gamer tag.
///
/// `"TSM | Leffen"` becomes `"Leffen"`; names without a `|` are returned as is.
pub fn display_name(name: &str) -> &str {
    match name.split('|').nth(1) {
        Some(tag) => tag.trim(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_strips_prefix() {
        assert_eq!(display_name("TSM | Leffen"), "Leffen");
        assert_eq!(display_name("Mango"), "Mango");
        assert_eq!(display_name("A|B|C"), "B");
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"tournament_slug": "t", "player_name": "p", "topping": "Cheese", "drink": "Coke"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.slice_count, 2);
        assert_eq!(order.drink_count, 1);
        assert!(!order.is_paid);
        assert!(!order.is_collected);
    }

    #[test]
    fn test_negative_slice_count_rejected() {
        let json = r#"{"tournament_slug": "t", "player_name": "p", "topping": "Cheese", "drink": "Coke", "slice_count": -2}"#;
        assert!(serde_json::from_str::<Order>(json).is_err());
    }

    #[test]
    fn test_validate_caps_counts() {
        let mut order = Order::new("t", "Mango", "Cheese", "Coke", MAX_SLICE_COUNT, 1);
        assert!(order.validate().is_ok());

        order.slice_count = u32::MAX;
        assert!(matches!(order.validate(), Err(OvenError::InvalidInput(_))));

        order.slice_count = 2;
        order.drink_count = MAX_DRINK_COUNT + 1;
        assert!(matches!(order.validate(), Err(OvenError::InvalidInput(_))));
    }

    #[test]
    fn test_same_key() {
        let a = Order::new("t", "Mango", "Cheese", "Coke", 2, 1);
        let mut b = Order::new("t", "Mango", "Pepperoni", "Sprite", 4, 2);
        assert!(a.same_key(&b));
        b.tournament_slug = "other".to_string();
        assert!(!a.same_key(&b));
    }
}
