use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{MenuItem, Order};

/// Everything the desk keeps on disk: all events' orders plus the menu.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PizzaState {
    #[serde(default)]
    pub orders: Vec<Order>,

    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

/// Keep the last record per key, at the position of its first occurrence.
fn dedup_orders(orders: Vec<Order>) -> Vec<Order> {
    let mut deduped: Vec<Order> = Vec::with_capacity(orders.len());
    for order in orders {
        match deduped.iter_mut().find(|o| o.same_key(&order)) {
            Some(existing) => *existing = order,
            None => deduped.push(order),
        }
    }
    deduped
}

/// Load state from a JSON file.
///
/// A missing file yields an empty state. Duplicate orders (same event and
/// player) are collapsed, last occurrence wins. Orders with counts above the
/// per-order caps are rejected.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<PizzaState> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "state file not found, starting empty");
        return Ok(PizzaState::default());
    }

    let content = fs::read_to_string(path)?;
    let mut state: PizzaState = serde_json::from_str(&content)?;
    for order in &state.orders {
        order.validate()?;
    }
    state.orders = dedup_orders(state.orders);

    debug!(
        orders = state.orders.len(),
        menu = state.menu.len(),
        "loaded state"
    );
    Ok(state)
}

/// Save state to a JSON file.
pub fn save_state<P: AsRef<Path>>(path: P, state: &PizzaState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path.as_ref(), json)?;
    debug!(path = %path.as_ref().display(), "saved state");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"{
            "orders": [
                {"tournament_slug": "t", "player_name": "Mango", "topping": "Cheese", "drink": "Coke", "slice_count": 2, "drink_count": 1, "is_paid": true, "is_collected": false}
            ],
            "menu": [{"category": "topping", "label": "Cheese"}]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let state = load_state(file.path()).unwrap();
        assert_eq!(state.orders.len(), 1);
        assert!(state.orders[0].is_paid);
        assert_eq!(state.menu.len(), 1);

        let out_file = NamedTempFile::new().unwrap();
        save_state(out_file.path(), &state).unwrap();

        let reloaded = load_state(out_file.path()).unwrap();
        assert_eq!(reloaded.orders, state.orders);
        assert_eq!(reloaded.menu, state.menu);
    }

    #[test]
    fn test_missing_file_is_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_state(dir.path().join("nope.json")).unwrap();
        assert!(state.orders.is_empty());
        assert!(state.menu.is_empty());
    }

    #[test]
    fn test_oversized_counts_rejected() {
        let json = r#"{"orders": [
            {"tournament_slug": "t", "player_name": "Mango", "topping": "Cheese", "drink": "Coke", "slice_count": 4294967295},
            {"tournament_slug": "t", "player_name": "Zain", "topping": "Cheese", "drink": "Coke", "slice_count": 1}
        ]}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_state(file.path()),
            Err(crate::error::OvenError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_deduplication() {
        let json = r#"{"orders": [
            {"tournament_slug": "t", "player_name": "Mango", "topping": "Cheese", "drink": "Coke"},
            {"tournament_slug": "t", "player_name": "Zain", "topping": "Ham", "drink": "Coke"},
            {"tournament_slug": "t", "player_name": "Mango", "topping": "Pepperoni", "drink": "Coke"}
        ]}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let state = load_state(file.path()).unwrap();
        assert_eq!(state.orders.len(), 2);
        // Last occurrence wins
        assert_eq!(state.orders[0].player_name, "Mango");
        assert_eq!(state.orders[0].topping, "Pepperoni");
    }
}
