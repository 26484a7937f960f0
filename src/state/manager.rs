use tracing::{debug, info};

use crate::error::{OvenError, Result};
use crate::models::{MenuCategory, MenuItem, Order};
use crate::state::persistence::PizzaState;

/// Orders for every event plus the shared menu.
pub struct OrderBook {
    orders: Vec<Order>,
    menu: Vec<MenuItem>,
}

impl OrderBook {
    /// Create an order book from loaded state.
    pub fn new(state: PizzaState) -> Self {
        let mut book = Self {
            orders: state.orders,
            menu: state.menu,
        };
        book.sort_menu();
        book
    }

    /// Snapshot for saving.
    pub fn to_state(&self) -> PizzaState {
        PizzaState {
            orders: self.orders.clone(),
            menu: self.menu.clone(),
        }
    }

    fn position(&self, slug: &str, player: &str) -> Option<usize> {
        self.orders
            .iter()
            .position(|o| o.tournament_slug == slug && o.player_name == player)
    }

    fn get_mut(&mut self, slug: &str, player: &str) -> Result<&mut Order> {
        let idx = self
            .position(slug, player)
            .ok_or_else(|| OvenError::PlayerNotFound(player.to_string()))?;
        Ok(&mut self.orders[idx])
    }

    /// Look up one player's order.
    pub fn get(&self, slug: &str, player: &str) -> Option<&Order> {
        self.position(slug, player).map(|i| &self.orders[i])
    }

    /// All orders of an event, sorted by player name.
    pub fn orders_for(&self, slug: &str) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| o.tournament_slug == slug)
            .collect();
        orders.sort_by(|a, b| a.player_name.cmp(&b.player_name));
        orders
    }

    /// Paid orders of an event, sorted by player name.
    ///
    /// Returns owned copies so the result can be fed straight into packing.
    pub fn paid_orders(&self, slug: &str) -> Vec<Order> {
        self.orders_for(slug)
            .into_iter()
            .filter(|o| o.is_paid)
            .cloned()
            .collect()
    }

    /// Paid orders whose food has not been handed over yet.
    pub fn pending_handoffs(&self, slug: &str) -> Vec<&Order> {
        self.orders_for(slug)
            .into_iter()
            .filter(|o| o.is_paid && !o.is_collected)
            .collect()
    }

    /// Orders of an event whose player name contains `query` (case-insensitive).
    pub fn search(&self, slug: &str, query: &str) -> Vec<&Order> {
        let query = query.to_lowercase();
        self.orders_for(slug)
            .into_iter()
            .filter(|o| o.player_name.to_lowercase().contains(&query))
            .collect()
    }

    /// Player names of an event, for suggestions.
    pub fn player_names(&self, slug: &str) -> Vec<&str> {
        self.orders_for(slug)
            .into_iter()
            .map(|o| o.player_name.as_str())
            .collect()
    }

    /// (total, paid) order counts for an event.
    pub fn counts(&self, slug: &str) -> (usize, usize) {
        let orders = self.orders_for(slug);
        let paid = orders.iter().filter(|o| o.is_paid).count();
        (orders.len(), paid)
    }

    /// Insert or replace an order keyed on event and player.
    ///
    /// Returns `true` when a new record was inserted. Orders over the
    /// per-order count caps are rejected.
    pub fn upsert(&mut self, order: Order) -> Result<bool> {
        order.validate()?;

        match self.position(&order.tournament_slug, &order.player_name) {
            Some(idx) => {
                debug!(player = %order.player_name, "replacing order");
                self.orders[idx] = order;
                Ok(false)
            }
            None => {
                debug!(player = %order.player_name, "inserting order");
                self.orders.push(order);
                Ok(true)
            }
        }
    }

    /// Like [`upsert`](Self::upsert), but keeps the existing paid and
    /// collected flags so a re-import never resets check-in progress.
    pub fn upsert_import(&mut self, mut order: Order) -> Result<bool> {
        if let Some(existing) = self.get(&order.tournament_slug, &order.player_name) {
            order.is_paid = existing.is_paid;
            order.is_collected = existing.is_collected;
        }
        self.upsert(order)
    }

    /// Delete a player's order.
    pub fn remove(&mut self, slug: &str, player: &str) -> Result<Order> {
        let idx = self
            .position(slug, player)
            .ok_or_else(|| OvenError::PlayerNotFound(player.to_string()))?;
        info!(slug, player, "removing order");
        Ok(self.orders.remove(idx))
    }

    /// Flip the paid flag. Returns the new value.
    pub fn toggle_paid(&mut self, slug: &str, player: &str) -> Result<bool> {
        let order = self.get_mut(slug, player)?;
        order.is_paid = !order.is_paid;
        info!(slug, player, paid = order.is_paid, "toggled payment");
        Ok(order.is_paid)
    }

    /// Flip the collected flag. Returns the new value.
    pub fn toggle_collected(&mut self, slug: &str, player: &str) -> Result<bool> {
        let order = self.get_mut(slug, player)?;
        order.is_collected = !order.is_collected;
        info!(slug, player, collected = order.is_collected, "toggled hand-off");
        Ok(order.is_collected)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Menu
    // ─────────────────────────────────────────────────────────────────────

    fn sort_menu(&mut self) {
        self.menu.sort_by(|a, b| a.label.cmp(&b.label));
    }

    /// Menu labels of one category, sorted by label.
    pub fn menu_labels(&self, category: MenuCategory) -> Vec<&str> {
        self.menu
            .iter()
            .filter(|m| m.category == category)
            .map(|m| m.label.as_str())
            .collect()
    }

    pub fn toppings(&self) -> Vec<&str> {
        self.menu_labels(MenuCategory::Topping)
    }

    pub fn drinks(&self) -> Vec<&str> {
        self.menu_labels(MenuCategory::Drink)
    }

    /// Add a menu item. Labels are unique per category, ignoring case.
    pub fn add_menu_item(&mut self, category: MenuCategory, label: &str) -> Result<()> {
        let label = label.trim();
        if label.is_empty() {
            return Err(OvenError::InvalidInput("menu label is empty".to_string()));
        }
        if self.menu.iter().any(|m| m.matches(category, label)) {
            return Err(OvenError::DuplicateMenuItem(label.to_string()));
        }

        self.menu.push(MenuItem::new(category, label));
        self.sort_menu();
        info!(%category, label, "added menu item");
        Ok(())
    }

    /// Remove a menu item (case-insensitive label match).
    pub fn remove_menu_item(&mut self, category: MenuCategory, label: &str) -> Result<MenuItem> {
        let idx = self
            .menu
            .iter()
            .position(|m| m.matches(category, label))
            .ok_or_else(|| OvenError::MenuItemNotFound(label.to_string()))?;
        info!(%category, label, "removing menu item");
        Ok(self.menu.remove(idx))
    }
}
