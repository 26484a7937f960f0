use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OvenError;

/// Which menu list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Topping,
    Drink,
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuCategory::Topping => write!(f, "topping"),
            MenuCategory::Drink => write!(f, "drink"),
        }
    }
}

impl FromStr for MenuCategory {
    type Err = OvenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "topping" | "toppings" => Ok(MenuCategory::Topping),
            "drink" | "drinks" => Ok(MenuCategory::Drink),
            other => Err(OvenError::InvalidInput(format!(
                "unknown menu category '{}' (expected topping or drink)",
                other
            ))),
        }
    }
}

/// A selectable topping or drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub category: MenuCategory,
    pub label: String,
}

impl MenuItem {
    pub fn new(category: MenuCategory, label: impl Into<String>) -> Self {
        Self {
            category,
            label: label.into(),
        }
    }

    /// Case-insensitive identity within a category.
    pub fn matches(&self, category: MenuCategory, label: &str) -> bool {
        self.category == category && self.label.to_lowercase() == label.trim().to_lowercase()
    }
}
