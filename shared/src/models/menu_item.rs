//! Menu Item Model

use serde::{Deserialize, Serialize};

/// A single dish or drink inside a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal-as-text, currency-agnostic (e.g. "450.00")
    pub price: String,
    #[serde(default)]
    pub image: Option<String>,
    pub item_order: i32,
    /// Item-level disable, distinct from the category-level flag
    #[serde(default)]
    pub is_disabled: Option<bool>,
}

impl MenuItem {
    /// Whether name or description matches a case-insensitive query
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&q))
    }
}
