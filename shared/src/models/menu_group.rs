//! Menu Group Model

use super::category::Category;
use serde::{Deserialize, Serialize};

/// Top-level menu partition (e.g. "food" vs. "drinks")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuGroup {
    pub id: i64,
    /// Wire name is `type`
    #[serde(rename = "type")]
    pub group_type: String,
    pub group_order: i32,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl MenuGroup {
    /// Categories whose name matches a case-insensitive query
    pub fn search_categories(&self, query: &str) -> Vec<&Category> {
        let q = query.to_lowercase();
        self.categories
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&q))
            .collect()
    }
}
