//! Highlighted Item Model

use serde::{Deserialize, Serialize};

/// Promotionally featured item ("today's special")
///
/// Structurally close to [`MenuItem`](super::menu_item::MenuItem) but sourced
/// from its own endpoint and never nested under a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightedItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub item_order: i32,
}
