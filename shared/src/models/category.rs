//! Category Model

use super::menu_item::MenuItem;
use serde::{Deserialize, Serialize};

/// Named grouping of items within a menu group, with its own tile image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub cat_order: i32,
    pub is_disabled: bool,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}
