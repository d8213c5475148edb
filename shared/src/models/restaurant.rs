//! Restaurant Model

use super::announcement::Announcement;
use super::category::Category;
use super::menu_group::MenuGroup;
use super::menu_item::MenuItem;
use serde::{Deserialize, Serialize};

/// Full restaurant payload: identity, social links, menu tree, announcements
///
/// Immutable once fetched; a refetch replaces the record wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub logo: String,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub tiktok_url: Option<String>,
    #[serde(default)]
    pub menu_groups: Vec<MenuGroup>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

/// A menu item together with the group/category it was found under
#[derive(Debug, Clone, Copy)]
pub struct ItemMatch<'a> {
    pub group: &'a MenuGroup,
    pub category: &'a Category,
    pub item: &'a MenuItem,
}

impl RestaurantRecord {
    /// Locate a category by group and category id (detail-view lookup)
    pub fn find_category(&self, group_id: i64, cat_id: i64) -> Option<&Category> {
        self.menu_groups
            .iter()
            .find(|g| g.id == group_id)?
            .categories
            .iter()
            .find(|c| c.id == cat_id)
    }

    /// Case-insensitive item search across every group and category
    ///
    /// Matches on item name or description; results keep API order.
    pub fn search_items<'a>(&'a self, query: &str) -> Vec<ItemMatch<'a>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        self.menu_groups
            .iter()
            .flat_map(|group| {
                group.categories.iter().flat_map(move |category| {
                    category
                        .items
                        .iter()
                        .filter(|item| item.matches(query))
                        .map(move |item| ItemMatch {
                            group,
                            category,
                            item,
                        })
                })
            })
            .collect()
    }
}
