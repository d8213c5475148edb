//! Shared types for the menu client
//!
//! Data model consumed by the menu-client crate and by presentation code.
//! All entities mirror the wire format of the remote menu API.

pub mod models;

// Re-exports
pub use models::{
    Announcement, Category, HighlightedItem, ItemMatch, MenuGroup, MenuItem, RestaurantRecord,
};
pub use serde::{Deserialize, Serialize};
