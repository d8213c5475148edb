//! Data models
//!
//! One module per entity, deserialized straight from the menu API.
//! All IDs are `i64`; ordering keys are `i32` and arrive pre-sorted from the
//! server, so insertion order is display order.

pub mod announcement;
pub mod category;
pub mod highlighted_item;
pub mod menu_group;
pub mod menu_item;
pub mod restaurant;

// Re-exports
pub use announcement::*;
pub use category::*;
pub use highlighted_item::*;
pub use menu_group::*;
pub use menu_item::*;
pub use restaurant::*;
