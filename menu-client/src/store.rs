//! In-memory state container
//!
//! Holds the single resident restaurant record, the highlighted items, the
//! per-domain fetch lifecycle fields, and the one-shot "shown" flags.
//! Explicitly constructed and passed by reference; there is no process-wide
//! singleton. Reads go through accessor methods, writes only through the
//! lifecycle and flag operations below, each applied atomically per call.

use shared::models::{HighlightedItem, RestaurantRecord};

/// Client-side store for one restaurant session
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    restaurant: Option<RestaurantRecord>,
    restaurant_loading: bool,
    restaurant_error: Option<String>,

    highlighted_items: Vec<HighlightedItem>,
    highlighted_loading: bool,
    highlighted_error: Option<String>,

    has_shown_highlighted: bool,
    has_shown_announcements: bool,
}

impl MenuStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Selectors ==========

    pub fn restaurant(&self) -> Option<&RestaurantRecord> {
        self.restaurant.as_ref()
    }

    pub fn restaurant_loading(&self) -> bool {
        self.restaurant_loading
    }

    pub fn restaurant_error(&self) -> Option<&str> {
        self.restaurant_error.as_deref()
    }

    pub fn highlighted_items(&self) -> &[HighlightedItem] {
        &self.highlighted_items
    }

    pub fn highlighted_loading(&self) -> bool {
        self.highlighted_loading
    }

    pub fn highlighted_error(&self) -> Option<&str> {
        self.highlighted_error.as_deref()
    }

    pub fn has_shown_highlighted(&self) -> bool {
        self.has_shown_highlighted
    }

    pub fn has_shown_announcements(&self) -> bool {
        self.has_shown_announcements
    }

    // ========== Restaurant fetch lifecycle ==========

    pub fn begin_restaurant_fetch(&mut self) {
        self.restaurant_loading = true;
        self.restaurant_error = None;
    }

    /// Full replace, no merge; last fetch wins
    pub fn complete_restaurant_fetch(&mut self, record: RestaurantRecord) {
        self.restaurant_loading = false;
        self.restaurant = Some(record);
    }

    pub fn fail_restaurant_fetch(&mut self, message: impl Into<String>) {
        self.restaurant_loading = false;
        self.restaurant_error = Some(message.into());
    }

    // ========== Highlighted-items fetch lifecycle ==========

    pub fn begin_highlighted_fetch(&mut self) {
        self.highlighted_loading = true;
        self.highlighted_error = None;
    }

    pub fn complete_highlighted_fetch(&mut self, items: Vec<HighlightedItem>) {
        self.highlighted_loading = false;
        self.highlighted_items = items;
    }

    pub fn fail_highlighted_fetch(&mut self, message: impl Into<String>) {
        self.highlighted_loading = false;
        self.highlighted_error = Some(message.into());
    }

    // ========== One-shot flags ==========

    /// Idempotent; monotonic until `clear`
    pub fn mark_highlighted_shown(&mut self) {
        self.has_shown_highlighted = true;
    }

    /// Idempotent; monotonic until `clear`
    pub fn mark_announcements_shown(&mut self) {
        self.has_shown_announcements = true;
    }

    // ========== Reset ==========

    /// Reset every field to its initial value, shown flags included
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
