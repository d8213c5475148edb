//! Fetch orchestration
//!
//! [`MenuSession`] owns the store, the API client, and the two reveal
//! machines, and is the only writer to any of them. Each fetch walks the
//! `pending → fulfilled | rejected` lifecycle; failures are reduced to a
//! display string and recorded in the store, so presentation code never has
//! to handle a raw error. Concurrent fetches for the same domain are not
//! de-duplicated; whichever settles last wins.

use crate::reveal::{AnnouncementReveal, HighlightedReveal};
use crate::store::MenuStore;
use crate::{ClientConfig, ClientError, ClientResult, MenuApi};
use shared::models::Announcement;
use tracing::{debug, warn};

/// Fallback message for restaurant fetch failures with no usable detail
pub const RESTAURANT_FETCH_FALLBACK: &str = "Failed to fetch restaurant data";

/// Fallback message for highlighted-items fetch failures
pub const HIGHLIGHTED_FETCH_FALLBACK: &str = "Failed to load today's specials";

/// One browsing session against a single restaurant
pub struct MenuSession {
    api: MenuApi,
    store: MenuStore,
    highlighted_reveal: HighlightedReveal,
    announcement_reveal: AnnouncementReveal,
}

impl MenuSession {
    /// Create a session from configuration
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_api(config.build_api())
    }

    /// Create a session around an existing API client
    pub fn with_api(api: MenuApi) -> Self {
        Self {
            api,
            store: MenuStore::new(),
            highlighted_reveal: HighlightedReveal::new(),
            announcement_reveal: AnnouncementReveal::new(),
        }
    }

    /// Read-only view of the store
    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// Reset the store and re-arm both reveal domains
    pub fn clear(&mut self) {
        self.store.clear();
        self.highlighted_reveal.reset();
        self.announcement_reveal.reset();
    }

    // ========== Fetch flows ==========

    /// Fetch the restaurant record
    ///
    /// A non-positive id is rejected before any request is issued and before
    /// the store is touched. On failure the extracted message also lands in
    /// `restaurant_error`, so callers may ignore the returned error.
    pub async fn load_restaurant(&mut self, id: i64) -> ClientResult<()> {
        if id <= 0 {
            return Err(ClientError::InvalidIdentifier(id));
        }

        self.store.begin_restaurant_fetch();
        match self.api.restaurant(id).await {
            Ok(record) => {
                debug!(restaurant_id = id, groups = record.menu_groups.len(), "restaurant loaded");
                self.store.complete_restaurant_fetch(record);
                Ok(())
            }
            Err(err) => {
                let message = err.user_message(RESTAURANT_FETCH_FALLBACK);
                warn!(restaurant_id = id, %message, "restaurant fetch failed");
                self.store.fail_restaurant_fetch(message);
                Err(err)
            }
        }
    }

    /// Fetch the highlighted items ("today's specials")
    ///
    /// Same lifecycle as [`load_restaurant`](Self::load_restaurant); also the
    /// manual retry path after a failure.
    pub async fn load_highlighted_items(&mut self, id: i64) -> ClientResult<()> {
        if id <= 0 {
            return Err(ClientError::InvalidIdentifier(id));
        }

        self.store.begin_highlighted_fetch();
        match self.api.highlighted_items(id).await {
            Ok(items) => {
                debug!(restaurant_id = id, count = items.len(), "highlighted items loaded");
                self.store.complete_highlighted_fetch(items);
                Ok(())
            }
            Err(err) => {
                let message = err.user_message(HIGHLIGHTED_FETCH_FALLBACK);
                warn!(restaurant_id = id, %message, "highlighted fetch failed");
                self.store.fail_highlighted_fetch(message);
                Err(err)
            }
        }
    }

    // ========== Reveal gating ==========

    /// Check-and-fire for the highlighted surface
    ///
    /// Returns `true` at most once per session; marking shown is part of the
    /// same atomic step.
    pub fn poll_highlighted_reveal(&mut self) -> bool {
        self.highlighted_reveal.evaluate(&mut self.store)
    }

    /// Dismiss the highlighted surface
    pub fn dismiss_highlighted(&mut self) {
        self.highlighted_reveal.dismiss();
    }

    /// Check-and-fire for the announcement sequence
    pub fn poll_announcements(&mut self) -> bool {
        self.announcement_reveal.evaluate(&mut self.store)
    }

    /// The announcement currently on display, if any
    pub fn current_announcement(&self) -> Option<&Announcement> {
        self.announcement_reveal.current(&self.store)
    }

    /// Dismiss the current announcement, advancing to the next
    pub fn dismiss_announcement(&mut self) {
        self.announcement_reveal.dismiss(&self.store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_identifier_short_circuits() {
        let mut session = MenuSession::new(&ClientConfig::dev());

        let err = session.load_restaurant(-5).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidIdentifier(-5)));

        // store untouched: no loading, no error
        assert!(!session.store().restaurant_loading());
        assert!(session.store().restaurant_error().is_none());
        assert!(session.store().restaurant().is_none());

        let err = session.load_highlighted_items(0).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidIdentifier(0)));
        assert!(!session.store().highlighted_loading());
        assert!(session.store().highlighted_error().is_none());
    }
}
