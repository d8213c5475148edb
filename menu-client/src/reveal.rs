//! Promotional reveal gating
//!
//! Each one-shot promotional surface (highlighted items, announcements) is an
//! explicit state machine layered on the store, driven by discrete events
//! rather than render effects. The mark-shown transition happens inside the
//! same `evaluate` call that detects eligibility, so a reveal fires at most
//! once per session no matter how often callers re-check.

use crate::store::MenuStore;
use shared::models::Announcement;

/// Lifecycle of a one-shot promotional surface
///
/// `Eligible` is transient: `evaluate` collapses `NotEligible → Eligible →
/// Showing` into a single atomic step, so callers never observe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    NotEligible,
    Eligible,
    Showing,
    Done,
}

// ============================================================================
// Highlighted-items reveal
// ============================================================================

/// One-shot reveal for the "today's specials" surface
#[derive(Debug, Clone, Default)]
pub struct HighlightedReveal {
    phase: RevealPhase,
}

impl HighlightedReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Re-check eligibility and fire the reveal if it holds
    ///
    /// Eligible when the highlighted fetch is not loading, at least one item
    /// is present, and the shown flag is unset. Returns `true` exactly once
    /// per session; the store flag is set in the same step.
    pub fn evaluate(&mut self, store: &mut MenuStore) -> bool {
        if self.phase != RevealPhase::NotEligible {
            return false;
        }
        if store.highlighted_loading()
            || store.highlighted_items().is_empty()
            || store.has_shown_highlighted()
        {
            return false;
        }
        self.phase = RevealPhase::Showing;
        store.mark_highlighted_shown();
        true
    }

    /// Full dismissal of the surface
    pub fn dismiss(&mut self) {
        if self.phase == RevealPhase::Showing {
            self.phase = RevealPhase::Done;
        }
    }

    /// Back to `NotEligible`; paired with `MenuStore::clear`
    pub fn reset(&mut self) {
        self.phase = RevealPhase::NotEligible;
    }
}

// ============================================================================
// Announcements reveal
// ============================================================================

/// One-shot sequential reveal of the resident record's announcements
///
/// The shown flag is set when the FIRST announcement begins display, so a
/// reload mid-sequence re-shows nothing.
#[derive(Debug, Clone, Default)]
pub struct AnnouncementReveal {
    phase: RevealPhase,
    cursor: usize,
}

impl AnnouncementReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Re-check eligibility and begin the sequence if it holds
    ///
    /// Eligible when the resident record carries at least one announcement
    /// and the shown flag is unset.
    pub fn evaluate(&mut self, store: &mut MenuStore) -> bool {
        if self.phase != RevealPhase::NotEligible {
            return false;
        }
        let has_announcements = store
            .restaurant()
            .is_some_and(|r| !r.announcements.is_empty());
        if !has_announcements || store.has_shown_announcements() {
            return false;
        }
        self.cursor = 0;
        self.phase = RevealPhase::Showing;
        store.mark_announcements_shown();
        true
    }

    /// The announcement currently on display, if any
    pub fn current<'a>(&self, store: &'a MenuStore) -> Option<&'a Announcement> {
        if self.phase != RevealPhase::Showing {
            return None;
        }
        store.restaurant()?.announcements.get(self.cursor)
    }

    /// Dismiss the current announcement, advancing to the next
    ///
    /// Dismissing the last one ends the sequence; the machine is `Done`.
    pub fn dismiss(&mut self, store: &MenuStore) {
        if self.phase != RevealPhase::Showing {
            return;
        }
        let total = store
            .restaurant()
            .map(|r| r.announcements.len())
            .unwrap_or(0);
        self.cursor += 1;
        if self.cursor >= total {
            self.phase = RevealPhase::Done;
        }
    }

    /// Back to `NotEligible`; paired with `MenuStore::clear`
    pub fn reset(&mut self) {
        self.phase = RevealPhase::NotEligible;
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{HighlightedItem, RestaurantRecord};

    fn special(id: i64) -> HighlightedItem {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": "Special",
            "description": "",
            "price": "100.00",
            "image": "",
            "item_order": 1
        }))
        .unwrap()
    }

    fn record_with_announcements(titles: &[&str]) -> RestaurantRecord {
        let announcements: Vec<serde_json::Value> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| {
                serde_json::json!({
                    "id": i as i64 + 1,
                    "title": t,
                    "message": "hello",
                    "start_date": "2025-01-01T00:00:00Z",
                    "end_date": "2026-01-01T00:00:00Z",
                    "is_active": true
                })
            })
            .collect();
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Test",
            "address": "",
            "phone": "",
            "logo": "",
            "menu_groups": [],
            "announcements": announcements
        }))
        .unwrap()
    }

    #[test]
    fn test_highlighted_fires_once() {
        let mut store = MenuStore::new();
        let mut reveal = HighlightedReveal::new();
        store.complete_highlighted_fetch(vec![special(1)]);

        assert!(reveal.evaluate(&mut store));
        assert_eq!(reveal.phase(), RevealPhase::Showing);
        assert!(store.has_shown_highlighted());

        // repeated re-checks never re-trigger
        for _ in 0..5 {
            assert!(!reveal.evaluate(&mut store));
        }

        reveal.dismiss();
        assert_eq!(reveal.phase(), RevealPhase::Done);
        assert!(!reveal.evaluate(&mut store));
    }

    #[test]
    fn test_highlighted_empty_list_short_circuits() {
        let mut store = MenuStore::new();
        let mut reveal = HighlightedReveal::new();

        // no items: not eligible, flag irrelevant
        assert!(!reveal.evaluate(&mut store));
        store.mark_highlighted_shown();
        store.clear();
        assert!(!reveal.evaluate(&mut store));
        assert_eq!(reveal.phase(), RevealPhase::NotEligible);
    }

    #[test]
    fn test_highlighted_waits_for_loading() {
        let mut store = MenuStore::new();
        let mut reveal = HighlightedReveal::new();

        store.begin_highlighted_fetch();
        assert!(!reveal.evaluate(&mut store));

        store.complete_highlighted_fetch(vec![special(1)]);
        assert!(reveal.evaluate(&mut store));
    }

    #[test]
    fn test_highlighted_respects_prior_flag() {
        let mut store = MenuStore::new();
        let mut reveal = HighlightedReveal::new();
        store.complete_highlighted_fetch(vec![special(1)]);
        store.mark_highlighted_shown();

        // refetch settled but already shown this session
        assert!(!reveal.evaluate(&mut store));
    }

    #[test]
    fn test_announcement_sequence_a_b_c() {
        let mut store = MenuStore::new();
        let mut reveal = AnnouncementReveal::new();
        store.complete_restaurant_fetch(record_with_announcements(&["A", "B", "C"]));

        // first evaluation sets the flag and begins showing A
        assert!(reveal.evaluate(&mut store));
        assert!(store.has_shown_announcements());
        assert_eq!(reveal.current(&store).unwrap().title, "A");

        reveal.dismiss(&store);
        assert_eq!(reveal.current(&store).unwrap().title, "B");

        reveal.dismiss(&store);
        assert_eq!(reveal.current(&store).unwrap().title, "C");

        // dismissing the last returns to no active announcement
        reveal.dismiss(&store);
        assert!(reveal.current(&store).is_none());
        assert_eq!(reveal.phase(), RevealPhase::Done);

        // nothing further without an intervening clear
        assert!(!reveal.evaluate(&mut store));
    }

    #[test]
    fn test_announcements_not_reshown_after_reload() {
        let mut store = MenuStore::new();
        let mut reveal = AnnouncementReveal::new();
        store.complete_restaurant_fetch(record_with_announcements(&["A", "B"]));

        assert!(reveal.evaluate(&mut store));
        reveal.dismiss(&store); // mid-sequence

        // a reload reconstructs the machine but the store flag survives
        let mut fresh = AnnouncementReveal::new();
        store.complete_restaurant_fetch(record_with_announcements(&["A", "B"]));
        assert!(!fresh.evaluate(&mut store));
        assert!(fresh.current(&store).is_none());
    }

    #[test]
    fn test_clear_re_arms_both_domains() {
        let mut store = MenuStore::new();
        let mut highlighted = HighlightedReveal::new();
        let mut announcements = AnnouncementReveal::new();

        store.complete_highlighted_fetch(vec![special(1)]);
        store.complete_restaurant_fetch(record_with_announcements(&["A"]));
        assert!(highlighted.evaluate(&mut store));
        assert!(announcements.evaluate(&mut store));

        store.clear();
        highlighted.reset();
        announcements.reset();

        // eligible again once fresh data lands
        store.complete_highlighted_fetch(vec![special(2)]);
        store.complete_restaurant_fetch(record_with_announcements(&["A"]));
        assert!(highlighted.evaluate(&mut store));
        assert!(announcements.evaluate(&mut store));
    }

    #[test]
    fn test_no_announcements_not_eligible() {
        let mut store = MenuStore::new();
        let mut reveal = AnnouncementReveal::new();
        store.complete_restaurant_fetch(record_with_announcements(&[]));

        assert!(!reveal.evaluate(&mut store));
        assert!(!store.has_shown_announcements());
    }
}
