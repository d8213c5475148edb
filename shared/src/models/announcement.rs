//! Announcement Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time-bound promotional message, shown once per session
///
/// Timestamps are kept as the API's RFC 3339 text; [`Announcement::is_live`]
/// parses the window bounds on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Announcement {
    /// Active flag AND `now` inside the start/end window
    ///
    /// An unparseable bound is treated as unbounded on that side.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        if !self.is_active {
            return false;
        }
        let started = match parse_bound(&self.start_date) {
            Some(start) => start <= now,
            None => true,
        };
        let not_ended = match parse_bound(&self.end_date) {
            Some(end) => now <= end,
            None => true,
        };
        started && not_ended
    }
}

fn parse_bound(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
