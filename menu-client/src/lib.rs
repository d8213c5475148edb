//! Menu Client - HTTP client and state store for the restaurant menu API
//!
//! Fetches a restaurant's nested menu (groups → categories → items) plus
//! promotional content, holds it in a single in-memory [`MenuStore`], and
//! governs one-shot promotional reveals through explicit state machines.

pub mod config;
pub mod error;
pub mod http;
pub mod reveal;
pub mod session;
pub mod store;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorBody};
pub use http::MenuApi;
pub use reveal::{AnnouncementReveal, HighlightedReveal, RevealPhase};
pub use session::MenuSession;
pub use store::MenuStore;

// Re-export shared types for convenience
pub use shared::models::{
    Announcement, Category, HighlightedItem, ItemMatch, MenuGroup, MenuItem, RestaurantRecord,
};
