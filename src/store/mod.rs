//! # Shared UI Stores
//!
//! Cross-screen mutable state lives here instead of inside individual
//! screens. Currently that is only the favorites set: every screen
//! renders the heart from the same portal, so a toggle on the detail
//! screen is immediately visible in the feed.

pub mod favorites;

pub use favorites::{FavoritesPortal, StoreAction, StoreResult};
