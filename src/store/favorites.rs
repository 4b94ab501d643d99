//! Favorites portal.
//!
//! Thread-safe store for the set of favorited listings, accessed through
//! an action dispatch so every caller goes through the same non-blocking
//! locking discipline. Lock contention degrades to [`StoreResult::Busy`]
//! rather than blocking the frame; the UI simply renders the previous
//! state and tries again next frame.

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::catalog::ListingId;

#[derive(Debug)]
pub enum StoreAction {
    /// Flips the favorite flag for one listing.
    Toggle(ListingId),
    /// Reads the favorite flag for one listing.
    Contains(ListingId),
    /// Snapshot of every favorited listing id.
    All,
}

#[derive(Debug, PartialEq, Eq)]
pub enum StoreResult {
    /// New flag value after a toggle.
    Toggled(bool),
    Contains(bool),
    All(Vec<ListingId>),
    /// The lock was contended; state is unchanged.
    Busy,
}

/// Shared favorites set, cloned into every screen that needs it.
#[derive(Debug, Clone, Default)]
pub struct FavoritesPortal {
    favorites: Arc<RwLock<HashSet<ListingId>>>,
}

impl FavoritesPortal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute_store_action(&self, action: StoreAction) -> StoreResult {
        match action {
            StoreAction::Toggle(id) => match self.favorites.try_write() {
                Ok(mut favorites) => {
                    let now_favorite = if favorites.remove(&id) {
                        false
                    } else {
                        favorites.insert(id);
                        true
                    };
                    StoreResult::Toggled(now_favorite)
                }
                Err(error) => {
                    warn!("Favorites store busy, toggle for {} dropped: {}", id, error);
                    StoreResult::Busy
                }
            },
            StoreAction::Contains(id) => match self.favorites.try_read() {
                Ok(favorites) => StoreResult::Contains(favorites.contains(&id)),
                Err(error) => {
                    warn!("Unable to read favorites store: {}", error);
                    StoreResult::Busy
                }
            },
            StoreAction::All => match self.favorites.try_read() {
                Ok(favorites) => {
                    let mut all: Vec<ListingId> = favorites.iter().copied().collect();
                    all.sort_by_key(|id| id.0);
                    StoreResult::All(all)
                }
                Err(error) => {
                    warn!("Unable to read favorites store: {}", error);
                    StoreResult::Busy
                }
            },
        }
    }

    /// Convenience read for card rendering; contention counts as "not
    /// favorited" for the current frame.
    pub fn is_favorite(&self, id: ListingId) -> bool {
        matches!(
            self.execute_store_action(StoreAction::Contains(id)),
            StoreResult::Contains(true)
        )
    }

    pub fn count(&self) -> usize {
        match self.execute_store_action(StoreAction::All) {
            StoreResult::All(all) => all.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_reports_the_new_state() {
        let portal = FavoritesPortal::new();
        let id = ListingId(1001);

        assert_eq!(
            portal.execute_store_action(StoreAction::Toggle(id)),
            StoreResult::Toggled(true)
        );
        assert!(portal.is_favorite(id));

        assert_eq!(
            portal.execute_store_action(StoreAction::Toggle(id)),
            StoreResult::Toggled(false)
        );
        assert!(!portal.is_favorite(id));
    }

    #[test]
    fn all_returns_sorted_snapshot_shared_between_clones() {
        let portal = FavoritesPortal::new();
        let clone = portal.clone();
        clone.execute_store_action(StoreAction::Toggle(ListingId(1005)));
        clone.execute_store_action(StoreAction::Toggle(ListingId(1002)));

        assert_eq!(
            portal.execute_store_action(StoreAction::All),
            StoreResult::All(vec![ListingId(1002), ListingId(1005)])
        );
        assert_eq!(portal.count(), 2);
    }
}
