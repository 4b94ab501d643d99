//! Favorites screen: the feed filtered to favorited listings.

use eframe::egui::{RichText, ScrollArea, Ui};
use tracing::debug;

use super::cards;
use super::common::UiColors;
use crate::catalog::{Catalog, ListingId};
use crate::config::AppConfig;
use crate::images::ImageStore;
use crate::store::{FavoritesPortal, StoreAction, StoreResult};

/// Renders the favorites feed. Returns the listing the user tapped.
pub fn render(
    ui: &mut Ui,
    catalog: &Catalog,
    images: &mut ImageStore,
    config: &AppConfig,
    favorites: &FavoritesPortal,
) -> Option<ListingId> {
    let mut selected = None;

    ui.heading("Favorites");

    let favorite_ids = match favorites.execute_store_action(StoreAction::All) {
        StoreResult::All(ids) => ids,
        // Store contended this frame; render empty and pick it up on the
        // next repaint.
        _ => Vec::new(),
    };

    if favorite_ids.is_empty() {
        ui.label(
            RichText::new("Nothing saved yet — tap the heart on a listing")
                .color(UiColors::MUTED),
        );
        return None;
    }

    ScrollArea::vertical().id_salt("favorites_feed").show(ui, |ui| {
        for id in favorite_ids {
            let Some(listing) = catalog.get(id) else {
                continue;
            };
            let response = cards::feed_card(ui, listing, images, config, true);
            if response.clicked() {
                debug!("Opening favorited listing {}", listing.id);
                selected = Some(listing.id);
            }
        }
    });

    selected
}
