//! Home screen: VIP carousel above the listing feed.

use eframe::egui::{vec2, RichText, ScrollArea, TextEdit, Ui};
use tracing::debug;

use super::cards;
use super::common::{create_frame, UiColors};
use crate::catalog::{Catalog, ListingId};
use crate::config::AppConfig;
use crate::images::ImageStore;
use crate::store::FavoritesPortal;

pub struct HomeData {
    filter: String,
}

impl HomeData {
    pub fn new() -> Self {
        Self {
            filter: String::new(),
        }
    }

    /// Renders the home screen. Returns the listing the user tapped, if
    /// any, for the root UI to navigate to.
    pub fn render(
        &mut self,
        ui: &mut Ui,
        catalog: &Catalog,
        images: &mut ImageStore,
        config: &AppConfig,
        favorites: &FavoritesPortal,
    ) -> Option<ListingId> {
        let mut selected = None;

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Openmarket");
                ui.add(
                    TextEdit::singleline(&mut self.filter)
                        .hint_text("Search listings")
                        .desired_width(ui.available_width() - 8.0),
                );
            });

            // VIP carousel: horizontally scrolling rail of featured cards
            ui.label(RichText::new("VIP").color(UiColors::VIP_BADGE).strong());
            ScrollArea::horizontal()
                .id_salt("vip_rail")
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for listing in catalog.vip() {
                            let response =
                                cards::rail_card(ui, listing, images, config, vec2(150.0, 150.0));
                            if response.clicked() {
                                debug!("Opening VIP listing {}", listing.id);
                                selected = Some(listing.id);
                            }
                        }
                    });
                });

            ui.add_space(4.0);
            ui.separator();

            // Regular feed, filtered by the search field
            let needle = self.filter.to_lowercase();
            create_frame(UiColors::MAIN_BG, UiColors::BORDER).show(ui, |ui| {
                ui.set_min_width(ui.available_width() - 8.0);
                ScrollArea::vertical().id_salt("feed").show(ui, |ui| {
                    let mut shown = 0;
                    for listing in catalog.feed() {
                        if !needle.is_empty() && !listing.title.to_lowercase().contains(&needle) {
                            continue;
                        }
                        shown += 1;
                        let favorited = favorites.is_favorite(listing.id);
                        let response = cards::feed_card(ui, listing, images, config, favorited);
                        if response.clicked() {
                            debug!("Opening listing {}", listing.id);
                            selected = Some(listing.id);
                        }
                    }

                    if shown == 0 {
                        ui.label(
                            RichText::new("No listings match your search")
                                .color(UiColors::MUTED),
                        );
                    }
                });
            });
        });

        selected
    }
}
