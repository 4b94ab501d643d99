//! Listing detail screen: swipeable image carousel, listing info block,
//! favorite toggle and the similar-listings rail.

use eframe::egui::{
    self, vec2, Align2, Button, Color32, FontId, Rect, RichText, ScrollArea, Sense, Ui,
};
use tracing::debug;

use super::cards;
use super::common::UiColors;
use crate::carousel::CarouselState;
use crate::catalog::{Catalog, Listing, ListingId};
use crate::config::AppConfig;
use crate::images::{ImageLoadState, ImageStore};
use crate::store::{FavoritesPortal, StoreAction};

/// Navigation request emitted by the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailNav {
    Back,
    /// Tapped a card in the similar-listings rail.
    Open(ListingId),
}

/// Per-listing state of the detail screen. Rebuilt whenever a different
/// listing is opened, so the carousel index always starts at the first
/// image of the new image set.
pub struct DetailData {
    listing_id: ListingId,
    carousel: CarouselState,
}

impl DetailData {
    pub fn new(listing: &Listing) -> Self {
        Self {
            listing_id: listing.id,
            carousel: CarouselState::new(listing.images.len().max(1)),
        }
    }

    pub fn render(
        &mut self,
        ui: &mut Ui,
        catalog: &Catalog,
        images: &mut ImageStore,
        config: &AppConfig,
        favorites: &FavoritesPortal,
    ) -> Option<DetailNav> {
        let Some(listing) = catalog.get(self.listing_id) else {
            // Listing vanished from the catalog; nothing to show.
            return Some(DetailNav::Back);
        };
        let listing = listing.clone();

        let mut nav = None;

        ui.horizontal(|ui| {
            if ui.button("⬅ Back").clicked() {
                nav = Some(DetailNav::Back);
            }
            ui.heading(&listing.title);
        });

        ScrollArea::vertical().id_salt("detail").show(ui, |ui| {
            self.image_carousel(ui, &listing, images, config);
            self.marker_row(ui);

            ui.add_space(4.0);
            self.info_block(ui, &listing, favorites);

            ui.add_space(8.0);
            ui.separator();
            ui.label(RichText::new("Similar listings").strong());
            ScrollArea::horizontal()
                .id_salt("similar_rail")
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for similar in catalog.similar_to(listing.id) {
                            let response = cards::rail_card(
                                ui,
                                similar,
                                images,
                                config,
                                vec2(140.0, 140.0),
                            );
                            if response.clicked() {
                                debug!("Opening similar listing {}", similar.id);
                                nav = Some(DetailNav::Open(similar.id));
                            }
                        }
                    });
                });
        });

        nav
    }

    /// The swipeable image area. Drag deltas accumulate into the
    /// carousel state each frame; the paging decision falls on release,
    /// from net displacement and pointer velocity.
    fn image_carousel(
        &mut self,
        ui: &mut Ui,
        listing: &Listing,
        images: &mut ImageStore,
        config: &AppConfig,
    ) {
        let size = vec2(ui.available_width() - 8.0, 300.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        if response.dragged() {
            self.carousel.drag_by(response.drag_delta().x);
        }
        if response.drag_stopped() {
            // egui reports pointer velocity in points per second; the
            // decision thresholds are in points per millisecond.
            let vx = ui.ctx().input(|i| i.pointer.velocity()).x / 1000.0;
            self.carousel.release(vx);
        }

        // Queue every image of the set so neighbors are ready before
        // the user swipes to them.
        for image in &listing.images {
            images.request(&config.resolve_image(image));
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 2, UiColors::EXTREME_BG);

        let path = listing
            .images
            .get(self.carousel.index())
            .map(|image| config.resolve_image(image));
        match path.as_deref().and_then(|path| images.state(path)) {
            Some(ImageLoadState::Loaded(texture)) => {
                let texture_size = texture.size_vec2();
                let scale = (rect.width() / texture_size.x).min(rect.height() / texture_size.y);
                let drag_shift = self.carousel.drag_offset().clamp(-60.0, 60.0);
                let image_rect = Rect::from_center_size(
                    rect.center() + vec2(drag_shift, 0.0),
                    texture_size * scale,
                );
                painter.image(
                    texture.id(),
                    image_rect,
                    Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
            Some(ImageLoadState::Failed) => {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "Image unavailable",
                    FontId::proportional(16.0),
                    UiColors::MUTED,
                );
            }
            Some(ImageLoadState::Loading) | None => {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "Loading …",
                    FontId::proportional(16.0),
                    UiColors::MUTED,
                );
            }
        }

        // Arrow overlays, wrapping like the gestures do
        if self.carousel.count() > 1 {
            let arrow_size = vec2(28.0, 28.0);
            let left_rect = Rect::from_center_size(
                egui::pos2(rect.left() + 20.0, rect.center().y),
                arrow_size,
            );
            let right_rect = Rect::from_center_size(
                egui::pos2(rect.right() - 20.0, rect.center().y),
                arrow_size,
            );
            if ui.put(left_rect, Button::new("◀")).clicked() {
                self.carousel.retreat();
            }
            if ui.put(right_rect, Button::new("▶")).clicked() {
                self.carousel.advance();
            }
        }
    }

    /// One tappable pagination dot per image; tapping marker `k` jumps
    /// to image `k` unconditionally.
    fn marker_row(&mut self, ui: &mut Ui) {
        let count = self.carousel.count();
        if count <= 1 {
            return;
        }

        let spacing = 16.0;
        let (row_rect, _) =
            ui.allocate_exact_size(vec2(ui.available_width() - 8.0, 18.0), Sense::hover());
        let total = spacing * count as f32;
        let start_x = row_rect.center().x - total / 2.0 + spacing / 2.0;

        for k in 0..count {
            let center = egui::pos2(start_x + k as f32 * spacing, row_rect.center().y);
            let dot_rect = Rect::from_center_size(center, vec2(14.0, 14.0));
            let response = ui.interact(
                dot_rect,
                ui.id().with(("carousel_marker", k)),
                Sense::click(),
            );

            let (radius, color) = if k == self.carousel.index() {
                (5.0, UiColors::MARKER_ACTIVE)
            } else {
                (3.5, UiColors::MARKER_INACTIVE)
            };
            ui.painter().circle_filled(center, radius, color);

            if response.clicked() {
                self.carousel.select(k);
            }
        }
    }

    fn info_block(&mut self, ui: &mut Ui, listing: &Listing, favorites: &FavoritesPortal) {
        egui::Frame::new()
            .stroke(egui::Stroke::new(1.0, UiColors::BORDER))
            .fill(UiColors::MAIN_BG)
            .inner_margin(8)
            .outer_margin(2)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(listing.price.to_string())
                            .color(UiColors::PRICE)
                            .size(22.0)
                            .strong(),
                    );
                    if listing.vip {
                        ui.label(RichText::new("VIP").color(UiColors::VIP_BADGE).strong());
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let favorited = favorites.is_favorite(listing.id);
                        let heart = if favorited { "♥ Saved" } else { "♡ Save" };
                        let heart_button = Button::new(
                            RichText::new(heart).color(UiColors::FAVORITE),
                        );
                        if ui.add(heart_button).clicked() {
                            favorites.execute_store_action(StoreAction::Toggle(listing.id));
                        }
                    });
                });

                ui.label(
                    RichText::new(format!(
                        "{} · {} · {}",
                        listing.location,
                        listing.category,
                        listing.posted_ago()
                    ))
                    .color(UiColors::MUTED),
                );
                ui.label(
                    RichText::new(format!("Seller: {}", listing.seller)).color(UiColors::MUTED),
                );

                ui.separator();
                ui.label(&listing.description);
            });
    }
}
