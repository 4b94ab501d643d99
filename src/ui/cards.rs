//! Listing card widgets shared by the feed, the VIP carousel and the
//! similar-listings rail.

use eframe::egui::{
    self, vec2, Align2, Color32, FontId, Rect, Response, RichText, Sense, Stroke, Ui, Vec2,
};

use super::common::UiColors;
use crate::catalog::Listing;
use crate::config::AppConfig;
use crate::images::{ImageLoadState, ImageStore};

/// Draws the first image of a listing into `rect`, requesting the load
/// on first sight and substituting a placeholder while it is loading or
/// after a terminal failure.
pub fn thumbnail(ui: &mut Ui, rect: Rect, listing: &Listing, images: &mut ImageStore, config: &AppConfig) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2, UiColors::INNER_BG);

    let Some(first) = listing.images.first() else {
        return;
    };
    let path = config.resolve_image(first);
    images.request(&path);

    match images.state(&path) {
        Some(ImageLoadState::Loaded(_)) => {
            if let Some(texture) = images.texture(&path) {
                painter.image(
                    texture.id(),
                    rect,
                    Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
        }
        Some(ImageLoadState::Failed) => {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "✕",
                FontId::proportional(18.0),
                UiColors::MUTED,
            );
        }
        Some(ImageLoadState::Loading) | None => {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "…",
                FontId::proportional(18.0),
                UiColors::MUTED,
            );
        }
    }
}

fn vip_badge(ui: &Ui, anchor: Rect) {
    let badge = Rect::from_min_size(anchor.min + vec2(4.0, 4.0), vec2(30.0, 16.0));
    let painter = ui.painter();
    painter.rect_filled(badge, 2, UiColors::VIP_BADGE);
    painter.text(
        badge.center(),
        Align2::CENTER_CENTER,
        "VIP",
        FontId::proportional(11.0),
        Color32::BLACK,
    );
}

/// Horizontal feed card: thumbnail on the left, text block on the right.
/// The whole card is one click target.
pub fn feed_card(
    ui: &mut Ui,
    listing: &Listing,
    images: &mut ImageStore,
    config: &AppConfig,
    favorited: bool,
) -> Response {
    let width = ui.available_width() - 8.0;
    let inner = egui::Frame::new()
        .stroke(Stroke::new(1.0, UiColors::BORDER))
        .fill(UiColors::EXTREME_BG)
        .inner_margin(6)
        .outer_margin(2)
        .show(ui, |ui| {
            ui.set_min_width(width);
            ui.horizontal(|ui| {
                let (thumb_rect, _) =
                    ui.allocate_exact_size(vec2(96.0, 72.0), Sense::hover());
                thumbnail(ui, thumb_rect, listing, images, config);
                if listing.vip {
                    vip_badge(ui, thumb_rect);
                }

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&listing.title).strong());
                        if favorited {
                            ui.label(RichText::new("♥").color(UiColors::FAVORITE));
                        }
                    });
                    ui.label(
                        RichText::new(listing.price.to_string())
                            .color(UiColors::PRICE)
                            .size(16.0),
                    );
                    ui.label(
                        RichText::new(format!(
                            "{} · {}",
                            listing.location,
                            listing.posted_ago()
                        ))
                        .color(UiColors::MUTED)
                        .size(11.0),
                    );
                });
            });
        });

    inner.response.interact(Sense::click())
}

/// Compact vertical card for the horizontal rails (VIP carousel and
/// similar listings).
pub fn rail_card(
    ui: &mut Ui,
    listing: &Listing,
    images: &mut ImageStore,
    config: &AppConfig,
    size: Vec2,
) -> Response {
    let inner = egui::Frame::new()
        .stroke(Stroke::new(1.0, UiColors::BORDER))
        .fill(UiColors::EXTREME_BG)
        .inner_margin(4)
        .outer_margin(2)
        .show(ui, |ui| {
            ui.set_min_size(size);
            ui.set_max_width(size.x);
            ui.vertical(|ui| {
                let (thumb_rect, _) =
                    ui.allocate_exact_size(vec2(size.x - 4.0, size.y * 0.6), Sense::hover());
                thumbnail(ui, thumb_rect, listing, images, config);
                if listing.vip {
                    vip_badge(ui, thumb_rect);
                }
                ui.label(RichText::new(&listing.title).strong().size(12.0));
                ui.label(
                    RichText::new(listing.price.to_string())
                        .color(UiColors::PRICE)
                        .size(13.0),
                );
            });
        });

    inner.response.interact(Sense::click())
}
