//! # Openmarket User Interface
//!
//! Root of the egui screen hierarchy. The UI owns the navigation state
//! machine ([`common::Screen`]), the mock catalog, the image store fed
//! by the loader worker, and the shared favorites portal, and renders a
//! consistent three-panel layout: navigation on top, the active screen
//! in the center, status at the bottom.
//!
//! All state the screens mutate is either local to one screen (the
//! carousel index) or behind the favorites portal, so the frame loop
//! stays single-threaded: channel results are drained with `try_recv`
//! at the start of each frame and no rendering path ever blocks.

pub mod cards;
pub mod common;
pub mod detail_screen;
pub mod favorites_screen;
pub mod home_screen;

use eframe::egui::{self, Button, Vec2};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::images::{ImageRequest, ImageResult, ImageStore};
use crate::store::FavoritesPortal;

use self::common::Screen;
use self::detail_screen::{DetailData, DetailNav};
use self::home_screen::HomeData;

pub struct OpenmarketUI {
    /// Current active screen for the navigation state machine
    screen: Screen,

    /// Static listing dataset
    catalog: Catalog,

    /// Per-path image load states and textures
    images: ImageStore,

    /// Shared favorites set
    favorites: FavoritesPortal,

    /// Home screen state (search filter)
    home_data: HomeData,

    /// Detail screen state, present while a listing is open
    detail_data: Option<DetailData>,

    config: AppConfig,
}

impl OpenmarketUI {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        request_tx: mpsc::Sender<ImageRequest>,
        result_rx: mpsc::Receiver<ImageResult>,
        favorites: FavoritesPortal,
        config: AppConfig,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        OpenmarketUI {
            screen: Screen::Home,
            catalog: Catalog::mock(),
            images: ImageStore::new(request_tx, result_rx),
            favorites,
            home_data: HomeData::new(),
            detail_data: None,
            config,
        }
    }

    fn open_listing(&mut self, id: crate::catalog::ListingId) {
        if let Some(listing) = self.catalog.get(id) {
            self.detail_data = Some(DetailData::new(listing));
            self.screen = Screen::Detail;
        }
    }
}

impl eframe::App for OpenmarketUI {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Finished image loads are picked up once per frame.
        self.images.ingest(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.ctx()
                .request_repaint_after(Duration::from_millis(self.config.frame_interval_ms));
            let width = ui.available_width() - 60.0;

            // Top navigation panel
            egui::TopBottomPanel::top("top_panel")
                .show_separator_line(false)
                .show_inside(ui, |ui| {
                    ui.horizontal_centered(|ui| {
                        let home_button = Button::new("Home").min_size(Vec2 {
                            x: width / 2.0,
                            y: 20.0,
                        });
                        let favorites_button = Button::new("Favorites").min_size(Vec2 {
                            x: width / 2.0,
                            y: 20.0,
                        });

                        if ui.add(home_button).clicked() {
                            self.screen = Screen::Home;
                        };
                        if ui.add(favorites_button).clicked() {
                            self.screen = Screen::Favorites;
                        };
                    });
                });

            // Central panel with the active screen
            egui::CentralPanel::default().show_inside(ui, |ui| {
                let selected = match self.screen {
                    Screen::Home => self.home_data.render(
                        ui,
                        &self.catalog,
                        &mut self.images,
                        &self.config,
                        &self.favorites,
                    ),
                    Screen::Favorites => favorites_screen::render(
                        ui,
                        &self.catalog,
                        &mut self.images,
                        &self.config,
                        &self.favorites,
                    ),
                    Screen::Detail => {
                        let nav = match &mut self.detail_data {
                            Some(detail) => detail.render(
                                ui,
                                &self.catalog,
                                &mut self.images,
                                &self.config,
                                &self.favorites,
                            ),
                            // No listing open; fall back to the feed.
                            None => Some(DetailNav::Back),
                        };
                        match nav {
                            Some(DetailNav::Back) => {
                                debug!("Leaving detail screen");
                                self.detail_data = None;
                                self.screen = Screen::Home;
                                None
                            }
                            Some(DetailNav::Open(id)) => Some(id),
                            None => None,
                        }
                    }
                };

                if let Some(id) = selected {
                    self.open_listing(id);
                }
            });

            // Bottom status panel
            egui::TopBottomPanel::bottom("bottom_panel")
                .show_separator_line(false)
                .show_inside(ui, |ui| {
                    ui.horizontal_centered(|ui| {
                        ui.label(format!("{} listings", self.catalog.len()));
                        ui.label(format!("♥ {}", self.favorites.count()));
                        ui.label(format!(
                            "images: {} loaded / {} failed",
                            self.images.loaded_count(),
                            self.images.failed_count()
                        ));
                    });
                });
        });
    }
}
