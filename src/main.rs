pub mod carousel;
pub mod catalog;
pub mod config;
pub mod images;
pub mod store;
pub mod ui;

use crate::config::AppConfig;
use crate::images::spawn_loader;
use crate::store::FavoritesPortal;
use crate::ui::OpenmarketUI;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use eframe::egui;
use tokio::sync::mpsc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    setup()?;

    if let Err(error) = AppConfig::ensure_default_config() {
        // Not fatal, the defaults cover everything.
        tracing::warn!("Could not write default config: {}", error);
    }
    let app_config = AppConfig::load();
    info!("Starting openmarket with config: {:?}", app_config);

    // Channels between the image loader worker and the UI
    let (request_tx, request_rx) = mpsc::channel(100);
    let (result_tx, result_rx) = mpsc::channel(100);
    let _loader_handle = spawn_loader(request_rx, result_tx);

    let favorites = FavoritesPortal::new();

    info!("Starting UI");
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = if app_config.fullscreen {
        egui::ViewportBuilder::default().with_fullscreen(true)
    } else {
        egui::ViewportBuilder::default()
            .with_inner_size([app_config.window_width, app_config.window_height])
    };

    eframe::run_native(
        "Openmarket",
        native_options,
        Box::new(|cc| {
            Ok(Box::new(OpenmarketUI::new(
                cc,
                request_tx,
                result_rx,
                favorites,
                app_config,
            )))
        }),
    )
    .map_err(|e| eyre!("Failed to start UI: {}", e))?;

    Ok(())
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}
