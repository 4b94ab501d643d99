//! Application configuration.
//!
//! Loaded once at startup from a toml file under the user config
//! directory. Missing or malformed files degrade to defaults so the
//! application always starts.

use color_eyre::eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct AppConfig {
    /// Initial window size in points.
    pub window_width: f32,
    pub window_height: f32,
    pub fullscreen: bool,
    /// Repaint interval for the UI loop in milliseconds.
    pub frame_interval_ms: u64,
    /// Directory the listing image paths are resolved against.
    pub assets_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 480.0,
            window_height: 860.0,
            fullscreen: false,
            frame_interval_ms: 33,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl AppConfig {
    fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| eyre!("No config directory available"))?;
        Ok(base.join("openmarket").join("config.toml"))
    }

    /// Writes the default configuration file if none exists yet.
    pub fn ensure_default_config() -> Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(&AppConfig::default())?;
        fs::write(&path, serialized)?;
        info!("Wrote default config to {:?}", path);
        Ok(())
    }

    /// Loads the configuration, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(error) => {
                warn!("No config path: {}, using defaults", error);
                return Self::default();
            }
        };

        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(error) => {
                    warn!("Malformed config {:?}: {}, using defaults", path, error);
                    Self::default()
                }
            },
            Err(error) => {
                warn!("Could not read config {:?}: {}, using defaults", path, error);
                Self::default()
            }
        }
    }

    /// Resolves a listing image path against the assets directory.
    pub fn resolve_image(&self, relative: &str) -> PathBuf {
        self.assets_dir.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrips_through_toml() {
        let serialized = toml::to_string_pretty(&AppConfig::default()).expect("serialize");
        let config: AppConfig = toml::from_str(&serialized).expect("deserialize");
        assert_eq!(config.frame_interval_ms, 33);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn image_paths_resolve_under_the_assets_dir() {
        let config = AppConfig::default();
        assert_eq!(
            config.resolve_image("listings/bike_front.jpg"),
            PathBuf::from("assets/listings/bike_front.jpg")
        );
    }
}
