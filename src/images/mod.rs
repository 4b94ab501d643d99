//! # Image Loading
//!
//! Fire-and-forget image loading for listing photos. A tokio worker
//! decodes requested files off the UI thread and reports back over an
//! mpsc channel; the UI-side [`store::ImageStore`] tracks one
//! loading/loaded/failed state per image path. A failed load is
//! terminal, the screens substitute a placeholder and never retry.

pub mod loader;
pub mod store;

pub use loader::{spawn_loader, DecodedImage, ImageLoadError, ImageRequest, ImageResult};
pub use store::{ImageLoadState, ImageStore};
