//! UI-side image state tracking and texture upload.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui::{ColorImage, Context, TextureHandle, TextureOptions};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use super::loader::{DecodedImage, ImageRequest, ImageResult};

/// Per-path load state. `Failed` is terminal: the screens render a
/// placeholder and no retry is ever issued.
pub enum ImageLoadState {
    Loading,
    Loaded(TextureHandle),
    Failed,
}

/// Tracks one [`ImageLoadState`] per requested image path and turns
/// decoded pixels into egui textures as results arrive.
///
/// Requests are fire-and-forget: `request` queues a path once and all
/// later calls for the same path are no-ops regardless of outcome.
pub struct ImageStore {
    request_tx: mpsc::Sender<ImageRequest>,
    result_rx: mpsc::Receiver<ImageResult>,
    states: HashMap<PathBuf, ImageLoadState>,
}

impl ImageStore {
    pub fn new(
        request_tx: mpsc::Sender<ImageRequest>,
        result_rx: mpsc::Receiver<ImageResult>,
    ) -> Self {
        Self {
            request_tx,
            result_rx,
            states: HashMap::new(),
        }
    }

    /// Queues a load for `path` unless it is already tracked.
    pub fn request(&mut self, path: &Path) {
        if self.states.contains_key(path) {
            return;
        }

        let request = ImageRequest {
            path: path.to_path_buf(),
        };
        match self.request_tx.try_send(request) {
            Ok(()) => {
                self.states.insert(path.to_path_buf(), ImageLoadState::Loading);
            }
            Err(TrySendError::Full(_)) => {
                // Queue is saturated; leave the path untracked so the
                // next frame queues it again.
                warn!("Image request queue full, deferring {:?}", path);
            }
            Err(TrySendError::Closed(_)) => {
                warn!("Image loader gone, marking {:?} as failed", path);
                self.states.insert(path.to_path_buf(), ImageLoadState::Failed);
            }
        }
    }

    /// Drains the result channel and uploads finished textures. Called
    /// once per frame from the UI update loop.
    pub fn ingest(&mut self, ctx: &Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result.outcome {
                Ok(decoded) => self.store_texture(ctx, result.path, decoded),
                Err(_) => self.mark_failed(result.path),
            }
        }
    }

    pub fn state(&self, path: &Path) -> Option<&ImageLoadState> {
        self.states.get(path)
    }

    /// Texture for `path` if the load has finished successfully.
    pub fn texture(&self, path: &Path) -> Option<&TextureHandle> {
        match self.states.get(path) {
            Some(ImageLoadState::Loaded(texture)) => Some(texture),
            _ => None,
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.states
            .values()
            .filter(|state| matches!(state, ImageLoadState::Loaded(_)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.states
            .values()
            .filter(|state| matches!(state, ImageLoadState::Failed))
            .count()
    }

    fn store_texture(&mut self, ctx: &Context, path: PathBuf, decoded: DecodedImage) {
        let image = ColorImage::from_rgba_unmultiplied(decoded.size, &decoded.rgba);
        let name = path.display().to_string();
        let texture = ctx.load_texture(name, image, TextureOptions::LINEAR);
        debug!("Uploaded texture for {:?}", path);
        self.states.insert(path, ImageLoadState::Loaded(texture));
    }

    fn mark_failed(&mut self, path: PathBuf) {
        match self.states.get(&path) {
            // loading -> failed, terminal
            Some(ImageLoadState::Loading) | None => {
                self.states.insert(path, ImageLoadState::Failed);
            }
            // A finished texture is never demoted by a stale result.
            Some(ImageLoadState::Loaded(_)) | Some(ImageLoadState::Failed) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_queues(capacity: usize) -> (ImageStore, mpsc::Receiver<ImageRequest>) {
        let (request_tx, request_rx) = mpsc::channel(capacity);
        let (_result_tx, result_rx) = mpsc::channel(4);
        (ImageStore::new(request_tx, result_rx), request_rx)
    }

    #[test]
    fn request_queues_each_path_once() {
        let (mut store, mut request_rx) = store_with_queues(4);
        let path = Path::new("listings/bike_front.jpg");

        store.request(path);
        store.request(path);

        assert!(matches!(store.state(path), Some(ImageLoadState::Loading)));
        assert!(request_rx.try_recv().is_ok());
        assert!(request_rx.try_recv().is_err());
    }

    #[test]
    fn failed_loads_are_terminal_and_never_requeued() {
        let (mut store, mut request_rx) = store_with_queues(4);
        let path = Path::new("listings/broken.jpg");

        store.request(path);
        let _ = request_rx.try_recv();
        store.mark_failed(path.to_path_buf());

        assert!(matches!(store.state(path), Some(ImageLoadState::Failed)));
        assert_eq!(store.failed_count(), 1);

        // No retry: a later request for the same path is a no-op.
        store.request(path);
        assert!(request_rx.try_recv().is_err());
        assert!(matches!(store.state(path), Some(ImageLoadState::Failed)));
    }

    #[test]
    fn full_queue_leaves_path_untracked_for_the_next_frame() {
        let (mut store, _request_rx) = store_with_queues(1);
        store.request(Path::new("listings/a.jpg"));
        store.request(Path::new("listings/b.jpg"));

        assert!(store.state(Path::new("listings/a.jpg")).is_some());
        assert!(store.state(Path::new("listings/b.jpg")).is_none());
    }

    #[test]
    fn closed_loader_marks_requests_failed() {
        let (request_tx, request_rx) = mpsc::channel(4);
        let (_result_tx, result_rx) = mpsc::channel(4);
        drop(request_rx);
        let mut store = ImageStore::new(request_tx, result_rx);

        store.request(Path::new("listings/a.jpg"));
        assert!(matches!(
            store.state(Path::new("listings/a.jpg")),
            Some(ImageLoadState::Failed)
        ));
    }
}
