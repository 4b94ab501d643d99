//! Decoding worker.

use image::ImageReader;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Request to load one image file.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub path: PathBuf,
}

/// RGBA pixels ready for texture upload.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },
}

/// Outcome of one load request, keyed by the requested path.
#[derive(Debug)]
pub struct ImageResult {
    pub path: PathBuf,
    pub outcome: Result<DecodedImage, ImageLoadError>,
}

/// Spawns the loader worker. Requests arrive over `request_rx`, results
/// go back over `result_tx`; the task ends when either channel closes.
pub fn spawn_loader(
    mut request_rx: mpsc::Receiver<ImageRequest>,
    result_tx: mpsc::Sender<ImageResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            debug!("Loading image {:?}", request.path);
            let outcome = decode(&request.path);
            if let Err(error) = &outcome {
                warn!("Image load failed: {}", error);
            }
            let result = ImageResult {
                path: request.path,
                outcome,
            };
            if result_tx.send(result).await.is_err() {
                debug!("Image result channel closed, stopping loader");
                break;
            }
        }
    })
}

fn decode(path: &PathBuf) -> Result<DecodedImage, ImageLoadError> {
    let reader = ImageReader::open(path).map_err(|source| ImageLoadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let decoded = reader.decode().map_err(|source| ImageLoadError::Decode {
        path: path.display().to_string(),
        source,
    })?;

    let rgba = decoded.to_rgba8();
    Ok(DecodedImage {
        size: [rgba.width() as usize, rgba.height() as usize],
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    #[test]
    fn decode_reports_missing_files_as_open_errors() {
        let result = decode(&PathBuf::from("does/not/exist.jpg"));
        assert!(matches!(result, Err(ImageLoadError::Open { .. })));
    }

    #[test]
    fn decode_reports_garbage_as_decode_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").expect("write");
        let result = decode(&path);
        assert!(matches!(result, Err(ImageLoadError::Decode { .. })));
    }

    #[test]
    fn decode_returns_rgba_pixels_with_dimensions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pixel.png");
        let buffer = ImageBuffer::from_pixel(4, 2, Rgb([200u8, 10u8, 10u8]));
        buffer.save(&path).expect("save test image");

        let decoded = decode(&path).expect("decode");
        assert_eq!(decoded.size, [4, 2]);
        assert_eq!(decoded.rgba.len(), 4 * 2 * 4);
    }

    #[tokio::test]
    async fn loader_answers_requests_and_stops_when_input_closes() {
        let (request_tx, request_rx) = mpsc::channel(4);
        let (result_tx, mut result_rx) = mpsc::channel(4);
        let handle = spawn_loader(request_rx, result_tx);

        let path = PathBuf::from("does/not/exist.jpg");
        request_tx
            .send(ImageRequest { path: path.clone() })
            .await
            .expect("send request");

        let result = result_rx.recv().await.expect("result");
        assert_eq!(result.path, path);
        assert!(result.outcome.is_err());

        drop(request_tx);
        handle.await.expect("worker exit");
    }
}
