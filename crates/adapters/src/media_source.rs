//! Image byte acquisition for the upload handshake

use post_courier_domain::{ImageRef, MediaError};
use reqwest::Client;

/// Acquire the raw bytes behind an image reference.
///
/// Remote URLs are fetched over HTTP; local paths are read from disk. Either
/// failure is terminal for the current post.
pub async fn fetch_image_bytes(client: &Client, image: &ImageRef) -> Result<Vec<u8>, MediaError> {
    match image {
        ImageRef::Url(url) => {
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| MediaError::Network(e.to_string()))?;

            if !response.status().is_success() {
                return Err(MediaError::Source(format!(
                    "Failed to download image from {}: {}",
                    url,
                    response.status()
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| MediaError::Network(e.to_string()))?;

            Ok(bytes.to_vec())
        }
        ImageRef::File(path) => tokio::fs::read(path).await.map_err(|e| {
            MediaError::Source(format!("Failed to read {}: {}", path.display(), e))
        }),
    }
}
