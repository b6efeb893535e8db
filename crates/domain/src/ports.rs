//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external systems.
//! Adapters implement these traits to connect to real infrastructure.

use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;

use crate::model::{AssetUrn, ImageRef, PublishReceipt, ScheduledPost};

/// Error type for queue store operations.
///
/// A missing or unreadable store is a distinct outcome from "nothing
/// scheduled today"; callers must not conflate the two.
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("Queue file not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error in {file}: {message}")]
    Parse { file: String, message: String },
}

/// Port for reading the flat store of scheduled posts
#[async_trait]
pub trait PostQueue: Send + Sync {
    /// Load all queued posts, in file order
    async fn load(&self) -> Result<Vec<ScheduledPost>, QueueError>;
}

/// Error type for the media-upload handshake, one variant per step
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Upload registration rejected: {status} {body}")]
    Registration { status: u16, body: String },
    #[error("Image source unavailable: {0}")]
    Source(String),
    #[error("Binary upload failed: {status} {body}")]
    Upload { status: u16, body: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Uploader is disabled")]
    Disabled,
}

/// Port for converting an image reference into a platform media asset
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Run the register -> acquire -> upload handshake for one image.
    ///
    /// The returned asset is only valid for the create-post call in the
    /// same invocation.
    async fn upload_image(&self, image: &ImageRef) -> Result<AssetUrn, MediaError>;
}

/// Error type for publisher operations
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("API error: {status} {body}")]
    Api { status: u16, body: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Publisher is disabled")]
    Disabled,
}

/// Port for submitting the create-post call
#[async_trait]
pub trait PostPublisher: Send + Sync {
    /// Publish a post with optional attached media, returns the receipt
    async fn publish(
        &self,
        text: &str,
        asset: Option<&AssetUrn>,
    ) -> Result<PublishReceipt, PublishError>;
}

/// Port for time/clock operations (enables deterministic testing)
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> OffsetDateTime;
}

/// Real clock implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
