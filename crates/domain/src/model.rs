//! Domain models and value objects

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A scheduled post entry from the flat queue file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledPost {
    /// ISO calendar date the post should go out on (e.g. "2024-01-01")
    pub date: String,
    /// Post text content
    #[serde(default)]
    pub content: String,
    /// Optional image reference: remote URL or local file path
    #[serde(default)]
    pub image: Option<String>,
}

/// Parsed form of a post's image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Remote image fetched over HTTP
    Url(String),
    /// Image file on the local filesystem
    File(PathBuf),
}

impl ImageRef {
    /// Parse a raw image reference string from the queue
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            ImageRef::Url(raw.to_string())
        } else {
            ImageRef::File(PathBuf::from(raw))
        }
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageRef::Url(url) => write!(f, "{}", url),
            ImageRef::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Opaque platform-assigned identifier for uploaded media.
///
/// Valid only for the create-post call in the same invocation; the signed
/// upload URL behind it has already been consumed. Never cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrn(pub String);

impl AssetUrn {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetUrn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a successful create-post call
#[derive(Debug, Clone)]
pub struct PublishReceipt {
    /// Platform-assigned post URN, when the response carried one
    pub post_urn: Option<String>,
    /// Raw response status surfaced to the operator
    pub status: u16,
}

/// Outcome of one scheduled run
#[derive(Debug)]
pub enum RunOutcome {
    /// A post matched today's date and was accepted by the platform
    Published {
        date: String,
        receipt: PublishReceipt,
    },
    /// No queue entry matched today's date; a normal, silent success
    NothingScheduled,
    /// A matching entry was found but nothing was submitted
    Skipped { date: String, reason: String },
}
