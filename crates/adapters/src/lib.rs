//! post-courier adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `queue`: Flat JSON file post queue
//! - `media_source`: Image byte acquisition (remote URL or local file)
//! - `linkedin`: LinkedIn API adapters (media upload, UGC posts)

mod queue_fs;

pub mod linkedin_api;
pub mod media_source;

/// Re-exports for queue adapters
pub mod queue {
    pub use crate::queue_fs::FsPostQueue;
}

/// Re-exports for LinkedIn API adapters
pub mod linkedin {
    pub use crate::linkedin_api::{DEFAULT_BASE_URL, LinkedInMediaUploader, LinkedInPostPublisher};
}
