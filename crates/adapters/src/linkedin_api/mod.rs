//! LinkedIn REST API adapters

mod post;
mod upload;

pub use post::LinkedInPostPublisher;
pub use upload::LinkedInMediaUploader;

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.linkedin.com";

/// Restli protocol header value required by the v2 endpoints
pub(crate) const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";

/// Pinned platform API version header
pub(crate) const LINKEDIN_VERSION: &str = "202309";
