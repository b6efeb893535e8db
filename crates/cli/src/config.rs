//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub linkedin: LinkedInConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_queue_path")]
    pub queue_path: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedInConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_access_token_env")]
    pub access_token_env: String,

    #[serde(default = "default_person_urn_env")]
    pub person_urn_env: String,
}

// Default value functions
fn default_queue_path() -> PathBuf {
    PathBuf::from("./posts.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    post_courier_adapters::linkedin::DEFAULT_BASE_URL.to_string()
}

fn default_access_token_env() -> String {
    "LINKEDIN_ACCESS_TOKEN".to_string()
}

fn default_person_urn_env() -> String {
    "LINKEDIN_PERSON_URN".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            queue_path: default_queue_path(),
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl Default for LinkedInConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token_env: default_access_token_env(),
            person_urn_env: default_person_urn_env(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("POST_COURIER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# post-courier configuration

[general]
queue_path = "./posts.json"
log_level = "info"
dry_run = false

[linkedin]
base_url = "https://api.linkedin.com"
# Names of the environment variables holding the secrets, not the
# secrets themselves
access_token_env = "LINKEDIN_ACCESS_TOKEN"
person_urn_env = "LINKEDIN_PERSON_URN"
"#
        .to_string()
    }
}
