//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// post-courier: publish date-scheduled posts to LinkedIn
#[derive(Parser, Debug)]
#[command(name = "post-courier")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select today's queue entry and publish it
    Run(RunArgs),

    /// Print today's scheduled content and image reference
    Today(TodayArgs),

    /// Publish text with an optional image, bypassing the queue
    Publish(PublishArgs),

    /// Fetch the raw status of a published post
    Status(StatusArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Validate configuration and show status
    Doctor(DoctorArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Run in dry-run mode (no upload, no publishing)
    #[arg(long)]
    pub dry_run: bool,

    /// Target date override (e.g. 2024-01-01); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Queue file override
    #[arg(long)]
    pub queue: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TodayArgs {
    /// Target date override (e.g. 2024-01-01); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Queue file override
    #[arg(long)]
    pub queue: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Post text
    #[arg(long)]
    pub text: Option<String>,

    /// Image to attach (local path or URL)
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Post URN (e.g. urn:li:share:7388963697706094592)
    pub post_urn: String,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./config.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
