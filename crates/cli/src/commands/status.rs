//! Status command - fetch the raw state of a published post

use anyhow::{Context, Result};
use post_courier_adapters::linkedin::LinkedInPostPublisher;
use std::path::PathBuf;

use crate::args::StatusArgs;
use crate::commands::publish::{load_access_token, load_person_urn};
use crate::config::AppConfig;

pub async fn execute(args: StatusArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref()).unwrap_or_default();

    let access_token = load_access_token(&config)?;
    let person_urn = load_person_urn(&config)?;

    let publisher = LinkedInPostPublisher::with_base_url(
        access_token,
        person_urn,
        config.linkedin.base_url.clone(),
        true,
    );

    tracing::info!(post_urn = %args.post_urn, "Querying post status");

    let (status, body) = publisher
        .post_status(&args.post_urn)
        .await
        .context("Status query failed")?;

    println!("Status: {}", status);
    println!("{}", body);

    Ok(())
}
