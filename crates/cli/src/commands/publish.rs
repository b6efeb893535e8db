//! Publish command - direct upload-and-post, bypassing the queue

use anyhow::{Context, Result, bail};
use post_courier_adapters::linkedin::{LinkedInMediaUploader, LinkedInPostPublisher};
use post_courier_domain::{ImageRef, MediaUploader, PostPublisher};
use secrecy::SecretString;
use std::path::PathBuf;

use crate::args::PublishArgs;
use crate::config::AppConfig;

pub async fn execute(args: PublishArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref()).unwrap_or_default();

    let text = args.text.unwrap_or_default();
    if text.is_empty() && args.image.is_none() {
        bail!("Nothing to publish: provide --text and/or --image");
    }

    // Credentials are a precondition for any network step; the token is
    // checked first
    let access_token = load_access_token(&config)?;
    let person_urn = load_person_urn(&config)?;

    let asset = match args.image.as_deref() {
        Some(raw) => {
            let image = ImageRef::parse(raw);
            let uploader = LinkedInMediaUploader::with_base_url(
                access_token,
                person_urn.clone(),
                config.linkedin.base_url.clone(),
                true,
            );

            match uploader.upload_image(&image).await {
                Ok(asset) => {
                    tracing::info!(asset = %asset, "Image uploaded");
                    Some(asset)
                }
                Err(e) => {
                    tracing::warn!(
                        image = %image,
                        error = %e,
                        "Image upload failed, continuing without media"
                    );
                    None
                }
            }
        }
        None => None,
    };

    if text.is_empty() && asset.is_none() {
        tracing::warn!("No content or media to publish");
        return Ok(());
    }

    let publisher = LinkedInPostPublisher::with_base_url(
        load_access_token(&config)?,
        person_urn,
        config.linkedin.base_url.clone(),
        true,
    );

    let receipt = publisher
        .publish(&text, asset.as_ref())
        .await
        .context("Create-post call failed")?;

    tracing::info!(
        status = receipt.status,
        post_urn = ?receipt.post_urn,
        "Post published"
    );

    if let Some(urn) = receipt.post_urn {
        println!("{}", urn);
    }

    Ok(())
}

pub(crate) fn load_access_token(config: &AppConfig) -> Result<SecretString> {
    let env_var = &config.linkedin.access_token_env;
    if env_var.trim().is_empty() {
        bail!("No access token env var configured");
    }

    let token = std::env::var(env_var)
        .with_context(|| format!("Missing access token env var {}", env_var))?;

    if token.trim().is_empty() {
        bail!("Access token env var {} is empty", env_var);
    }

    Ok(SecretString::new(token.into()))
}

pub(crate) fn load_person_urn(config: &AppConfig) -> Result<String> {
    let env_var = &config.linkedin.person_urn_env;
    if env_var.trim().is_empty() {
        bail!("No person URN env var configured");
    }

    let urn = std::env::var(env_var)
        .with_context(|| format!("Missing person URN env var {}", env_var))?;

    if urn.trim().is_empty() {
        bail!("Person URN env var {} is empty", env_var);
    }

    Ok(urn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_access_token_fails_when_env_var_absent() {
        let mut config = AppConfig::default();
        config.linkedin.access_token_env = "POST_COURIER_TEST_NO_SUCH_TOKEN".to_string();

        let err = load_access_token(&config).unwrap_err();
        assert!(err.to_string().contains("POST_COURIER_TEST_NO_SUCH_TOKEN"));
    }

    #[test]
    fn load_person_urn_fails_when_env_var_name_empty() {
        let mut config = AppConfig::default();
        config.linkedin.person_urn_env = String::new();

        assert!(load_person_urn(&config).is_err());
    }
}
