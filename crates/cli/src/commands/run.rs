//! Run command - select today's queue entry and publish it

use anyhow::Result;
use post_courier_adapters::{
    linkedin::{LinkedInMediaUploader, LinkedInPostPublisher},
    queue::FsPostQueue,
};
use post_courier_domain::{
    RunOutcome, SystemClock,
    usecases::{PublishRun, RunConfig},
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::args::RunArgs;
use crate::commands::publish::{load_access_token, load_person_urn};
use crate::commands::today::resolve_date;
use crate::config::AppConfig;

pub async fn execute(args: RunArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    let dry_run = args.dry_run || config.general.dry_run;
    let queue_path = args
        .queue
        .unwrap_or_else(|| config.general.queue_path.clone());
    let date = resolve_date(args.date.as_deref())?;

    tracing::info!(
        queue = %queue_path.display(),
        date = %date,
        dry_run = dry_run,
        "Starting publish run"
    );

    // Under dry-run the network adapters are constructed disabled, so no
    // credential is read and no call can go out
    let (uploader, publisher) = if dry_run {
        (
            LinkedInMediaUploader::disabled(),
            LinkedInPostPublisher::disabled(),
        )
    } else {
        (
            LinkedInMediaUploader::with_base_url(
                load_access_token(&config)?,
                load_person_urn(&config)?,
                config.linkedin.base_url.clone(),
                true,
            ),
            LinkedInPostPublisher::with_base_url(
                load_access_token(&config)?,
                load_person_urn(&config)?,
                config.linkedin.base_url.clone(),
                true,
            ),
        )
    };

    let run = PublishRun::new(
        Arc::new(FsPostQueue::new(&queue_path)),
        Arc::new(uploader),
        Arc::new(publisher),
        Arc::new(SystemClock),
        RunConfig { dry_run },
    );

    match run.execute_for_date(&date).await? {
        RunOutcome::Published { date, receipt } => {
            tracing::info!(
                date = %date,
                status = receipt.status,
                post_urn = ?receipt.post_urn,
                "Published"
            );
            if let Some(urn) = receipt.post_urn {
                println!("{}", urn);
            }
        }
        RunOutcome::NothingScheduled => {
            tracing::info!(date = %date, "Nothing scheduled");
        }
        RunOutcome::Skipped { date, reason } => {
            tracing::warn!(date = %date, reason = %reason, "Skipped");
        }
    }

    Ok(())
}
