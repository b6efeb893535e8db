//! Today command - emit the selected entry for an external orchestrator

use anyhow::{Context, Result};
use post_courier_adapters::queue::FsPostQueue;
use post_courier_domain::{Clock, PostQueue, SystemClock, iso_date, usecases::select_for_date};
use serde::Serialize;
use std::path::PathBuf;
use time::macros::format_description;

use crate::args::TodayArgs;
use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct TodayOutput<'a> {
    date: &'a str,
    content: &'a str,
    image: Option<&'a str>,
}

pub async fn execute(args: TodayArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref()).unwrap_or_default();

    let queue_path = args
        .queue
        .unwrap_or_else(|| config.general.queue_path.clone());
    let date = resolve_date(args.date.as_deref())?;

    let posts = FsPostQueue::new(&queue_path)
        .load()
        .await
        .with_context(|| format!("Failed to read queue {}", queue_path.display()))?;

    let Some(post) = select_for_date(&posts, &date) else {
        // Nothing scheduled is a normal, silent success
        tracing::info!(date = %date, "Nothing scheduled");
        return Ok(());
    };

    if args.json {
        let output = TodayOutput {
            date: &post.date,
            content: &post.content,
            image: post.image.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("content={}", post.content);
        println!("image={}", post.image.as_deref().unwrap_or(""));
    }

    Ok(())
}

/// Resolve the target date: a validated override, or the system clock's today
pub(crate) fn resolve_date(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(raw) => {
            let format = format_description!("[year]-[month]-[day]");
            time::Date::parse(raw, &format)
                .with_context(|| format!("Invalid date: {} (expected YYYY-MM-DD)", raw))?;
            Ok(raw.to_string())
        }
        None => Ok(iso_date(SystemClock.now())),
    }
}
