//! Publish run use case - orchestrates selecting and publishing today's post

use std::sync::Arc;
use thiserror::Error;

use crate::iso_date;
use crate::model::{ImageRef, RunOutcome};
use crate::ports::{Clock, MediaUploader, PostPublisher, PostQueue, PublishError, QueueError};
use crate::usecases::select::select_for_date;

/// Configuration for a publish run
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Dry run mode (select and log, don't upload or publish)
    pub dry_run: bool,
}

/// Error type for a publish run.
///
/// Media-upload failures are not represented here: a failed handshake demotes
/// the post to text-only and the run continues.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),
    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),
}

/// Publish run orchestrator
#[derive(Clone)]
pub struct PublishRun<Q, M, P, Cl>
where
    Q: PostQueue + ?Sized,
    M: MediaUploader + ?Sized,
    P: PostPublisher + ?Sized,
    Cl: Clock + ?Sized,
{
    queue: Arc<Q>,
    uploader: Arc<M>,
    publisher: Arc<P>,
    clock: Arc<Cl>,
    config: RunConfig,
}

impl<Q, M, P, Cl> PublishRun<Q, M, P, Cl>
where
    Q: PostQueue + ?Sized,
    M: MediaUploader + ?Sized,
    P: PostPublisher + ?Sized,
    Cl: Clock + ?Sized,
{
    pub fn new(
        queue: Arc<Q>,
        uploader: Arc<M>,
        publisher: Arc<P>,
        clock: Arc<Cl>,
        config: RunConfig,
    ) -> Self {
        Self {
            queue,
            uploader,
            publisher,
            clock,
            config,
        }
    }

    /// Run one selection-and-publish cycle for the clock's current date.
    ///
    /// The sequence is linear with no resumption: a failed run is rerun from
    /// the start by the external trigger.
    pub async fn execute(&self) -> Result<RunOutcome, RunError> {
        self.execute_for_date(&iso_date(self.clock.now())).await
    }

    /// Run one selection-and-publish cycle for an explicit target date
    pub async fn execute_for_date(&self, date: &str) -> Result<RunOutcome, RunError> {
        let posts = self.queue.load().await?;

        let Some(post) = select_for_date(&posts, date) else {
            tracing::debug!(date = %date, "Nothing scheduled");
            return Ok(RunOutcome::NothingScheduled);
        };

        tracing::info!(
            date = %date,
            content_length = post.content.len(),
            image = ?post.image,
            "Found scheduled post"
        );

        if self.config.dry_run {
            tracing::info!(content = %post.content, "Dry run, not publishing");
            return Ok(RunOutcome::Skipped {
                date: date.to_string(),
                reason: "dry run".to_string(),
            });
        }

        let asset = match post.image.as_deref() {
            Some(raw) => {
                let image = ImageRef::parse(raw);
                match self.uploader.upload_image(&image).await {
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

        if post.content.is_empty() && asset.is_none() {
            tracing::warn!(date = %date, "No content or media to publish");
            return Ok(RunOutcome::Skipped {
                date: date.to_string(),
                reason: "no content or media".to_string(),
            });
        }

        let receipt = self.publisher.publish(&post.content, asset.as_ref()).await?;

        tracing::info!(
            status = receipt.status,
            post_urn = ?receipt.post_urn,
            "Post published"
        );

        Ok(RunOutcome::Published {
            date: date.to_string(),
            receipt,
        })
    }
}
