//! Filesystem-backed post queue

use async_trait::async_trait;
use post_courier_domain::{PostQueue, QueueError, ScheduledPost};
use std::path::{Path, PathBuf};

/// Post queue backed by a flat JSON file holding an array of post objects.
///
/// The file is read-only from this system's perspective; it is maintained
/// externally.
pub struct FsPostQueue {
    path: PathBuf,
}

impl FsPostQueue {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl PostQueue for FsPostQueue {
    async fn load(&self) -> Result<Vec<ScheduledPost>, QueueError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(QueueError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(QueueError::Io(e)),
        };

        serde_json::from_str(&raw).map_err(|e| QueueError::Parse {
            file: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_queue(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("posts.json");
        fs::write(&path, content).expect("write queue");
        path
    }

    #[tokio::test]
    async fn loads_posts_in_file_order() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_queue(
            &dir,
            r#"[
                {"date": "2024-01-01", "content": "First"},
                {"date": "2024-01-01", "content": "Second", "image": "a.png"}
            ]"#,
        );

        let posts = FsPostQueue::new(&path).load().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].content, "First");
        assert_eq!(posts[1].image.as_deref(), Some("a.png"));
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = TempDir::new().expect("temp dir");
        let queue = FsPostQueue::new(dir.path().join("nope.json"));

        let err = queue.load().await.unwrap_err();
        assert!(matches!(err, QueueError::NotFound(_)));
    }

    #[tokio::test]
    async fn corrupt_json_is_a_parse_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_queue(&dir, "[{\"date\": ");

        let err = FsPostQueue::new(&path).load().await.unwrap_err();
        assert!(matches!(err, QueueError::Parse { .. }));
    }

    #[tokio::test]
    async fn missing_optional_fields_get_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_queue(&dir, r#"[{"date": "2024-01-01"}]"#);

        let posts = FsPostQueue::new(&path).load().await.unwrap();

        assert_eq!(posts[0].content, "");
        assert!(posts[0].image.is_none());
    }
}
