use std::path::{Path, PathBuf};

use super::ProgressStore;
use crate::{error::AppResult, models::Progress};

/// Progress map kept as a JSON document on disk
pub struct FileProgressStore {
    path: PathBuf,
}

impl FileProgressStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait::async_trait]
impl ProgressStore for FileProgressStore {
    async fn load(&self) -> AppResult<Progress> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => {
                let progress = Progress::from_json(&json)?;
                tracing::info!(
                    path = %self.path.display(),
                    records = progress.len(),
                    "Progress loaded"
                );
                Ok(progress)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No saved progress, starting fresh");
                Ok(Progress::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, progress: &Progress) -> AppResult<()> {
        let json = serde_json::to_string(progress)?;

        // Write then rename so a crash never leaves a truncated document
        let staging = self.staging_path();
        tokio::fs::write(&staging, json).await?;
        tokio::fs::rename(&staging, &self.path).await?;

        tracing::debug!(
            path = %self.path.display(),
            records = progress.len(),
            "Progress saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path().join("progress.json"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        let store = FileProgressStore::new(&path);

        let mut progress = Progress::new();
        progress.set_rating(1, 5).unwrap();
        progress.toggle_watched(2);
        store.save(&progress).await.unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            on_disk,
            r#"{"1":{"watched":true,"rating":5},"2":{"watched":true,"rating":0}}"#
        );
        assert_eq!(store.load().await.unwrap(), progress);
    }

    #[tokio::test]
    async fn test_malformed_document_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, r#"{"1":{"watched":true,"rating":11}}"#).unwrap();

        let result = FileProgressStore::new(&path).load().await;
        assert!(matches!(result, Err(AppError::MalformedProgress(_))));
    }
}
