use tokio::sync::RwLock;

use super::ProgressStore;
use crate::{error::AppResult, models::Progress};

/// Keeps progress in process memory
#[derive(Default)]
pub struct MemoryProgressStore {
    progress: RwLock<Progress>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(progress: Progress) -> Self {
        Self {
            progress: RwLock::new(progress),
        }
    }
}

#[async_trait::async_trait]
impl ProgressStore for MemoryProgressStore {
    async fn load(&self) -> AppResult<Progress> {
        Ok(self.progress.read().await.clone())
    }

    async fn save(&self, progress: &Progress) -> AppResult<()> {
        *self.progress.write().await = progress.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_replaces_contents() {
        let store = MemoryProgressStore::new();
        let mut progress = Progress::new();
        progress.set_rating(9, 2).unwrap();

        store.save(&progress).await.unwrap();
        assert_eq!(store.load().await.unwrap(), progress);

        store.save(&Progress::new()).await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }
}
