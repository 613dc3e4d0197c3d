use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::Progress,
    services::Catalog,
    store::ProgressStore,
};

/// Upper bound on a single progress save
pub const SAVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared application state
///
/// The catalog is read-only for the process lifetime. Progress is the
/// in-memory copy of the store; every mutation is persisted before it becomes
/// visible to readers. Writes are serialised behind the progress lock, which is
/// held for at most `save_timeout` while the store is written.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    progress: Arc<RwLock<Progress>>,
    store: Arc<dyn ProgressStore>,
    save_timeout: Duration,
}

impl AppState {
    pub fn new(catalog: Catalog, progress: Progress, store: Arc<dyn ProgressStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            progress: Arc::new(RwLock::new(progress)),
            store,
            save_timeout: SAVE_TIMEOUT,
        }
    }

    pub fn with_save_timeout(mut self, save_timeout: Duration) -> Self {
        self.save_timeout = save_timeout;
        self
    }

    /// Creates state with progress loaded from the store
    pub async fn initialize(catalog: Catalog, store: Arc<dyn ProgressStore>) -> AppResult<Self> {
        let progress = store.load().await?;
        Ok(Self::new(catalog, progress, store))
    }

    /// Immutable copy of the current progress map
    pub async fn snapshot(&self) -> Progress {
        self.progress.read().await.clone()
    }

    /// Applies `mutation` to a copy of the progress map, saves it, then commits it.
    /// If the mutation or the save fails the current map is left untouched.
    pub async fn update<T, F>(&self, mutation: F) -> AppResult<T>
    where
        F: FnOnce(&mut Progress) -> AppResult<T>,
    {
        let mut current = self.progress.write().await;
        let mut next = current.clone();
        let output = mutation(&mut next)?;

        tokio::time::timeout(self.save_timeout, self.store.save(&next))
            .await
            .map_err(|_| {
                tracing::error!(timeout = ?self.save_timeout, "Progress save timed out");
                AppError::Internal(format!(
                    "Saving progress timed out after {:?}",
                    self.save_timeout
                ))
            })??;
        *current = next;

        Ok(output)
    }

    /// Replaces the whole progress map, e.g. on import
    pub async fn replace(&self, progress: Progress) -> AppResult<()> {
        self.update(move |current| {
            *current = progress;
            Ok(())
        })
        .await
    }
}
