//! Progress persistence
//!
//! The progress map is stored as one JSON document under a fixed namespace.
//! Stores validate documents on load so the engine only ever sees well-formed
//! records.

use std::sync::Arc;

use crate::{
    config::{Config, ProgressBackend},
    error::AppResult,
    models::Progress,
};

pub mod file;
pub mod memory;
pub mod redis;

pub use file::FileProgressStore;
pub use memory::MemoryProgressStore;
pub use self::redis::RedisProgressStore;

/// Key-value persistence for the user's progress map
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProgressStore: Send + Sync {
    /// Loads the stored map; a store with nothing saved yet yields an empty map
    async fn load(&self) -> AppResult<Progress>;

    /// Replaces the stored map
    async fn save(&self, progress: &Progress) -> AppResult<()>;
}

/// Builds the store selected by configuration
pub fn create_store(config: &Config) -> anyhow::Result<Arc<dyn ProgressStore>> {
    let store: Arc<dyn ProgressStore> = match config.progress_backend {
        ProgressBackend::File => Arc::new(FileProgressStore::new(&config.progress_path)),
        ProgressBackend::Redis => Arc::new(RedisProgressStore::connect(
            &config.redis_url,
            &config.progress_namespace,
        )?),
        ProgressBackend::Memory => Arc::new(MemoryProgressStore::new()),
    };

    tracing::info!(backend = ?config.progress_backend, "Progress store configured");
    Ok(store)
}
