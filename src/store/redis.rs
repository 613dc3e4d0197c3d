use redis::{AsyncCommands, Client};

use super::ProgressStore;
use crate::{error::AppResult, models::Progress};

/// Progress map stored as JSON text under a single Redis key
pub struct RedisProgressStore {
    client: Client,
    key: String,
}

impl RedisProgressStore {
    /// Opens a client; no connection is made until the first load or save
    pub fn connect(redis_url: &str, namespace: &str) -> anyhow::Result<Self> {
        let client = Client::open(redis_url)?;
        Ok(Self {
            client,
            key: namespace.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ProgressStore for RedisProgressStore {
    async fn load(&self) -> AppResult<Progress> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let stored: Option<String> = conn.get(&self.key).await.map_err(|e| {
            tracing::warn!(key = %self.key, error = %e, "Redis get failed");
            e
        })?;

        match stored {
            Some(json) => {
                let progress = Progress::from_json(&json)?;
                tracing::info!(key = %self.key, records = progress.len(), "Progress loaded");
                Ok(progress)
            }
            None => Ok(Progress::new()),
        }
    }

    async fn save(&self, progress: &Progress) -> AppResult<()> {
        let json = serde_json::to_string(progress)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let _: () = conn.set(&self.key, json).await.map_err(|e| {
            tracing::warn!(key = %self.key, error = %e, "Redis set failed");
            e
        })?;

        tracing::debug!(key = %self.key, records = progress.len(), "Progress saved");
        Ok(())
    }
}
