use serde::Deserialize;

/// Where the progress map is persisted
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProgressBackend {
    /// JSON document on local disk
    File,
    /// Single Redis key holding the JSON document
    Redis,
    /// Process memory only, nothing survives a restart
    Memory,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the movie catalog JSON file
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Storage backend for user progress
    #[serde(default = "default_progress_backend")]
    pub progress_backend: ProgressBackend,

    /// Path of the progress document when using the file backend
    #[serde(default = "default_progress_path")]
    pub progress_path: String,

    /// Redis connection URL when using the redis backend
    #[serde(default = "default_redis_url")]
    pub redis_url: String,

    /// Key the progress map is stored under
    #[serde(default = "default_progress_namespace")]
    pub progress_namespace: String,

    /// Default log level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_catalog_path() -> String {
    "movies.json".to_string()
}

fn default_progress_backend() -> ProgressBackend {
    ProgressBackend::File
}

fn default_progress_path() -> String {
    "progress.json".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_progress_namespace() -> String {
    "disneyMovieProgress".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server listens on
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
