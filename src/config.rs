// src/config.rs
//! Unified configuration management.
//!
//! Defaults come from the environment (`ENVIRONMENT` switches the base
//! directory, `JOB_API_URL` points at the backend); an optional
//! `jobassist.toml` next to the data directory can override the cache
//! policy and API settings.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// The original client considered server state stale after five minutes
// and retried reads twice. Both knobs stay overridable.
const DEFAULT_STALE_AFTER_SECS: u64 = 300;
const DEFAULT_RETRY_LIMIT: u32 = 2;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub cache: CachePolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_path: PathBuf,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CachePolicy {
    pub stale_after_secs: u64,
    pub retry_limit: u32,
}

/// Optional overrides read from `jobassist.toml`.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api_url: Option<String>,
    #[serde(default)]
    timeout_seconds: Option<u64>,
    #[serde(default)]
    stale_after_secs: Option<u64>,
    #[serde(default)]
    retry_limit: Option<u32>,
}

impl ConfigManager {
    /// Load all configurations.
    pub async fn load() -> Result<Self> {
        let storage = Self::load_storage()?;
        let file = Self::load_file(&storage).await?;

        let base_url = std::env::var("JOB_API_URL")
            .ok()
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api = ApiConfig {
            base_url,
            timeout_seconds: file.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let cache = CachePolicy {
            stale_after_secs: file.stale_after_secs.unwrap_or(DEFAULT_STALE_AFTER_SECS),
            retry_limit: file.retry_limit.unwrap_or(DEFAULT_RETRY_LIMIT),
        };

        Ok(Self {
            api,
            storage,
            cache,
        })
    }

    fn load_storage() -> Result<StorageConfig> {
        let env = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        info!("Loading configuration for environment: {}", env);

        let base_dir = if env == "production" {
            PathBuf::from("/app")
        } else {
            std::env::current_dir().context("Failed to get current directory")?
        };

        Ok(StorageConfig {
            data_path: base_dir.join("data"),
        })
    }

    async fn load_file(storage: &StorageConfig) -> Result<FileConfig> {
        let path = storage.data_path.join("jobassist.toml");
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => toml::from_str(&content)
                .with_context(|| format!("Invalid config file: {}", path.display())),
            Err(_) => Ok(FileConfig::default()),
        }
    }

    pub fn session_path(&self) -> PathBuf {
        self.storage.data_path.join("session.json")
    }

    /// Ensure all required directories exist.
    pub async fn ensure_directories(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.storage.data_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to create data directory: {}",
                    self.storage.data_path.display()
                )
            })
    }
}
