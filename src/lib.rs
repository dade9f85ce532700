// src/lib.rs
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod layout;
pub mod pages;
pub mod router;
pub mod types;

use crate::auth::AuthService;
use crate::config::ConfigManager;
use crate::core::{ApiClient, QueryCache, Session};

/// Wired-up client: session store, HTTP client, query cache and auth
/// service sharing one configuration.
pub struct App {
    pub session: Arc<Session>,
    pub client: Arc<ApiClient>,
    pub cache: QueryCache,
    pub auth: AuthService,
}

impl App {
    pub async fn bootstrap(config: &ConfigManager) -> Result<Self> {
        config.ensure_directories().await?;

        let session = Arc::new(Session::load(config.session_path()).await?);
        let client = Arc::new(ApiClient::new(&config.api, Arc::clone(&session))?);
        let cache = QueryCache::new(
            Duration::from_secs(config.cache.stale_after_secs),
            config.cache.retry_limit,
        );
        let auth = AuthService::new(Arc::clone(&client));

        Ok(Self {
            session,
            client,
            cache,
            auth,
        })
    }
}
