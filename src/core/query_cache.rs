// src/core/query_cache.rs
//! Typed cache for server state, keyed by (query name, parameters).
//!
//! This makes the data-fetching policy explicit and reproducible:
//! entries are served without a fetch while younger than `stale_after`,
//! read fetches retry transient failures up to `retry_limit` times, and a
//! completion is discarded when a newer fetch for the same key has started
//! since (the newer request supersedes the older one). Writes never go
//! through the cache and are never retried.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::core::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub name: &'static str,
    pub params: String,
}

impl QueryKey {
    pub fn new(name: &'static str, params: impl Into<String>) -> Self {
        Self {
            name,
            params: params.into(),
        }
    }

    /// Key for a query with no parameters.
    pub fn named(name: &'static str) -> Self {
        Self::new(name, "")
    }
}

struct CacheEntry {
    value: serde_json::Value,
    fetched_at: Instant,
}

pub struct QueryCache {
    stale_after: Duration,
    retry_limit: u32,
    entries: Mutex<HashMap<QueryKey, CacheEntry>>,
    /// Generation of the most recently started fetch per key.
    inflight: Mutex<HashMap<QueryKey, u64>>,
    counter: AtomicU64,
}

impl QueryCache {
    pub fn new(stale_after: Duration, retry_limit: u32) -> Self {
        Self {
            stale_after,
            retry_limit,
            entries: Mutex::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
            counter: AtomicU64::new(0),
        }
    }

    /// Return the cached value for `key` if still fresh, otherwise run
    /// `fetcher` (with retries for transient errors) and cache the result.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, ApiError>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if let Some(value) = self.lookup(&key) {
            debug!("Cache hit for query '{}'", key.name);
            return Ok(value);
        }

        let generation = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.inflight
            .lock()
            .expect("query cache lock poisoned")
            .insert(key.clone(), generation);

        let value = self.run_with_retries(&key, fetcher).await?;
        self.store(&key, generation, &value);
        Ok(value)
    }

    /// Drop every cached entry for a query name, regardless of parameters.
    pub fn invalidate(&self, name: &str) {
        self.entries
            .lock()
            .expect("query cache lock poisoned")
            .retain(|key, _| key.name != name);
        debug!("Invalidated query '{}'", name);
    }

    fn lookup<T: serde::de::DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.lock().expect("query cache lock poisoned");
        let entry = entries.get(key)?;
        if entry.fetched_at.elapsed() >= self.stale_after {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    fn store<T: serde::Serialize>(&self, key: &QueryKey, generation: u64, value: &T) {
        let mut inflight = self.inflight.lock().expect("query cache lock poisoned");
        if inflight.get(key) != Some(&generation) {
            // A newer fetch for this key started while we were in flight;
            // its result wins and ours is discarded.
            debug!("Discarding superseded result for query '{}'", key.name);
            return;
        }
        inflight.remove(key);

        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("Not caching unserializable query result: {}", e);
                return;
            }
        };

        self.entries
            .lock()
            .expect("query cache lock poisoned")
            .insert(
                key.clone(),
                CacheEntry {
                    value: json,
                    fetched_at: Instant::now(),
                },
            );
    }

    async fn run_with_retries<T, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<T, ApiError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut attempt: u32 = 0;
        loop {
            match fetcher().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < self.retry_limit => {
                    attempt += 1;
                    warn!(
                        "Query '{}' failed ({}), retry {}/{}",
                        key.name, e, attempt, self.retry_limit
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }
}
