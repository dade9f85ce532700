// src/core/session.rs
//! Single source of truth for "is a user authenticated".
//!
//! The session holds the current user and bearer token, persisted as JSON
//! so it survives across invocations. `establish` and `clear` are the only
//! mutators; both write through to disk. Token and user are set and
//! cleared together, so one is present exactly when the other is.
//!
//! Token expiry policy: silent logout. There is no refresh flow; when the
//! HTTP layer sees a 401 on an authenticated request it clears the session
//! and the next navigation lands on the login page.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::info;

use crate::types::models::UserProfile;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct SessionState {
    token: Option<String>,
    user: Option<UserProfile>,
}

pub struct Session {
    state: RwLock<SessionState>,
    path: PathBuf,
}

impl Session {
    /// Load a persisted session, or start unauthenticated if none exists.
    pub async fn load(path: PathBuf) -> Result<Self> {
        let state = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable session file: {}", e);
                SessionState::default()
            }),
            Err(_) => SessionState::default(),
        };

        Ok(Self {
            state: RwLock::new(state),
            path,
        })
    }

    /// Store token and profile after a successful login or registration.
    pub async fn establish(&self, token: String, user: UserProfile) -> Result<()> {
        let state = SessionState {
            token: Some(token),
            user: Some(user),
        };
        self.persist(&state).await?;
        *self.state.write().expect("session lock poisoned") = state;
        info!("Session established");
        Ok(())
    }

    /// Drop token and profile, both in memory and on disk.
    pub async fn clear(&self) -> Result<()> {
        let state = SessionState::default();
        self.persist(&state).await?;
        *self.state.write().expect("session lock poisoned") = state;
        info!("Session cleared");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .expect("session lock poisoned")
            .token
            .is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .expect("session lock poisoned")
            .token
            .clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state
            .read()
            .expect("session lock poisoned")
            .user
            .clone()
    }

    async fn persist(&self, state: &SessionState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir_exists(parent).await?;
        }

        let content =
            serde_json::to_string_pretty(state).context("Failed to serialize session")?;

        tokio::fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))
    }
}

async fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserProfile {
        serde_json::from_str(r#"{"id":1,"email":"user@x.com","full_name":"Test User"}"#)
            .unwrap()
    }

    #[tokio::test]
    async fn session_starts_unauthenticated_without_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::load(dir.path().join("session.json")).await.unwrap();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn establish_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session::load(path.clone()).await.unwrap();
        session
            .establish("t1".to_string(), sample_user())
            .await
            .unwrap();

        let reloaded = Session::load(path).await.unwrap();
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.token().as_deref(), Some("t1"));
        assert_eq!(reloaded.user().unwrap().email, "user@x.com");
    }

    #[tokio::test]
    async fn clear_drops_token_and_user_together() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session::load(path.clone()).await.unwrap();
        session
            .establish("t1".to_string(), sample_user())
            .await
            .unwrap();
        session.clear().await.unwrap();

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());

        let reloaded = Session::load(path).await.unwrap();
        assert!(!reloaded.is_authenticated());
    }

    #[tokio::test]
    async fn corrupt_session_file_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let session = Session::load(path).await.unwrap();
        assert!(!session.is_authenticated());
    }
}
