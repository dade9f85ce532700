// src/core/api_client.rs
//! Unified HTTP client for the job-assistant backend.
//!
//! Every request goes through here: the client attaches the session's
//! bearer token, normalizes failures into [`ApiError`], and decodes JSON
//! bodies. A 401 response clears the session (silent logout) before the
//! error is returned to the caller.

use anyhow::{Context, Result};
use reqwest::multipart::Form;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{trace, warn};

use crate::config::ApiConfig;
use crate::core::error::ApiError;
use crate::core::session::Session;

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Arc<Session>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub async fn get<R>(&self, endpoint: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        trace!("GET {}", url);
        let body = self.send(self.client.get(&url)).await?;
        decode(&body)
    }

    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R, ApiError>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        trace!("POST {}", url);
        let body = self.send(self.client.post(&url).json(payload)).await?;
        decode(&body)
    }

    pub async fn put_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R, ApiError>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        trace!("PUT {}", url);
        let body = self.send(self.client.put(&url).json(payload)).await?;
        decode(&body)
    }

    /// POST with a form-urlencoded body. The login endpoint is the one
    /// consumer: the backend's OAuth2 flow rejects JSON credentials.
    pub async fn post_form<R>(&self, endpoint: &str, form: &[(&str, &str)]) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        trace!("POST {} (form)", url);
        let body = self.send(self.client.post(&url).form(form)).await?;
        decode(&body)
    }

    pub async fn post_multipart<R>(&self, endpoint: &str, form: Form) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        trace!("POST {} (multipart)", url);
        let body = self.send(self.client.post(&url).multipart(form)).await?;
        decode(&body)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let builder = match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        match status.as_u16() {
            401 => {
                // Silent-logout policy: a rejected token ends the session.
                if self.session.is_authenticated() {
                    warn!("Token rejected by backend, clearing session");
                    if let Err(e) = self.session.clear().await {
                        warn!("Failed to clear session after 401: {}", e);
                    }
                }
                Err(ApiError::Unauthorized)
            }
            400 | 422 => Err(ApiError::Validation(error_detail(&body))),
            s if status.is_server_error() => Err(ApiError::Server {
                status: s,
                message: error_detail(&body),
            }),
            s => Err(ApiError::Unexpected {
                status: s,
                message: error_detail(&body),
            }),
        }
    }
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull the human-readable message out of an error body. The backend
/// wraps messages as `{"detail": "..."}`; fall back to the raw body.
fn error_detail(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct Detail {
        detail: String,
    }

    match serde_json::from_str::<Detail>(body) {
        Ok(parsed) => parsed.detail,
        Err(_) => {
            if body.is_empty() {
                "no error detail provided".to_string()
            } else {
                body.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_prefers_backend_message() {
        assert_eq!(
            error_detail(r#"{"detail":"Incorrect username or password"}"#),
            "Incorrect username or password"
        );
        assert_eq!(error_detail("gateway timeout"), "gateway timeout");
        assert_eq!(error_detail(""), "no error detail provided");
    }
}
