// src/auth.rs
//! Thin service wrappers over the authentication endpoints.
//!
//! Each operation maps one UI action to one HTTP call. Errors are not
//! caught here; callers render them. On a successful login the *caller*
//! populates the session with the returned token and profile.

use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::core::api_client::ApiClient;
use crate::core::error::ApiError;
use crate::types::models::{ProfileUpdate, UserProfile};
use crate::types::response::{AuthResponse, StatusResponse};

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Serialize)]
struct ChangePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
struct PasswordResetRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct PasswordReset<'a> {
    token: &'a str,
    new_password: &'a str,
}

pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token and profile.
    ///
    /// The backend's OAuth2 flow expects the email under `username` and
    /// the body form-urlencoded, not JSON. This is a boundary contract.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        info!("Logging in as {}", email);
        self.client
            .post_form("/auth/login", &[("username", email), ("password", password)])
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, ApiError> {
        info!("Registering account for {}", request.email);
        self.client.post_json("/auth/register", request).await
    }

    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.client.get("/auth/me").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        self.client.put_json("/users/profile", update).await
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<StatusResponse, ApiError> {
        self.client
            .post_json(
                "/auth/change-password",
                &ChangePasswordRequest {
                    current_password,
                    new_password,
                },
            )
            .await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<StatusResponse, ApiError> {
        self.client
            .post_json("/auth/password-reset-request", &PasswordResetRequest { email })
            .await
    }

    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<StatusResponse, ApiError> {
        self.client
            .post_json(
                "/auth/password-reset",
                &PasswordReset {
                    token,
                    new_password,
                },
            )
            .await
    }
}
