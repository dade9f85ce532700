// src/types/response.rs
use serde::{Deserialize, Serialize};

use crate::types::models::{ResumeDoc, UserProfile};

// ===== Service Response Types =====

/// Successful login/registration payload. The backend speaks OAuth2 and
/// names the field `access_token`; `token` is accepted as an alias.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: UserProfile,
}

/// Status-only acknowledgement for password operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResumeUploadResponse {
    pub resume: ResumeDoc,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_accepts_token_alias() {
        let parsed: AuthResponse = serde_json::from_str(
            r#"{"token":"t1","user":{"id":1,"email":"user@x.com","full_name":"Test User"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.access_token, "t1");
        assert_eq!(parsed.user.email, "user@x.com");
    }
}
