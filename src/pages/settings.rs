// src/pages/settings.rs
//! Profile and job-search preferences.

use std::fmt::Write as _;

use crate::auth::AuthService;
use crate::core::api_client::ApiClient;
use crate::core::error::ApiError;
use crate::core::query_cache::{QueryCache, QueryKey};
use crate::types::models::{ProfileUpdate, UserProfile};

pub const QUERY: &str = "profile";

pub async fn load(client: &ApiClient, cache: &QueryCache) -> Result<UserProfile, ApiError> {
    cache
        .fetch(QueryKey::named(QUERY), || {
            client.get::<UserProfile>("/auth/me")
        })
        .await
}

/// Apply a partial profile update, then drop the cached profile so the
/// next settings view reflects the replacement.
pub async fn update(
    auth: &AuthService,
    cache: &QueryCache,
    update: &ProfileUpdate,
) -> Result<UserProfile, ApiError> {
    let profile = auth.update_profile(update).await?;
    cache.invalidate(QUERY);
    Ok(profile)
}

pub fn render(user: &UserProfile) -> String {
    let mut out = String::new();
    out.push_str("Settings\n\n");
    let _ = writeln!(out, "  Name:      {}", user.full_name);
    let _ = writeln!(out, "  Email:     {}", user.email);
    let _ = writeln!(
        out,
        "  Phone:     {}",
        user.phone_number.as_deref().unwrap_or("—")
    );
    let _ = writeln!(
        out,
        "  Telegram:  {}",
        user.telegram_chat_id.as_deref().unwrap_or("—")
    );

    out.push_str("\nJob search\n");
    let _ = writeln!(
        out,
        "  Automatic search: {}",
        if user.job_search_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
    let _ = writeln!(
        out,
        "  Keywords:         {}",
        user.search_keywords.as_deref().unwrap_or("—")
    );
    let _ = writeln!(
        out,
        "  Locations:        {}",
        user.preferred_locations.as_deref().unwrap_or("—")
    );

    let salary = match (&user.salary_min, &user.salary_max) {
        (Some(min), Some(max)) => format!("{} – {}", min, max),
        (Some(min), None) => format!("from {}", min),
        (None, Some(max)) => format!("up to {}", max),
        (None, None) => "—".to_string(),
    };
    let _ = writeln!(out, "  Salary range:     {}", salary);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_preferences_with_placeholders() {
        let user: UserProfile = serde_json::from_str(
            r#"{
                "id": 1,
                "email": "user@x.com",
                "full_name": "Test User",
                "job_search_enabled": true,
                "search_keywords": "rust, backend",
                "salary_min": "120000"
            }"#,
        )
        .unwrap();
        let view = render(&user);
        assert!(view.contains("Test User"));
        assert!(view.contains("Automatic search: enabled"));
        assert!(view.contains("rust, backend"));
        assert!(view.contains("from 120000"));
        assert!(view.contains("Locations:        —"));
    }
}
