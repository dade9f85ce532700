// src/pages/applications.rs
//! Application tracking. Status transitions are owned by the backend;
//! this page only labels whatever tag it is given.

use std::fmt::Write as _;

use crate::core::api_client::ApiClient;
use crate::core::error::ApiError;
use crate::core::query_cache::{QueryCache, QueryKey};
use crate::types::models::Application;

pub const QUERY: &str = "applications";

pub async fn load(client: &ApiClient, cache: &QueryCache) -> Result<Vec<Application>, ApiError> {
    cache
        .fetch(QueryKey::named(QUERY), || {
            client.get::<Vec<Application>>("/applications")
        })
        .await
}

pub fn render(applications: &[Application]) -> String {
    let mut out = String::new();
    out.push_str("Applications\n\n");

    if applications.is_empty() {
        out.push_str("  No applications yet.\n");
        return out;
    }

    for app in applications {
        let applied = app
            .applied_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "—".to_string());
        let _ = writeln!(
            out,
            "  {:<32} {:<20} [{:<9}] {}",
            app.job_title,
            app.company,
            app.status.label(),
            applied
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_renders_the_pending_label() {
        let apps: Vec<Application> = serde_json::from_str(
            r#"[{"id":1,"job_title":"Dev","company":"Acme","status":"offer"}]"#,
        )
        .unwrap();
        let view = render(&apps);
        assert!(view.contains("Pending"));
    }

    #[test]
    fn known_statuses_render_their_labels() {
        let apps: Vec<Application> = serde_json::from_str(
            r#"[
                {"id":1,"job_title":"A","company":"X","status":"interview"},
                {"id":2,"job_title":"B","company":"Y","status":"rejected","applied_at":"2024-01-14T12:00:00Z"}
            ]"#,
        )
        .unwrap();
        let view = render(&apps);
        assert!(view.contains("Interview"));
        assert!(view.contains("Rejected"));
        assert!(view.contains("2024-01-14"));
    }
}
