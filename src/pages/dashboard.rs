// src/pages/dashboard.rs
//! Dashboard: headline counters plus the latest jobs and applications.

use std::fmt::Write as _;

use crate::core::api_client::ApiClient;
use crate::core::error::ApiError;
use crate::core::query_cache::{QueryCache, QueryKey};
use crate::layout::Icon;
use crate::types::models::DashboardData;

pub const QUERY: &str = "dashboard";

pub async fn load(client: &ApiClient, cache: &QueryCache) -> Result<DashboardData, ApiError> {
    cache
        .fetch(QueryKey::named(QUERY), || {
            client.get::<DashboardData>("/dashboard")
        })
        .await
}

pub fn render(data: &DashboardData) -> String {
    let mut out = String::new();
    out.push_str("Dashboard\n");
    out.push_str("Overview of your job search activity\n\n");

    let stats = &data.stats;
    let cards = [
        (Icon::Briefcase, "Jobs found", stats.total_jobs),
        (Icon::PaperAirplane, "Applications sent", stats.total_applications),
        (Icon::Users, "HR contacts", stats.hr_contacts),
        (Icon::Clock, "Awaiting response", stats.pending_applications),
    ];
    for (icon, title, value) in cards {
        let _ = writeln!(out, "  {} {:<20} {}", icon.glyph(), title, value);
    }

    out.push_str("\nRecent jobs\n");
    if data.recent_jobs.is_empty() {
        out.push_str("  No jobs found yet. Adjust your search settings to get started.\n");
    } else {
        for job in &data.recent_jobs {
            let score = job
                .match_score
                .map(|s| format!("{:.0}% match", s))
                .unwrap_or_else(|| "unscored".to_string());
            let _ = writeln!(
                out,
                "  {} — {} ({})  [{}]  {}",
                job.title,
                job.company,
                job.location.as_deref().unwrap_or("remote/unspecified"),
                score,
                job.added_at.format("%Y-%m-%d")
            );
        }
    }

    out.push_str("\nRecent applications\n");
    if data.recent_applications.is_empty() {
        out.push_str("  No applications sent yet. Pick interesting jobs to apply.\n");
    } else {
        for app in &data.recent_applications {
            let applied = app
                .applied_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "—".to_string());
            let _ = writeln!(
                out,
                "  {} — {}  [{}]  {}",
                app.job_title,
                app.company,
                app.status.label(),
                applied
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::render_error;
    use crate::types::models::DashboardStats;

    #[test]
    fn renders_stat_cards_and_empty_states() {
        let data = DashboardData {
            stats: DashboardStats {
                total_jobs: 45,
                total_applications: 12,
                hr_contacts: 8,
                pending_applications: 3,
            },
            ..Default::default()
        };
        let view = render(&data);
        assert!(view.contains("Jobs found"));
        assert!(view.contains("45"));
        assert!(view.contains("Awaiting response"));
        assert!(view.contains("No jobs found yet"));
        assert!(view.contains("No applications sent yet"));
    }

    #[test]
    fn omitted_stats_render_as_zero() {
        let data: DashboardData = serde_json::from_str(r#"{"stats":{}}"#).unwrap();
        let view = render(&data);
        for card in ["Jobs found", "Applications sent", "HR contacts", "Awaiting response"] {
            let line = view
                .lines()
                .find(|l| l.contains(card))
                .unwrap_or_else(|| panic!("missing card: {card}"));
            assert!(line.trim_end().ends_with(" 0"), "{line}");
        }
    }

    #[test]
    fn error_state_renders_no_stat_cards() {
        let view = render_error(
            "Failed to load dashboard",
            &ApiError::Network("connection refused".to_string()),
        );
        assert!(view.contains("Failed to load dashboard"));
        assert!(!view.contains("Jobs found"));
        assert!(!view.contains("Applications sent"));
        assert!(!view.contains("HR contacts"));
        assert!(!view.contains("Awaiting response"));
    }

    #[test]
    fn recent_entries_show_match_score_and_status_label() {
        let data: DashboardData = serde_json::from_str(
            r#"{
                "stats": {"total_jobs": 1},
                "recent_jobs": [{
                    "id": 1,
                    "title": "Senior Frontend Developer",
                    "company": "TechCorp",
                    "location": "Moscow",
                    "match_score": 92.0,
                    "added_at": "2024-01-15T10:00:00Z"
                }],
                "recent_applications": [{
                    "id": 1,
                    "job_title": "Frontend Developer",
                    "company": "DevCompany",
                    "status": "sent",
                    "applied_at": "2024-01-14T14:00:00Z"
                }]
            }"#,
        )
        .unwrap();
        let view = render(&data);
        assert!(view.contains("92% match"));
        assert!(view.contains("[Sent]"));
    }
}
