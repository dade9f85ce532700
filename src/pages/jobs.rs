// src/pages/jobs.rs
//! Matched job postings, read-only from the client's perspective.

use std::fmt::Write as _;

use crate::core::api_client::ApiClient;
use crate::core::error::ApiError;
use crate::core::query_cache::{QueryCache, QueryKey};
use crate::types::models::Job;

pub const QUERY: &str = "jobs";

pub async fn load(client: &ApiClient, cache: &QueryCache) -> Result<Vec<Job>, ApiError> {
    cache
        .fetch(QueryKey::named(QUERY), || client.get::<Vec<Job>>("/jobs"))
        .await
}

pub fn render(jobs: &[Job]) -> String {
    let mut out = String::new();
    out.push_str("Jobs\n\n");

    if jobs.is_empty() {
        out.push_str("  No matched jobs yet.\n");
        return out;
    }

    for job in jobs {
        let score = job
            .match_score
            .map(|s| format!("{:.0}%", s))
            .unwrap_or_else(|| "—".to_string());
        let _ = writeln!(
            out,
            "  {:<5} {:<32} {:<20} {:<18} {:>5}  {}",
            job.id,
            job.title,
            job.company,
            job.location.as_deref().unwrap_or(""),
            score,
            job.added_at.format("%Y-%m-%d")
        );
        if let Some(url) = &job.external_url {
            let _ = writeln!(out, "        {}", url);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_with_match_score() {
        let jobs: Vec<Job> = serde_json::from_str(
            r#"[{
                "id": 2,
                "title": "React Developer",
                "company": "StartupXYZ",
                "location": "Saint Petersburg",
                "match_score": 88.0,
                "external_url": "https://hh.ru/vacancy/2",
                "added_at": "2024-01-15T09:30:00Z"
            }]"#,
        )
        .unwrap();
        let view = render(&jobs);
        assert!(view.contains("React Developer"));
        assert!(view.contains("88%"));
        assert!(view.contains("https://hh.ru/vacancy/2"));
    }

    #[test]
    fn empty_list_renders_a_hint() {
        assert!(render(&[]).contains("No matched jobs yet"));
    }
}
