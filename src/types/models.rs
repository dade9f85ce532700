// src/types/models.rs
//! Domain entities exchanged with the job-assistant backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Profile of the signed-in user, replaced wholesale on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,

    // Contact settings
    #[serde(default)]
    pub telegram_chat_id: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,

    // Job search preferences
    #[serde(default)]
    pub job_search_enabled: bool,
    #[serde(default)]
    pub search_keywords: Option<String>,
    #[serde(default)]
    pub preferred_locations: Option<String>,
    #[serde(default)]
    pub salary_min: Option<String>,
    #[serde(default)]
    pub salary_max: Option<String>,
}

/// Partial profile update. Only set fields are sent on the wire.
#[derive(Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_chat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_search_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_locations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.phone_number.is_none()
            && self.telegram_chat_id.is_none()
            && self.job_search_enabled.is_none()
            && self.search_keywords.is_none()
            && self.preferred_locations.is_none()
            && self.salary_min.is_none()
            && self.salary_max.is_none()
    }
}

/// A matched job posting. Read-only on the client; the backend owns
/// search and match scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
    /// Backend-computed relevance, 0-100.
    #[serde(default)]
    pub match_score: Option<f64>,
    pub added_at: DateTime<Utc>,
}

/// Application status tag. Transitions are owned by the backend; the
/// client only maps each tag to a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Sent,
    Pending,
    Rejected,
    Interview,
    /// Anything the backend sends that this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl ApplicationStatus {
    /// Display label. Unrecognized statuses fall back to the pending label.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Sent => "Sent",
            ApplicationStatus::Pending | ApplicationStatus::Unknown => "Pending",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Interview => "Interview",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        ApplicationStatus::Pending
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrContact {
    pub id: i64,
    pub company: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub contacted: bool,
    #[serde(default)]
    pub last_contact_date: Option<String>,
    #[serde(default)]
    pub response_received: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

/// The user's current resume as parsed and summarized by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDoc {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub key_skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Headline counters for the dashboard. Every field defaults to zero
/// when the backend omits it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_jobs: u32,
    pub total_applications: u32,
    pub hr_contacts: u32,
    pub pending_applications: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_jobs: Vec<Job>,
    pub recent_applications: Vec<Application>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_stats_default_to_zero_for_omitted_fields() {
        let data: DashboardData =
            serde_json::from_str(r#"{"stats":{"total_jobs":5}}"#).unwrap();
        assert_eq!(data.stats.total_jobs, 5);
        assert_eq!(data.stats.total_applications, 0);
        assert_eq!(data.stats.hr_contacts, 0);
        assert_eq!(data.stats.pending_applications, 0);
        assert!(data.recent_jobs.is_empty());
        assert!(data.recent_applications.is_empty());
    }

    #[test]
    fn unrecognized_status_falls_back_to_pending_label() {
        let app: Application = serde_json::from_str(
            r#"{"id":1,"job_title":"Dev","company":"Acme","status":"ghosted"}"#,
        )
        .unwrap();
        assert_eq!(app.status, ApplicationStatus::Unknown);
        assert_eq!(app.status.label(), "Pending");
    }

    #[test]
    fn missing_status_defaults_to_pending() {
        let app: Application =
            serde_json::from_str(r#"{"id":2,"job_title":"Dev","company":"Acme"}"#).unwrap();
        assert_eq!(app.status, ApplicationStatus::Pending);
    }

    #[test]
    fn known_statuses_keep_their_labels() {
        assert_eq!(ApplicationStatus::Sent.label(), "Sent");
        assert_eq!(ApplicationStatus::Interview.label(), "Interview");
        assert_eq!(ApplicationStatus::Rejected.label(), "Rejected");
    }

    #[test]
    fn profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            full_name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"full_name":"Jane Doe"}"#);
    }

    #[test]
    fn minimal_profile_deserializes_with_defaults() {
        let user: UserProfile = serde_json::from_str(
            r#"{"id":1,"email":"user@x.com","full_name":"Test User"}"#,
        )
        .unwrap();
        assert!(user.is_active);
        assert!(!user.job_search_enabled);
        assert!(user.phone_number.is_none());
    }
}
