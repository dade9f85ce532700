// src/pages/resume.rs
//! Resume view and upload.
//!
//! The backend parses and summarizes the uploaded file; this page shows
//! the result and pushes new files up as multipart forms.

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

use crate::core::api_client::ApiClient;
use crate::core::error::ApiError;
use crate::core::query_cache::{QueryCache, QueryKey};
use crate::types::models::ResumeDoc;
use crate::types::response::ResumeUploadResponse;

pub const QUERY: &str = "resume";

const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

pub async fn load(client: &ApiClient, cache: &QueryCache) -> Result<ResumeDoc, ApiError> {
    cache
        .fetch(QueryKey::named(QUERY), || {
            client.get::<ResumeDoc>("/resumes/current")
        })
        .await
}

/// Upload a new resume file and drop the cached copy so the next view
/// shows the freshly parsed document.
pub async fn upload(
    client: &ApiClient,
    cache: &QueryCache,
    file_path: &Path,
) -> Result<ResumeUploadResponse> {
    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid file name: {}", file_path.display()))?
        .to_string();

    let content_type = content_type_for(&file_name)?;

    let content = tokio::fs::read(file_path)
        .await
        .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

    let form = Form::new().part(
        "resume_file",
        Part::bytes(content)
            .file_name(file_name.clone())
            .mime_str(content_type)
            .context("Failed to create multipart")?,
    );

    info!("Uploading resume {}", file_name);
    let response: ResumeUploadResponse = client.post_multipart("/resumes/upload", form).await?;

    cache.invalidate(QUERY);
    Ok(response)
}

pub fn render(resume: &ResumeDoc) -> String {
    let mut out = String::new();
    out.push_str("Resume\n\n");
    let _ = writeln!(out, "  {}", resume.title);

    if let Some(summary) = &resume.summary {
        let _ = writeln!(out, "\n  {}", summary);
    }

    if !resume.key_skills.is_empty() {
        let _ = writeln!(out, "\n  Key skills: {}", resume.key_skills.join(", "));
    } else if !resume.skills.is_empty() {
        let _ = writeln!(out, "\n  Skills: {}", resume.skills.join(", "));
    }

    if !resume.languages.is_empty() {
        let _ = writeln!(out, "  Languages: {}", resume.languages.join(", "));
    }

    if let Some(file_name) = &resume.file_name {
        let updated = resume
            .updated_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let _ = writeln!(out, "\n  File: {} (updated {})", file_name, updated);
    }

    out
}

fn content_type_for(file_name: &str) -> Result<&'static str> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .with_context(|| format!("File has no extension: {}", file_name))?;

    match extension.as_str() {
        "pdf" => Ok("application/pdf"),
        "docx" => {
            Ok("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        "txt" => Ok("text/plain"),
        other => anyhow::bail!(
            "Unsupported file format: .{}. Allowed: {:?}",
            other,
            ALLOWED_EXTENSIONS
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_matches_extension() {
        assert_eq!(content_type_for("cv.pdf").unwrap(), "application/pdf");
        assert_eq!(content_type_for("CV.TXT").unwrap(), "text/plain");
        assert!(content_type_for("cv.exe").is_err());
        assert!(content_type_for("noext").is_err());
    }

    #[test]
    fn renders_summary_and_skills() {
        let resume: ResumeDoc = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Frontend Engineer CV",
                "summary": "Six years of frontend work.",
                "key_skills": ["React", "TypeScript"],
                "languages": ["English", "Russian"],
                "file_name": "cv.pdf"
            }"#,
        )
        .unwrap();
        let view = render(&resume);
        assert!(view.contains("Frontend Engineer CV"));
        assert!(view.contains("Key skills: React, TypeScript"));
        assert!(view.contains("Languages: English, Russian"));
        assert!(view.contains("cv.pdf"));
    }
}
