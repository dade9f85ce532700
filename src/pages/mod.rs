// src/pages/mod.rs
//! Page view models. Each page declares its query name, fetches its own
//! data through the shared [`QueryCache`](crate::core::query_cache::QueryCache),
//! and renders either a data view or an inline error view. No page
//! coordinates with another.

pub mod applications;
pub mod dashboard;
pub mod hr_contacts;
pub mod jobs;
pub mod resume;
pub mod settings;

use crate::core::error::ApiError;
use crate::layout::Icon;

/// Shared inline error view: a heading and the failure, nothing else.
/// Error views never render data cards.
pub fn render_error(title: &str, err: &ApiError) -> String {
    format!("{} {}\n  {}\n", Icon::Warning.glyph(), title, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_view_names_the_failure() {
        let view = render_error(
            "Failed to load dashboard",
            &ApiError::Network("connection refused".to_string()),
        );
        assert!(view.contains("Failed to load dashboard"));
        assert!(view.contains("connection refused"));
    }
}
