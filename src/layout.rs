// src/layout.rs
//! Navigation chrome shared by every private page.
//!
//! Icons are enumerated tags resolved through a lookup table, never
//! renderable values passed around as data.

use crate::router::Route;
use crate::types::models::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Document,
    Briefcase,
    PaperAirplane,
    Users,
    Cog,
    UserCircle,
    Clock,
    Warning,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::Document => "🗎",
            Icon::Briefcase => "💼",
            Icon::PaperAirplane => "✈",
            Icon::Users => "👥",
            Icon::Cog => "⚙",
            Icon::UserCircle => "👤",
            Icon::Clock => "🕐",
            Icon::Warning => "⚠",
        }
    }
}

pub struct NavItem {
    pub name: &'static str,
    pub route: Route,
    pub icon: Icon,
}

pub const NAVIGATION: [NavItem; 6] = [
    NavItem {
        name: "Dashboard",
        route: Route::Dashboard,
        icon: Icon::Home,
    },
    NavItem {
        name: "Resume",
        route: Route::Resume,
        icon: Icon::Document,
    },
    NavItem {
        name: "Jobs",
        route: Route::Jobs,
        icon: Icon::Briefcase,
    },
    NavItem {
        name: "Applications",
        route: Route::Applications,
        icon: Icon::PaperAirplane,
    },
    NavItem {
        name: "HR Contacts",
        route: Route::HrContacts,
        icon: Icon::Users,
    },
    NavItem {
        name: "Settings",
        route: Route::Settings,
        icon: Icon::Cog,
    },
];

/// Render the sidebar-equivalent header: app title, nav entries with the
/// active route marked, and the signed-in user.
pub fn render_chrome(user: Option<&UserProfile>, active: Route) -> String {
    let mut out = String::new();
    out.push_str("Job Assistant\n");

    let nav = NAVIGATION
        .iter()
        .map(|item| {
            let marker = if item.route == active { "▸" } else { " " };
            format!("{}{} {}", marker, item.icon.glyph(), item.name)
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&nav);
    out.push('\n');

    if let Some(user) = user {
        out.push_str(&format!(
            "{} {} <{}>\n",
            Icon::UserCircle.glyph(),
            user.full_name,
            user.email
        ));
    }

    out.push_str(&"-".repeat(72));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_marks_the_active_route() {
        let chrome = render_chrome(None, Route::Jobs);
        assert!(chrome.contains("▸💼 Jobs"));
        assert!(!chrome.contains("▸⌂ Dashboard"));
    }

    #[test]
    fn chrome_shows_the_signed_in_user() {
        let user: UserProfile = serde_json::from_str(
            r#"{"id":1,"email":"user@x.com","full_name":"Test User"}"#,
        )
        .unwrap();
        let chrome = render_chrome(Some(&user), Route::Dashboard);
        assert!(chrome.contains("Test User <user@x.com>"));
    }
}
