// src/pages/hr_contacts.rs
//! HR contact book with engagement tracking.

use std::fmt::Write as _;

use crate::core::api_client::ApiClient;
use crate::core::error::ApiError;
use crate::core::query_cache::{QueryCache, QueryKey};
use crate::types::models::HrContact;

pub const QUERY: &str = "hr_contacts";

pub async fn load(client: &ApiClient, cache: &QueryCache) -> Result<Vec<HrContact>, ApiError> {
    cache
        .fetch(QueryKey::named(QUERY), || {
            client.get::<Vec<HrContact>>("/hr-contacts")
        })
        .await
}

pub fn render(contacts: &[HrContact]) -> String {
    let mut out = String::new();
    out.push_str("HR Contacts\n\n");

    if contacts.is_empty() {
        out.push_str("  No HR contacts yet.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "  {:<20} {:<18} {:<26} {:<18} {:<10} {:<8}",
        "Company", "Name", "Email", "Position", "Contacted", "Replied"
    );
    let _ = writeln!(out, "  {}", "-".repeat(102));

    for contact in contacts {
        let _ = writeln!(
            out,
            "  {:<20} {:<18} {:<26} {:<18} {:<10} {:<8}",
            contact.company,
            contact.name.as_deref().unwrap_or("—"),
            contact.email.as_deref().unwrap_or("—"),
            contact.position.as_deref().unwrap_or("—"),
            if contact.contacted { "yes" } else { "no" },
            if contact.response_received { "yes" } else { "no" },
        );
    }

    out
}
