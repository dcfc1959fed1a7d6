//! Hardcoded example jobs served when the upstream API cannot be reached.

use chrono::Utc;

use crate::jobs::model::RemotiveJob;

/// Notice attached to fallback responses.
pub const FALLBACK_NOTICE: &str =
    "Unable to fetch jobs right now. Showing a couple of example jobs.";

/// Builds the example jobs, echoing the query and location so the list still
/// looks relevant to what the user asked for.
pub fn sample_jobs(query: &str, location: &str) -> Vec<RemotiveJob> {
    let location = if location.trim().is_empty() {
        "Remote".to_string()
    } else {
        location.to_string()
    };
    let title = if query.trim().is_empty() {
        "Software Engineer".to_string()
    } else {
        query.to_string()
    };

    vec![
        RemotiveJob {
            title,
            company_name: "Example Co".to_string(),
            candidate_required_location: location.clone(),
            description: "An example job used when the API cannot be reached.".to_string(),
            url: "https://example.com".to_string(),
            job_type: "Full-time".to_string(),
            publication_date: Some(Utc::now()),
        },
        RemotiveJob {
            title: "Frontend Developer".to_string(),
            company_name: "Acme".to_string(),
            candidate_required_location: location,
            description: "Build interfaces for web apps.".to_string(),
            url: "https://example.com".to_string(),
            job_type: "Contract".to_string(),
            publication_date: Some(Utc::now()),
        },
    ]
}
