//! Axum route handlers for the Job Search API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::jobs::filter::{filter_by_location, summarize_jobs};
use crate::jobs::mock::{sample_jobs, FALLBACK_NOTICE};
use crate::jobs::model::JobSummary;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub jobs: Vec<JobSummary>,
    pub total: usize,
    pub fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// GET /api/v1/jobs/search?search=...&location=...
///
/// Queries the upstream job source, filters by location, and returns capped
/// summaries. Upstream failure degrades to the example jobs with a notice;
/// the endpoint never returns a 5xx for it.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = params.search.trim();
    let location = params.location.trim();

    // Validate before any outbound call
    if query.is_empty() {
        return Err(AppError::Validation(
            "search cannot be empty: enter a job title or keyword".to_string(),
        ));
    }

    let (jobs, fallback) = match state.jobs.search(query).await {
        Ok(jobs) => (jobs, false),
        Err(e) => {
            warn!("Job fetch failed, serving example jobs: {e}");
            (sample_jobs(query, location), true)
        }
    };

    let jobs = summarize_jobs(filter_by_location(jobs, location));
    let total = jobs.len();

    Ok(Json(SearchResponse {
        jobs,
        total,
        fallback,
        notice: fallback.then(|| FALLBACK_NOTICE.to_string()),
    }))
}
