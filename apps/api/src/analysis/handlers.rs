//! Axum route handlers for the Resume Analysis API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis::heuristics::{self, Suggestion};
use crate::analysis::match_score::{compute_match, MatchReport};
use crate::analysis::strength::{compute_strength, StrengthReport};
use crate::errors::AppError;
use crate::jobs::sanitize::strip_html;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub suggestions: Vec<Suggestion>,
    pub strength: StrengthReport,
    pub word_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub report: MatchReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/analyze
///
/// Runs the heuristic checks and strength meter over pasted resume text.
/// An empty suggestion list means the resume passed every check.
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty: paste your resume text to analyze".to_string(),
        ));
    }

    let suggestions = heuristics::evaluate(&request.resume_text);
    let strength = compute_strength(&request.resume_text);
    let word_count = heuristics::word_count(&request.resume_text);

    Ok(Json(AnalyzeResponse {
        suggestions,
        strength,
        word_count,
    }))
}

/// POST /api/v1/resume/match
///
/// Scores pasted resume text against a job description. The description is
/// HTML-stripped first so listings copied straight from search results score
/// the same as plain text.
pub async fn handle_match(
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let description = strip_html(&request.job_description);
    let report = compute_match(&description, &request.resume_text);

    Ok(Json(MatchResponse { report }))
}
