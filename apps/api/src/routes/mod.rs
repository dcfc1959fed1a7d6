pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis;
use crate::jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job search API
        .route("/api/v1/jobs/search", get(jobs::handlers::handle_search))
        // Resume analysis API
        .route(
            "/api/v1/resume/analyze",
            post(analysis::handlers::handle_analyze),
        )
        .route(
            "/api/v1/resume/match",
            post(analysis::handlers::handle_match),
        )
        .with_state(state)
}
