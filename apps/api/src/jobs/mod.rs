// Job search: the Remotive client, result post-processing, and the mock
// fallback. The one outbound HTTP call in the service lives in remotive.rs;
// everything else here is pure.

pub mod filter;
pub mod handlers;
pub mod mock;
pub mod model;
pub mod remotive;
pub mod sanitize;

use async_trait::async_trait;

use crate::jobs::model::RemotiveJob;
use crate::jobs::remotive::JobsError;

/// The job source trait. Implement this to swap the upstream provider (or a
/// test stub) without touching the search handler.
///
/// Carried in `AppState` as `Arc<dyn JobSource>`.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<RemotiveJob>, JobsError>;
}
