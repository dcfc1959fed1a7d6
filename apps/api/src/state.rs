use std::sync::Arc;

use crate::config::Config;
use crate::jobs::JobSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable job source. Default: RemotiveClient. Tests swap in a stub.
    pub jobs: Arc<dyn JobSource>,
    pub config: Config,
}
