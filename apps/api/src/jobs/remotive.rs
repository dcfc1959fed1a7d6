//! Remotive client: the single outbound HTTP call in the service.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::jobs::model::{RemotiveJob, RemotiveResponse};
use crate::jobs::JobSource;

#[derive(Debug, Error)]
pub enum JobsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16 },
}

/// Client for the Remotive remote-jobs API.
///
/// One GET per search, no retries: a failed call is reported to the handler,
/// which serves the example jobs instead.
#[derive(Clone)]
pub struct RemotiveClient {
    client: Client,
    base_url: String,
}

impl RemotiveClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl JobSource for RemotiveClient {
    async fn search(&self, query: &str) -> Result<Vec<RemotiveJob>, JobsError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("search", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobsError::Api {
                status: status.as_u16(),
            });
        }

        let body: RemotiveResponse = response.json().await?;

        debug!("Upstream returned {} jobs for '{query}'", body.jobs.len());

        Ok(body.jobs)
    }
}
