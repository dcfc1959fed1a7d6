use anyhow::{Context, Result};

/// Default upstream endpoint for job searches.
pub const DEFAULT_JOBS_API_URL: &str = "https://remotive.com/api/remote-jobs";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service boots without a .env file.
#[derive(Debug, Clone)]
pub struct Config {
    pub jobs_api_url: String,
    pub port: u16,
    pub http_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jobs_api_url: std::env::var("JOBS_API_URL")
                .unwrap_or_else(|_| DEFAULT_JOBS_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("HTTP_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
