//! Wire types for the Remotive remote-jobs API and the summarized job shape
//! returned to clients.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level Remotive response body.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotiveResponse {
    #[serde(default)]
    pub jobs: Vec<RemotiveJob>,
}

/// A single job as returned by the Remotive API. Every field tolerates being
/// absent on the wire; missing strings come through empty and get placeholder
/// treatment during summarization.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotiveJob {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub candidate_required_location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub publication_date: Option<DateTime<Utc>>,
}

/// The summarized job shape returned by the search endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct JobSummary {
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub description_preview: String,
    pub url: String,
    pub job_type: String,
    pub publication_date: Option<DateTime<Utc>>,
}

/// Accepts RFC 3339 or Remotive's naive `%Y-%m-%dT%H:%M:%S` timestamps.
/// Anything else becomes `None`: a malformed date must not sink the whole
/// response into the mock fallback.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_publication_date))
}

fn parse_publication_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339_date() {
        let parsed = parse_publication_date("2024-05-01T12:00:00Z").unwrap();
        assert_eq!(parsed.hour(), 12);
    }

    #[test]
    fn test_parse_naive_remotive_date() {
        let parsed = parse_publication_date("2023-06-20T07:58:14").unwrap();
        assert_eq!(parsed.hour(), 7);
    }

    #[test]
    fn test_unparseable_date_is_none() {
        assert!(parse_publication_date("yesterday").is_none());
        assert!(parse_publication_date("").is_none());
    }

    #[test]
    fn test_job_deserializes_with_missing_fields() {
        let job: RemotiveJob = serde_json::from_str(r#"{"title": "Rust Engineer"}"#).unwrap();
        assert_eq!(job.title, "Rust Engineer");
        assert!(job.company_name.is_empty());
        assert!(job.publication_date.is_none());
    }

    #[test]
    fn test_job_deserializes_full_record() {
        let json = r#"{
            "title": "Backend Developer",
            "company_name": "Acme",
            "candidate_required_location": "Europe",
            "description": "<p>Build APIs</p>",
            "url": "https://example.com/job/1",
            "job_type": "full_time",
            "publication_date": "2023-06-20T07:58:14"
        }"#;
        let job: RemotiveJob = serde_json::from_str(json).unwrap();
        assert_eq!(job.company_name, "Acme");
        assert!(job.publication_date.is_some());
    }

    #[test]
    fn test_malformed_date_does_not_fail_deserialization() {
        let json = r#"{"title": "T", "publication_date": "not a date"}"#;
        let job: RemotiveJob = serde_json::from_str(json).unwrap();
        assert!(job.publication_date.is_none());
    }

    #[test]
    fn test_response_defaults_to_empty_jobs() {
        let response: RemotiveResponse = serde_json::from_str("{}").unwrap();
        assert!(response.jobs.is_empty());
    }
}
