//! Pure post-processing of search results: location filtering, capping, and
//! summarization for the response body.

use crate::jobs::model::{JobSummary, RemotiveJob};
use crate::jobs::sanitize::{strip_html, truncate_chars};

/// Hard cap on returned results.
pub const MAX_RESULTS: usize = 20;
/// Character budget for description previews.
pub const PREVIEW_CHARS: usize = 250;
/// Shown when a job carries no location of its own.
const DEFAULT_LOCATION: &str = "Remote/Any";

/// Keeps jobs whose location, title, or company contains the location filter
/// (case-insensitive). A blank filter keeps everything.
pub fn filter_by_location(jobs: Vec<RemotiveJob>, location: &str) -> Vec<RemotiveJob> {
    let needle = location.trim().to_lowercase();
    if needle.is_empty() {
        return jobs;
    }
    jobs.into_iter()
        .filter(|job| {
            job.candidate_required_location
                .to_lowercase()
                .contains(&needle)
                || job.title.to_lowercase().contains(&needle)
                || job.company_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Caps the list at [`MAX_RESULTS`] and summarizes each job.
pub fn summarize_jobs(jobs: Vec<RemotiveJob>) -> Vec<JobSummary> {
    jobs.into_iter().take(MAX_RESULTS).map(summarize).collect()
}

fn summarize(job: RemotiveJob) -> JobSummary {
    let text = strip_html(&job.description);
    let description_preview = if text.chars().count() > PREVIEW_CHARS {
        format!("{}...", truncate_chars(&text, PREVIEW_CHARS))
    } else {
        text
    };
    let location = if job.candidate_required_location.trim().is_empty() {
        DEFAULT_LOCATION.to_string()
    } else {
        job.candidate_required_location
    };

    JobSummary {
        title: job.title,
        company_name: job.company_name,
        location,
        description_preview,
        url: job.url,
        job_type: job.job_type,
        publication_date: job.publication_date,
    }
}
