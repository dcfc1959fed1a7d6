//! JD match scoring: token overlap percentage plus skill gap detection
//! against a fixed skill vocabulary.

use serde::{Deserialize, Serialize};

/// Skill vocabulary scanned in both the job description and the resume.
/// Multi-word entries match as plain substrings.
pub const SKILL_KEYWORDS: &[&str] = &[
    "javascript",
    "html",
    "css",
    "react",
    "node",
    "python",
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "planning",
    "excel",
    "sql",
    "design",
    "networking",
    "linux",
];

/// Overlap report between a resume and a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub score_percent: u32,
    pub required_skills: Vec<String>,
    pub candidate_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Scores a resume against a job description.
///
/// The match percentage is the share of whitespace-delimited job-description
/// tokens found as a substring of the resume (both lowercased), rounded to
/// the nearest integer. A job description with no tokens scores 0.
///
/// Skill lists are substring scans over [`SKILL_KEYWORDS`], in vocabulary
/// order; `missing_skills` is required minus candidate.
pub fn compute_match(job_description: &str, resume: &str) -> MatchReport {
    let jd_lower = job_description.to_lowercase();
    let resume_lower = resume.to_lowercase();

    let mut total = 0usize;
    let mut found = 0usize;
    for token in jd_lower.split_whitespace() {
        total += 1;
        if resume_lower.contains(token) {
            found += 1;
        }
    }

    let score_percent = if total == 0 {
        0
    } else {
        ((found as f64 / total as f64) * 100.0).round() as u32
    };

    let required_skills = detect_skills(&jd_lower);
    let candidate_skills = detect_skills(&resume_lower);
    let missing_skills: Vec<String> = required_skills
        .iter()
        .filter(|skill| !candidate_skills.contains(*skill))
        .cloned()
        .collect();

    MatchReport {
        score_percent,
        required_skills,
        candidate_skills,
        missing_skills,
    }
}

/// Returns the vocabulary entries present in the lowercased text, in
/// vocabulary order.
fn detect_skills(lower: &str) -> Vec<String> {
    SKILL_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
