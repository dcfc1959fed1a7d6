//! Resume strength meter: a coarse 0-100 score from length and section
//! presence. Coarser than the heuristics on purpose; it feeds a progress bar,
//! not the suggestion list.

use serde::{Deserialize, Serialize};

/// Minimum character count for the length component to award its points.
const LENGTH_THRESHOLD: usize = 150;

const LENGTH_POINTS: u8 = 40;
const SECTION_POINTS: u8 = 20;

/// Strength meter output. The component flags let the client explain the bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthReport {
    pub score_percent: u8,
    pub has_length: bool,
    pub has_skills: bool,
    pub has_experience: bool,
    pub has_education: bool,
}

/// Computes the strength score: 40 points for substantial length, 20 each for
/// a skills, experience, and education mention (case-insensitive substrings).
pub fn compute_strength(text: &str) -> StrengthReport {
    let lower = text.to_lowercase();

    let has_length = text.chars().count() > LENGTH_THRESHOLD;
    let has_skills = lower.contains("skills");
    let has_experience = lower.contains("experience");
    let has_education = lower.contains("education");

    let mut score = 0u8;
    if has_length {
        score += LENGTH_POINTS;
    }
    if has_skills {
        score += SECTION_POINTS;
    }
    if has_experience {
        score += SECTION_POINTS;
    }
    if has_education {
        score += SECTION_POINTS;
    }

    StrengthReport {
        score_percent: score,
        has_length,
        has_skills,
        has_experience,
        has_education,
    }
}
