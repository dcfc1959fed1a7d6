//! Resume heuristics: ordered, independent checks over pasted resume text.
//!
//! Each rule is evaluated on its own; no rule depends on another's outcome.
//! An empty result means the resume passed every check.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Category of a suggestion, carried through to the client for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Fix,
    Add,
    Note,
    Improve,
    Trim,
    Expand,
}

/// A single heuristic-triggered improvement note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.[a-zA-Z]{2,}").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\s().-]{6,}\d").unwrap());
static SKILLS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)skills?:|technical skills|technologies").unwrap());
static EDUCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)education|university|college|school|degree").unwrap());
static EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)experience|work experience|employment").unwrap());

const ACTION_VERBS: &[&str] = &[
    "managed",
    "developed",
    "led",
    "designed",
    "implemented",
    "created",
    "improved",
    "optimized",
    "organized",
    "collaborated",
    "built",
    "launched",
    "maintained",
];

/// Above this word count the resume is flagged as too long.
const MAX_WORDS: usize = 800;
/// Below this word count the resume is flagged as too short.
const MIN_WORDS: usize = 80;

/// Runs every heuristic against the text and returns the triggered
/// suggestions in rule order.
pub fn evaluate(text: &str) -> Vec<Suggestion> {
    let lower = text.to_lowercase();
    let mut suggestions = Vec::new();

    // Contact info: both an email and a phone-like pattern must be present
    if !EMAIL_RE.is_match(text) || !PHONE_RE.is_match(text) {
        suggestions.push(suggestion(
            SuggestionKind::Fix,
            "Add clear contact info",
            "Include a professional email address and a phone number at the top of your resume so employers can reach you quickly.",
        ));
    }

    // Section keywords
    if !SKILLS_RE.is_match(text) {
        suggestions.push(suggestion(
            SuggestionKind::Add,
            "Add a Skills section",
            "List technical and soft skills (e.g., JavaScript, Git, teamwork). This helps recruiters and automated scanners.",
        ));
    }
    if !EDUCATION_RE.is_match(text) {
        suggestions.push(suggestion(
            SuggestionKind::Add,
            "Add Education information",
            "Include your university, degree, and graduation year (or expected year).",
        ));
    }
    if !EXPERIENCE_RE.is_match(text) {
        suggestions.push(suggestion(
            SuggestionKind::Note,
            "Highlight experience or projects",
            "If you have little formal work experience, add project work, contributions, or internships with short descriptions.",
        ));
    }

    // Action verbs
    if !ACTION_VERBS.iter().any(|verb| lower.contains(verb)) {
        suggestions.push(suggestion(
            SuggestionKind::Improve,
            "Use action verbs",
            "Use strong action verbs (e.g., \"developed\", \"led\", \"implemented\") to describe your achievements.",
        ));
    }

    // Numbers / metrics
    if !text.chars().any(|c| c.is_ascii_digit()) {
        suggestions.push(suggestion(
            SuggestionKind::Improve,
            "Quantify achievements",
            "Where possible, add numbers to show impact (e.g., \"reduced load time by 30%\").",
        ));
    }

    // Length checks
    let words = word_count(text);
    if words > MAX_WORDS {
        suggestions.push(suggestion(
            SuggestionKind::Trim,
            "Make it concise",
            "Try to keep your resume short and focused, typically 1 page for early-career applicants.",
        ));
    }
    if words < MIN_WORDS {
        suggestions.push(suggestion(
            SuggestionKind::Expand,
            "Expand details",
            "Your resume is short; add details about projects, responsibilities, or skills.",
        ));
    }

    suggestions
}

/// Whitespace-delimited word count, empty tokens excluded.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn suggestion(kind: SuggestionKind, title: &str, description: &str) -> Suggestion {
    Suggestion {
        kind,
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A resume that satisfies every rule: contact info, all three sections,
    /// an action verb, digits, and a word count inside [80, 800].
    fn passing_resume() -> String {
        let mut text = String::from(
            "Jane Doe\n\
             jane.doe@example.com | +1 (555) 123-4567\n\n\
             Experience\n\
             Developed a ticketing platform used by 1200 students.\n\n\
             Education\n\
             BSc Computer Science, Example University, 2024.\n\n\
             Skills: Rust, JavaScript, SQL, teamwork.\n\n",
        );
        // Pad to clear the minimum word count without tripping the maximum
        for _ in 0..70 {
            text.push_str("detail ");
        }
        text
    }

    #[test]
    fn test_passing_resume_has_no_suggestions() {
        let report = evaluate(&passing_resume());
        assert!(report.is_empty(), "Unexpected suggestions: {report:?}");
    }

    #[test]
    fn test_missing_email_triggers_contact_rule() {
        let text = passing_resume().replace("jane.doe@example.com", "");
        let titles = titles(&evaluate(&text));
        assert!(titles.contains(&"Add clear contact info".to_string()));
    }

    #[test]
    fn test_missing_phone_triggers_contact_rule() {
        let text = passing_resume().replace("+1 (555) 123-4567", "");
        let titles = titles(&evaluate(&text));
        assert!(titles.contains(&"Add clear contact info".to_string()));
    }

    #[test]
    fn test_email_alone_is_not_enough() {
        // Email present, phone absent: the contact rule requires both
        let text = "jane@example.com experience education skills: developed detail";
        let report = evaluate(text);
        assert_eq!(report[0].title, "Add clear contact info");
        assert_eq!(report[0].kind, SuggestionKind::Fix);
    }

    #[test]
    fn test_missing_skills_section() {
        let text = passing_resume().replace("Skills:", "Strengths");
        let titles = titles(&evaluate(&text));
        assert!(titles.contains(&"Add a Skills section".to_string()));
    }

    #[test]
    fn test_technologies_counts_as_skills_section() {
        let text = passing_resume().replace("Skills:", "Technologies");
        let titles = titles(&evaluate(&text));
        assert!(!titles.contains(&"Add a Skills section".to_string()));
    }

    #[test]
    fn test_missing_education() {
        let text = passing_resume()
            .replace("Education", "Background")
            .replace("University", "Institute")
            .replace("BSc Computer Science", "Computing");
        let titles = titles(&evaluate(&text));
        assert!(titles.contains(&"Add Education information".to_string()));
    }

    #[test]
    fn test_missing_experience() {
        let text = passing_resume().replace("Experience", "History");
        let titles = titles(&evaluate(&text));
        assert!(titles.contains(&"Highlight experience or projects".to_string()));
    }

    #[test]
    fn test_missing_action_verbs() {
        let text = passing_resume().replace("Developed", "Was responsible for");
        let titles = titles(&evaluate(&text));
        assert!(titles.contains(&"Use action verbs".to_string()));
    }

    #[test]
    fn test_action_verb_match_is_case_insensitive() {
        let text = passing_resume().replace("Developed", "LAUNCHED");
        let titles = titles(&evaluate(&text));
        assert!(!titles.contains(&"Use action verbs".to_string()));
    }

    #[test]
    fn test_missing_digits() {
        let text = "jane@example.com experience education skills: developed detail";
        let titles = titles(&evaluate(text));
        assert!(titles.contains(&"Quantify achievements".to_string()));
    }

    #[test]
    fn test_too_long_resume() {
        let mut text = passing_resume();
        for _ in 0..800 {
            text.push_str("filler ");
        }
        let titles = titles(&evaluate(&text));
        assert!(titles.contains(&"Make it concise".to_string()));
        assert!(!titles.contains(&"Expand details".to_string()));
    }

    #[test]
    fn test_too_short_resume() {
        let text = "jane@example.com +1 (555) 123-4567 experience education skills: developed 12";
        let titles = titles(&evaluate(text));
        assert!(titles.contains(&"Expand details".to_string()));
        assert!(!titles.contains(&"Make it concise".to_string()));
    }

    #[test]
    fn test_suggestions_follow_rule_order() {
        // Trip contact, skills, and digits at once; order must hold
        let mut text = String::from("experience education detail ");
        for _ in 0..90 {
            text.push_str("word ");
        }
        let report = evaluate(&text);
        let titles = titles(&report);
        assert_eq!(
            titles,
            vec![
                "Add clear contact info".to_string(),
                "Add a Skills section".to_string(),
                "Use action verbs".to_string(),
                "Quantify achievements".to_string(),
            ]
        );
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("one  two\n\nthree\t four "), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&SuggestionKind::Improve).unwrap();
        assert_eq!(json, "\"improve\"");
    }

    fn titles(suggestions: &[Suggestion]) -> Vec<String> {
        suggestions.iter().map(|s| s.title.clone()).collect()
    }
}
