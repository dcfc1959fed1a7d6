// Resume analysis engine.
// Implements: heuristic suggestions, strength meter, JD match scoring.
// Everything outside handlers.rs is pure and synchronous.

pub mod handlers;
pub mod heuristics;
pub mod match_score;
pub mod strength;
