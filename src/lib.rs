pub mod experience;
pub mod extraction;
pub mod external;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod oracle;
pub mod relevance;

use serde::{Deserialize, Serialize};

pub use matching::pipeline::MatchEngine;
pub use matching::scoring::{deterministic_score, ScoreBreakdown, ScoreComponents, ScoringMethod};
pub use oracle::{GenerativeOracle, OracleConfig, OracleError, OracleScorer};

// Commonly used data models for the scoring functions. Both are immutable
// inputs owned by the caller; a scoring call never mutates or retains them.

/// Structured candidate profile, as produced by resume parsing upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    /// Full extracted resume text. May be empty; used only for keyword
    /// presence checks.
    #[serde(default)]
    pub resume_text: String,
}

/// Structured job role, as produced by JD parsing upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    /// Free-text experience requirement ("3-5 years", "Senior", "4").
    /// Normalized by [`experience::parse_experience_years`] before use.
    #[serde(default)]
    pub experience_level: Option<String>,
}
