pub mod pipeline;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use pipeline::MatchEngine;
pub use scoring::{deterministic_score, ScoreBreakdown, ScoreComponents, ScoringMethod};
