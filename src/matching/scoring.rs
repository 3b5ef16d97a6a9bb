use serde::{Deserialize, Serialize};

use super::skills::{candidate_skill_set, skill_coverage};
use super::weights::SCORE_WEIGHTS;
use crate::experience::parse_experience_years;
use crate::normalize::normalize_list;
use crate::relevance::{project_relevance, DEFAULT_RELEVANCE_THRESHOLD};
use crate::{CandidateProfile, JobRequirement};

/// Which scoring path produced a breakdown. Oracle failures are surfaced to
/// callers only through this tag, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMethod {
    Deterministic,
    Oracle,
}

/// The five fixed sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub required_coverage: f64,
    pub preferred_coverage: f64,
    pub semantic_fit: f64,
    pub project_relevance: f64,
    pub experience_fit: f64,
}

/// Result of scoring one (candidate, job) pair. Constructed fresh per call,
/// never mutated afterwards, and serializable as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Overall fit in [0, 100]. For the deterministic method this is always
    /// exactly the fixed-weight combination of `components`.
    pub overall_score: f64,
    pub components: ScoreComponents,
    pub explanations: Vec<String>,
    pub method: ScoringMethod,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn semantic_fit(keys: &[String], resume_text: &str) -> f64 {
    if keys.is_empty() {
        // No reliable keyword signal at all; stay neutral.
        return 50.0;
    }
    let haystack = resume_text.to_lowercase();
    let hits = keys
        .iter()
        .filter(|k| haystack.contains(&k.to_lowercase()))
        .count();
    round2(100.0 * hits as f64 / keys.len() as f64)
}

fn experience_fit(candidate_years: u32, experience_level: Option<&str>) -> f64 {
    let required = experience_level.and_then(parse_experience_years);
    match required {
        // No usable requirement; neutral rather than zero.
        None | Some(0) => 50.0,
        Some(required) => {
            if candidate_years >= required {
                100.0
            } else {
                round2(100.0 * candidate_years as f64 / required as f64)
            }
        }
    }
}

/// The deterministic scorer: reproducible, self-contained, and the fallback
/// of record whenever the oracle path is unavailable or malformed.
///
/// Never fails — incomplete inputs resolve to the neutral defaults (empty
/// requirement lists are vacuously covered, unknown experience scores 50.0),
/// so the worst case is a low-confidence but structurally valid breakdown.
pub fn deterministic_score(candidate: &CandidateProfile, job: &JobRequirement) -> ScoreBreakdown {
    let cand_skills = candidate_skill_set(&candidate.skills);
    let required = skill_coverage(&job.required_skills, &cand_skills);
    let preferred = skill_coverage(&job.preferred_skills, &cand_skills);

    // Concatenated, not deduplicated: a skill listed as both required and
    // preferred counts twice in the keyword denominator.
    let mut keys = normalize_list(&job.required_skills);
    keys.extend(normalize_list(&job.preferred_skills));
    let semantic = semantic_fit(&keys, &candidate.resume_text);

    let projects = round2(
        project_relevance(
            &candidate.projects,
            &job.responsibilities,
            DEFAULT_RELEVANCE_THRESHOLD,
        ) * 100.0,
    );

    let experience = experience_fit(candidate.experience_years, job.experience_level.as_deref());

    let components = ScoreComponents {
        required_coverage: required.percentage,
        preferred_coverage: preferred.percentage,
        semantic_fit: semantic,
        project_relevance: projects,
        experience_fit: experience,
    };

    ScoreBreakdown {
        overall_score: combine(&components),
        explanations: explanations(&components),
        components,
        method: ScoringMethod::Deterministic,
    }
}

/// Fixed-weight combination of the five components, rounded to 2 decimals.
pub fn combine(components: &ScoreComponents) -> f64 {
    round2(
        components.required_coverage * SCORE_WEIGHTS.required
            + components.preferred_coverage * SCORE_WEIGHTS.preferred
            + components.semantic_fit * SCORE_WEIGHTS.semantic
            + components.project_relevance * SCORE_WEIGHTS.projects
            + components.experience_fit * SCORE_WEIGHTS.experience,
    )
}

// Whole numbers keep one decimal ("100.0%") so explanation text stays
// drop-in compatible with the backend's existing output.
fn fmt_component(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn explanations(components: &ScoreComponents) -> Vec<String> {
    vec![
        format!("Required skill match: {}%", fmt_component(components.required_coverage)),
        format!("Preferred skill match: {}%", fmt_component(components.preferred_coverage)),
        format!("Project relevance: {}%", fmt_component(components.project_relevance)),
        format!("Experience fit: {}%", fmt_component(components.experience_fit)),
    ]
}
