use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::matching::scoring::{ScoreBreakdown, ScoreComponents, ScoringMethod};
use crate::normalize::normalize_list;
use crate::{CandidateProfile, JobRequirement};

const MAX_PROJECTS_IN_PROMPT: usize = 6;
const MAX_RESPONSIBILITIES_IN_PROMPT: usize = 12;
const MAX_SNIPPET_CHARS: usize = 2000;

/// Failures on the oracle path. Every variant is recoverable: the match
/// pipeline answers them by falling back to the deterministic scorer, and
/// callers only ever see the `method` tag flip.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle not configured")]
    Unavailable,
    #[error("oracle generation failed: {0}")]
    Generation(String),
    #[error("malformed oracle response: {0}")]
    Malformed(String),
}

/// The whole surface the core expects from a generative-text service:
/// one prompt in, free text out. The text is untrusted — it may be invalid
/// JSON or garbage, and the adapter must tolerate both.
pub trait GenerativeOracle: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, OracleError>;
}

/// Oracle configuration, passed in explicitly at construction. An
/// unconfigured adapter (no API key, or disabled) short-circuits every
/// attempt to `OracleError::Unavailable` so the pipeline goes straight to
/// the deterministic scorer.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            model: "gemini-2.5-pro".into(),
        }
    }
}

impl OracleConfig {
    pub fn from_env() -> Self {
        let enabled = match std::env::var("TG_ORACLE_ENABLED") {
            Ok(val) => matches!(val.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
            Err(_) => true,
        };

        Self {
            enabled,
            api_key: std::env::var("TG_ORACLE_API_KEY").ok().filter(|k| !k.is_empty()),
            model: std::env::var("TG_ORACLE_MODEL").unwrap_or_else(|_| "gemini-2.5-pro".into()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.enabled && self.api_key.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct OraclePayload {
    score: f64,
    components: ScoreComponents,
    #[serde(default)]
    explanations: Vec<String>,
}

/// Scores a (candidate, job) pair through an external generative oracle,
/// returning the same breakdown shape as the deterministic scorer with
/// `method = Oracle`.
pub struct OracleScorer {
    config: OracleConfig,
    client: Box<dyn GenerativeOracle>,
}

impl OracleScorer {
    pub fn new(config: OracleConfig, client: Box<dyn GenerativeOracle>) -> Self {
        Self { config, client }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Makes exactly one oracle attempt. Any failure — unconfigured client,
    /// transport error, or a reply the payload validation rejects — comes
    /// back as a typed `OracleError` so the fallback decision is a visible
    /// branch in the pipeline, not a swallowed exception.
    pub fn score(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
    ) -> Result<ScoreBreakdown, OracleError> {
        if !self.is_configured() {
            return Err(OracleError::Unavailable);
        }

        let prompt = build_prompt(candidate, job, &self.config.model);
        let reply = self.client.generate(&prompt)?;
        parse_breakdown(&reply)
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn build_prompt(candidate: &CandidateProfile, job: &JobRequirement, model: &str) -> String {
    let mut projects = normalize_list(&candidate.projects);
    projects.truncate(MAX_PROJECTS_IN_PROMPT);
    let mut responsibilities = normalize_list(&job.responsibilities);
    responsibilities.truncate(MAX_RESPONSIBILITIES_IN_PROMPT);

    let candidate_brief = json!({
        "skills": normalize_list(&candidate.skills),
        "projects": projects,
        "experience_years": candidate.experience_years,
        "resume_snippet": truncate_chars(&candidate.resume_text, MAX_SNIPPET_CHARS),
    });
    let job_brief = json!({
        "required_skills": normalize_list(&job.required_skills),
        "preferred_skills": normalize_list(&job.preferred_skills),
        "responsibilities": responsibilities,
        "experience_level": job.experience_level,
    });

    format!(
        "You are an expert hiring evaluator using model {model}. Compare the \
candidate and the job role and return STRICT JSON only.\n\n\
Candidate: {candidate_brief}\n\
JobRole: {job_brief}\n\n\
Return JSON exactly with keys:\n\
{{\n\
  \"score\": number,\n\
  \"components\": {{\n\
     \"required_coverage\": number,\n\
     \"preferred_coverage\": number,\n\
     \"semantic_fit\": number,\n\
     \"project_relevance\": number,\n\
     \"experience_fit\": number\n\
  }},\n\
  \"explanations\": [\"short bullet sentences only\"]\n\
}}\n"
    )
}

/// Recovers a breakdown from untrusted oracle text: takes the outermost
/// `{...}` slice, deserializes it, and requires the overall score plus all
/// five components. Values are clamped into [0, 100] at this boundary so a
/// confused oracle cannot produce an out-of-range breakdown.
fn parse_breakdown(reply: &str) -> Result<ScoreBreakdown, OracleError> {
    let start = reply
        .find('{')
        .ok_or_else(|| OracleError::Malformed("no JSON object in response".into()))?;
    let end = reply
        .rfind('}')
        .ok_or_else(|| OracleError::Malformed("no JSON object in response".into()))?;
    if end < start {
        return Err(OracleError::Malformed("no JSON object in response".into()));
    }

    let payload: OraclePayload = serde_json::from_str(&reply[start..=end])
        .map_err(|err| OracleError::Malformed(err.to_string()))?;

    let clamp = |v: f64| v.clamp(0.0, 100.0);
    Ok(ScoreBreakdown {
        overall_score: clamp(payload.score),
        components: ScoreComponents {
            required_coverage: clamp(payload.components.required_coverage),
            preferred_coverage: clamp(payload.components.preferred_coverage),
            semantic_fit: clamp(payload.components.semantic_fit),
            project_relevance: clamp(payload.components.project_relevance),
            experience_fit: clamp(payload.components.experience_fit),
        },
        explanations: payload.explanations,
        method: ScoringMethod::Oracle,
    })
}
