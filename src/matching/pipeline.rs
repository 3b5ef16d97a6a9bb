use tracing::{debug, warn};

use super::scoring::{deterministic_score, ScoreBreakdown};
use crate::oracle::OracleScorer;
use crate::{CandidateProfile, JobRequirement};

/// The one logical operation the crate exposes to callers: score a
/// (candidate, job) pair, preferring the oracle when asked for and
/// configured, with the deterministic scorer as the fallback of record.
pub struct MatchEngine {
    oracle: Option<OracleScorer>,
}

impl MatchEngine {
    pub fn new(oracle: Option<OracleScorer>) -> Self {
        Self { oracle }
    }

    /// Engine with no oracle attached; every call scores deterministically.
    pub fn deterministic_only() -> Self {
        Self { oracle: None }
    }

    /// Pure fallback chain, no retry: at most one oracle attempt, then at
    /// most one deterministic pass, never both blended into one result.
    /// Which path produced the breakdown is visible only in its `method`
    /// tag; no failure escapes to the caller.
    pub fn score(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        prefer_oracle: bool,
    ) -> ScoreBreakdown {
        if prefer_oracle {
            if let Some(oracle) = self.oracle.as_ref().filter(|o| o.is_configured()) {
                match oracle.score(candidate, job) {
                    Ok(breakdown) => return breakdown,
                    Err(err) => {
                        warn!(error = %err, "oracle scoring failed; falling back to deterministic");
                    }
                }
            } else {
                debug!("oracle requested but not configured; scoring deterministically");
            }
        }

        deterministic_score(candidate, job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scoring::ScoringMethod;
    use crate::oracle::{GenerativeOracle, OracleConfig, OracleError};

    struct StubOracle {
        reply: Result<String, ()>,
    }

    impl GenerativeOracle for StubOracle {
        fn generate(&self, _prompt: &str) -> Result<String, OracleError> {
            self.reply
                .clone()
                .map_err(|_| OracleError::Generation("connection refused".into()))
        }
    }

    fn configured() -> OracleConfig {
        OracleConfig {
            enabled: true,
            api_key: Some("test-key".into()),
            model: "test-model".into(),
        }
    }

    fn engine_with_reply(reply: Result<String, ()>) -> MatchEngine {
        let scorer = OracleScorer::new(configured(), Box::new(StubOracle { reply }));
        MatchEngine::new(Some(scorer))
    }

    fn sample_pair() -> (CandidateProfile, JobRequirement) {
        (
            CandidateProfile {
                skills: vec!["rust".into()],
                ..CandidateProfile::default()
            },
            JobRequirement {
                required_skills: vec!["Rust".into(), "SQL".into()],
                ..JobRequirement::default()
            },
        )
    }

    const ORACLE_REPLY: &str = r#"{"score": 77.0, "components": {
        "required_coverage": 80.0, "preferred_coverage": 70.0,
        "semantic_fit": 60.0, "project_relevance": 90.0,
        "experience_fit": 75.0}, "explanations": []}"#;

    #[test]
    fn uses_oracle_when_preferred_and_reply_is_valid() {
        let engine = engine_with_reply(Ok(ORACLE_REPLY.to_string()));
        let (candidate, job) = sample_pair();
        let breakdown = engine.score(&candidate, &job, true);
        assert_eq!(breakdown.method, ScoringMethod::Oracle);
        assert_eq!(breakdown.overall_score, 77.0);
    }

    #[test]
    fn falls_back_to_deterministic_on_oracle_failure() {
        let engine = engine_with_reply(Err(()));
        let (candidate, job) = sample_pair();
        let breakdown = engine.score(&candidate, &job, true);
        assert_eq!(breakdown.method, ScoringMethod::Deterministic);
        assert_eq!(breakdown.components.required_coverage, 50.0);
    }

    #[test]
    fn falls_back_to_deterministic_on_malformed_reply() {
        let engine = engine_with_reply(Ok("sorry, no JSON today".to_string()));
        let (candidate, job) = sample_pair();
        let breakdown = engine.score(&candidate, &job, true);
        assert_eq!(breakdown.method, ScoringMethod::Deterministic);
    }

    #[test]
    fn skips_oracle_when_not_preferred() {
        let engine = engine_with_reply(Ok(ORACLE_REPLY.to_string()));
        let (candidate, job) = sample_pair();
        let breakdown = engine.score(&candidate, &job, false);
        assert_eq!(breakdown.method, ScoringMethod::Deterministic);
    }

    #[test]
    fn unconfigured_oracle_scores_deterministically() {
        let config = OracleConfig {
            enabled: false,
            api_key: Some("test-key".into()),
            model: "test-model".into(),
        };
        let scorer = OracleScorer::new(
            config,
            Box::new(StubOracle {
                reply: Ok(ORACLE_REPLY.to_string()),
            }),
        );
        let engine = MatchEngine::new(Some(scorer));
        let (candidate, job) = sample_pair();
        let breakdown = engine.score(&candidate, &job, true);
        assert_eq!(breakdown.method, ScoringMethod::Deterministic);
    }

    #[test]
    fn deterministic_only_engine_never_needs_an_oracle() {
        let engine = MatchEngine::deterministic_only();
        let (candidate, job) = sample_pair();
        let breakdown = engine.score(&candidate, &job, true);
        assert_eq!(breakdown.method, ScoringMethod::Deterministic);
    }
}
