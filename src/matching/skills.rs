use std::collections::HashSet;

use crate::normalize::normalize_list;

/// Coverage of one skill list against a candidate's skill set.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillCoverage {
    /// 100 * matched / total, rounded to 2 decimals. 100.0 when the
    /// requirement list is empty — an unconstrained job cannot penalize.
    pub percentage: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Lowercased, trimmed skill set for case-insensitive membership checks.
pub fn candidate_skill_set(skills: &[String]) -> HashSet<String> {
    normalize_list(skills)
        .into_iter()
        .map(|s| s.to_lowercase())
        .collect()
}

/// Computes how much of `required` the candidate set covers. Comparison is
/// case-insensitive; the matched/missing lists keep the job's original
/// casing and order for explanation text. Duplicate entries in the
/// requirement list count separately.
pub fn skill_coverage(required: &[String], candidate: &HashSet<String>) -> SkillCoverage {
    let cleaned = normalize_list(required);
    if cleaned.is_empty() {
        return SkillCoverage {
            percentage: 100.0,
            matched: vec![],
            missing: vec![],
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for skill in &cleaned {
        if candidate.contains(&skill.to_lowercase()) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    let percentage = 100.0 * matched.len() as f64 / cleaned.len() as f64;
    SkillCoverage {
        percentage: (percentage * 100.0).round() / 100.0,
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_requirements_are_vacuously_covered() {
        let candidate = candidate_skill_set(&strings(&["python"]));
        let coverage = skill_coverage(&[], &candidate);
        assert_eq!(coverage.percentage, 100.0);
        assert!(coverage.matched.is_empty());
        assert!(coverage.missing.is_empty());
    }

    #[test]
    fn blank_entries_do_not_count_toward_coverage() {
        let candidate = candidate_skill_set(&strings(&["python"]));
        let coverage = skill_coverage(&strings(&["Python", "  ", ""]), &candidate);
        assert_eq!(coverage.percentage, 100.0);
        assert_eq!(coverage.matched, vec!["Python"]);
    }

    #[test]
    fn comparison_is_case_insensitive_and_keeps_original_casing() {
        let candidate = candidate_skill_set(&strings(&[" python ", "SQL"]));
        let coverage = skill_coverage(&strings(&["Python", "sql", "AWS"]), &candidate);
        assert!((coverage.percentage - 66.67).abs() < 1e-9);
        assert_eq!(coverage.matched, vec!["Python", "sql"]);
        assert_eq!(coverage.missing, vec!["AWS"]);
    }

    #[test]
    fn duplicates_in_requirements_count_separately() {
        let candidate = candidate_skill_set(&strings(&["rust"]));
        let coverage = skill_coverage(&strings(&["Rust", "Rust", "Go", "Go"]), &candidate);
        assert_eq!(coverage.percentage, 50.0);
    }
}
