use crate::normalize::normalize_text;

/// Minimum best-match similarity a responsibility must reach before it
/// contributes to the average; anything below is clamped to zero so noisy
/// low-confidence matches cannot inflate the result.
pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.35;

/// Character-subsequence similarity ratio in [0, 1]:
/// `2 * LCS(a, b) / (|a| + |b|)` over normalized text.
///
/// Symmetric; 1.0 for identical normalized strings, 0.0 for strings that
/// share no characters. A lexical proxy by design — cheap, deterministic,
/// and independent of any external service.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = normalize_text(a).chars().collect();
    let b: Vec<char> = normalize_text(b).chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Two-row LCS table; inputs are short free-text statements so the
    // O(|a|*|b|) cost is bounded.
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in &a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    let lcs = prev[b.len()];

    (2.0 * lcs as f64) / ((a.len() + b.len()) as f64)
}

/// Scores how relevant a candidate's projects are to a job's stated
/// responsibilities, in [0, 1].
///
/// - no responsibilities -> 1.0 (an unconstrained job cannot penalize)
/// - responsibilities but no projects -> 0.0
/// - otherwise: per non-blank responsibility, the best [`sequence_ratio`]
///   against every non-blank project, clamped to 0.0 below `threshold`,
///   averaged and rounded to 3 decimals
/// - every responsibility blank after normalization -> 0.0
pub fn project_relevance(projects: &[String], responsibilities: &[String], threshold: f64) -> f64 {
    if responsibilities.is_empty() {
        return 1.0;
    }
    if projects.is_empty() {
        return 0.0;
    }

    let mut scores = Vec::with_capacity(responsibilities.len());
    for responsibility in responsibilities {
        if normalize_text(responsibility).is_empty() {
            continue;
        }

        let mut best = 0.0f64;
        for project in projects {
            if normalize_text(project).is_empty() {
                continue;
            }
            best = best.max(sequence_ratio(project, responsibility));
        }

        scores.push(if best >= threshold { best } else { 0.0 });
    }

    if scores.is_empty() {
        return 0.0;
    }

    let avg = scores.iter().sum::<f64>() / scores.len() as f64;
    (avg * 1000.0).round() / 1000.0
}
