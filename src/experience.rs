use once_cell::sync::Lazy;
use regex::Regex;

// Leading-anchored patterns: a range or plus form only counts when the
// expression starts with it, while a bare digit run is picked up anywhere.
static RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*-\s*(\d+)").unwrap());
static PLUS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*\+").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)").unwrap());

/// Converts heterogeneous experience expressions ("3-5", "5+ years",
/// "Senior", "4") into an integer-years estimate.
///
/// Resolution order, first match wins:
/// 1. the whole text parses as a number -> truncated (negatives clamp to 0)
/// 2. leading range `A-B` -> floor((A + B) / 2)
/// 3. leading `A+` -> A
/// 4. any embedded digit run -> that number
/// 5. seniority keywords: intern/entry 0, junior 1, mid 3, senior 5,
///    lead/principal 7
/// 6. otherwise `None` — unknown, which callers must treat as neutral
///
/// The ordering is load-bearing: numeric evidence always beats keywords, so
/// "Senior, 2+ years" resolves to 2, not 5.
pub fn parse_experience_years(expression: &str) -> Option<u32> {
    let text = expression.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if let Ok(value) = text.parse::<f64>() {
        if value.is_finite() {
            return Some(value.trunc().max(0.0) as u32);
        }
    }

    if let Some(caps) = RANGE_RE.captures(&text) {
        let a = saturating_years(&caps[1]);
        let b = saturating_years(&caps[2]);
        // Average in u64: the bounds themselves saturate at u32::MAX, and
        // the sum of two u32 values cannot overflow u64.
        return Some(((a as u64 + b as u64) / 2) as u32);
    }

    if let Some(caps) = PLUS_RE.captures(&text) {
        return Some(saturating_years(&caps[1]));
    }

    if let Some(caps) = NUMBER_RE.captures(&text) {
        return Some(saturating_years(&caps[1]));
    }

    if text.contains("intern") || text.contains("entry") {
        return Some(0);
    }
    if text.contains("junior") {
        return Some(1);
    }
    if text.contains("mid") {
        return Some(3);
    }
    if text.contains("senior") {
        return Some(5);
    }
    if text.contains("lead") || text.contains("principal") {
        return Some(7);
    }

    None
}

/// The regexes only capture ASCII digit runs, so parsing can fail solely by
/// exceeding u32. Absurd digit runs still count as numeric evidence (they
/// outrank the keyword rules), so they saturate rather than abort the rule
/// cascade or panic.
fn saturating_years(digits: &str) -> u32 {
    digits.parse::<u32>().unwrap_or(u32::MAX)
}
