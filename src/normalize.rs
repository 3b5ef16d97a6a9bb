use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Canonical text form used by every comparison in the crate: lowercase,
/// trimmed, with any whitespace run (spaces, tabs, newlines) collapsed to a
/// single space.
///
/// Contract:
/// 1. empty input yields an empty string
/// 2. idempotent: `normalize_text(normalize_text(x)) == normalize_text(x)`
/// 3. never fails, always returns an owned string
pub fn normalize_text(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    WHITESPACE_RE.replace_all(&lowered, " ").into_owned()
}

/// Cleans a free-form string list: trims each entry, drops entries that are
/// blank after trimming, keeps the original order. Deduplication is left to
/// the caller; coverage math counts duplicates deliberately.
pub fn normalize_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
