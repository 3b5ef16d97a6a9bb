use serde::{Deserialize, Serialize};

use crate::JobRequirement;

/// Structured fields recovered from a raw job description without any
/// oracle involvement. Fields the section parser cannot recover (title,
/// summary, experience level) stay empty; the oracle path fills them when
/// it is available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedJobDescription {
    pub job_title: String,
    pub role_summary: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub responsibilities: Vec<String>,
    pub experience_level: String,
    pub tech_stack: Vec<String>,
    pub raw_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Responsibilities,
    RequiredSkills,
    PreferredSkills,
    TechStack,
}

fn section_for_header(line: &str) -> Option<Section> {
    let lower = line.to_lowercase();
    if lower.contains("responsibilit") || lower.contains("duties") {
        Some(Section::Responsibilities)
    } else if lower.contains("preferred") || lower.contains("nice to have") {
        Some(Section::PreferredSkills)
    } else if lower.contains("qualification") || lower.contains("requirements") {
        Some(Section::RequiredSkills)
    } else if lower.contains("tech stack") || lower.contains("technology stack") {
        Some(Section::TechStack)
    } else {
        None
    }
}

/// Deterministic section parser for raw JD text, used when the oracle-based
/// parser is unavailable or returns garbage.
///
/// Walks non-blank trimmed lines; a line that reads like a section header
/// ("Responsibilities", "Requirements", "Preferred", "Tech Stack", ...)
/// switches the active section and is consumed, every other line lands in
/// the active section's list verbatim. Lines before the first recognized
/// header are dropped. Empty input yields the all-empty structure — this
/// parser never fails.
pub fn parse_jd_sections(jd_text: &str) -> ParsedJobDescription {
    let mut parsed = ParsedJobDescription {
        raw_text: jd_text.to_string(),
        ..ParsedJobDescription::default()
    };

    let mut current = Section::None;
    for line in jd_text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(section) = section_for_header(line) {
            current = section;
            continue;
        }

        match current {
            Section::Responsibilities => parsed.responsibilities.push(line.to_string()),
            Section::RequiredSkills => parsed.required_skills.push(line.to_string()),
            Section::PreferredSkills => parsed.preferred_skills.push(line.to_string()),
            Section::TechStack => parsed.tech_stack.push(line.to_string()),
            Section::None => {}
        }
    }

    parsed
}

impl ParsedJobDescription {
    /// Scoring-relevant subset of the parsed JD.
    pub fn into_job_requirement(self) -> JobRequirement {
        JobRequirement {
            required_skills: self.required_skills,
            preferred_skills: self.preferred_skills,
            responsibilities: self.responsibilities,
            experience_level: if self.experience_level.trim().is_empty() {
                None
            } else {
                Some(self.experience_level)
            },
        }
    }
}
