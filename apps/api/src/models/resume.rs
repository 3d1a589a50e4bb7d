//! The structured résumé record produced by the parser and consumed by the
//! editor and renderer. Pure data: no identity beyond content, no lifecycle.
//!
//! Every field defaults to empty rather than null so downstream consumers
//! never have to null-check. Dates are canonical `YYYY-MM` strings, or the
//! verbatim source text when normalization failed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<CertificationEntry>,
    pub languages: Vec<LanguageEntry>,
    /// Catch-all for recognized-but-untyped sections (interests, hobbies,
    /// publications, ...), concatenated in encounter order.
    pub additional: String,
}

/// Contact details recovered from the document header.
/// All fields are empty strings when the corresponding pattern never matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_handle: String,
    pub portfolio_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    /// Empty when `is_current` is set; renderers substitute "Present".
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub name: String,
    pub organization: String,
    pub issue_date: String,
    pub expiry_date: String,
    /// Defaults true; the editor flips it when the user supplies an expiry.
    pub no_expiry: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageEntry {
    pub name: String,
    pub proficiency: Proficiency,
}

/// Closed proficiency vocabulary. Free-text level indicators from the source
/// document are folded into these five levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Native,
    Fluent,
    Advanced,
    #[default]
    Intermediate,
    Basic,
}

impl Proficiency {
    /// Maps a free-text level indicator onto the closed vocabulary.
    ///
    /// Substring matching in priority order, so "upper intermediate" lands
    /// on Advanced before the "intermediate" check can see it. Unrecognized
    /// or empty text falls back to Intermediate.
    pub fn from_text(text: &str) -> Self {
        let t = text.to_lowercase();
        if t.contains("native") || t.contains("mother tongue") || t.contains("first language") {
            Proficiency::Native
        } else if t.contains("fluent")
            || t.contains("proficient")
            || t.contains("excellent")
            || t.contains("c2")
        {
            Proficiency::Fluent
        } else if t.contains("advanced")
            || t.contains("c1")
            || t.contains("upper intermediate")
            || t.contains("upper-intermediate")
            || t.contains("b2")
        {
            Proficiency::Advanced
        } else if t.contains("intermediate") || t.contains("b1") {
            Proficiency::Intermediate
        } else if t.contains("basic")
            || t.contains("beginner")
            || t.contains("elementary")
            || t.contains("a1")
            || t.contains("a2")
        {
            Proficiency::Basic
        } else {
            Proficiency::Intermediate
        }
    }
}
