//! Contact detail extraction from the document header.
//!
//! Every field is best-effort: a pattern that never matches leaves its
//! field empty. Extraction never fails, absence is representational.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::PersonalInfo;
use crate::parser::MIN_SECTION_CONTENT;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Optional country code, common separators, optional extension suffix.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}(?:\s*(?i:ext\.?|x)\s*\d{1,5})?")
        .unwrap()
});

/// Comma-separated capitalized phrases: "City, State" or "City, State, Country".
static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b[A-Z][A-Za-z]*(?: [A-Za-z]+)*, ?[A-Z][A-Za-z]*(?: [A-Za-z]+)*(?:, ?[A-Z][A-Za-z]*(?: [A-Za-z]+)*)?\b",
    )
    .unwrap()
});

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[A-Za-z0-9_-]+").unwrap());

/// URL-shaped text: optional scheme, at least one dotted label, an
/// alphabetic final label of length two or more, optional path.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:https?://)?(?:www\.)?[a-z0-9][-a-z0-9]*(?:\.[-a-z0-9]+)*\.[a-z]{2,}(?:/[^\s]*)?")
        .unwrap()
});

pub fn extract_personal_info(header: &str) -> PersonalInfo {
    let header = header.trim();
    if header.len() < MIN_SECTION_CONTENT {
        return PersonalInfo::default();
    }

    PersonalInfo {
        full_name: header
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string(),
        email: first_match(&EMAIL_RE, header),
        phone: first_match(&PHONE_RE, header),
        location: first_match(&LOCATION_RE, header),
        linkedin_handle: first_match(&LINKEDIN_RE, header),
        portfolio_url: find_portfolio(header),
    }
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text).map(|m| m.as_str().to_string()).unwrap_or_default()
}

/// First URL-shaped match that is neither the LinkedIn profile nor part of
/// an email address. The regex engine has no lookaround, so a candidate
/// touching an `@` on either side (local part or domain of an email) is
/// rejected by inspecting the surrounding input.
fn find_portfolio(text: &str) -> String {
    for m in URL_RE.find_iter(text) {
        let candidate = m.as_str();
        if candidate.contains('@') || candidate.to_lowercase().contains("linkedin.com") {
            continue;
        }
        if m.start() > 0 && text.as_bytes()[m.start() - 1] == b'@' {
            continue;
        }
        if m.end() < text.len() && text.as_bytes()[m.end()] == b'@' {
            continue;
        }
        return candidate
            .trim_end_matches(|c| c == '.' || c == ',')
            .to_string();
    }
    String::new()
}
