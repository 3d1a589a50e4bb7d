//! Certification extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::CertificationEntry;
use crate::parser::dates::normalize_or_verbatim;
use crate::parser::MIN_SECTION_CONTENT;

/// Entry boundaries: blank-line runs, or a list marker at the start of a
/// line (bullet, asterisk, dash, "1." style numbering).
static ENTRY_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)\n{2,}|^[ \t]*(?:[•\-*]|\d+\.)[ \t]*").unwrap());

/// A month-year or bare-year token anywhere in a line.
static DATE_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s*\d{4}|\b(?:19|20)\d{2}\b")
        .unwrap()
});

pub fn extract_certifications(text: &str) -> Vec<CertificationEntry> {
    let text = text.trim();
    if text.len() < MIN_SECTION_CONTENT {
        return Vec::new();
    }
    ENTRY_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> Option<CertificationEntry> {
    let lines: Vec<&str> = entry
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let mut name = (*lines.first()?).to_string();
    let mut organization = String::new();
    let mut issue_date = String::new();

    for line in &lines[1..] {
        if issue_date.is_empty() {
            if let Some(m) = DATE_TOKEN_RE.find(line) {
                issue_date = normalize_or_verbatim(m.as_str());
                let residual = strip_span(line, m.start(), m.end());
                if !residual.is_empty() && organization.is_empty() {
                    organization = residual;
                }
                continue;
            }
        }
        if organization.is_empty() {
            organization = (*line).to_string();
        }
    }

    // Issuer folded into the name line: "AWS Solutions Architect, Amazon".
    if organization.is_empty() {
        if let Some((cert, org)) = name.split_once(',') {
            let (cert, org) = (cert.trim().to_string(), org.trim().to_string());
            name = cert;
            organization = org;
        }
    }

    Some(CertificationEntry {
        name,
        organization,
        issue_date,
        expiry_date: String::new(),
        no_expiry: true,
    })
}

fn strip_span(line: &str, start: usize, end: usize) -> String {
    let mut remainder = String::with_capacity(line.len());
    remainder.push_str(&line[..start]);
    remainder.push_str(&line[end..]);
    remainder
        .trim_matches(|c: char| c == ',' || c == '-' || c.is_whitespace())
        .to_string()
}
