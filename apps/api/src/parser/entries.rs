//! Experience and education extraction.
//!
//! Sections split into candidate entries on blank-line runs. Within an
//! entry, the position of the date-range line decides which lines carry the
//! title/degree and company/institution; everything left over becomes the
//! description. Education additionally applies a degree-keyword check to
//! decide which of the two header lines is the degree.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::{EducationEntry, ExperienceEntry};
use crate::parser::dates::normalize_or_verbatim;
use crate::parser::MIN_SECTION_CONTENT;

static BLANK_LINE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// "Month YYYY - Month YYYY" or "Month YYYY - Present". Month is any
/// recognized 3-letter abbreviation, optionally continued ("January").
static MONTH_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s*\d{4}\s*(?:[-\u{2013}\u{2014}]|\bto\b)\s*(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s*\d{4}|present|current|now)",
    )
    .unwrap()
});

/// Bare "YYYY - YYYY" or "YYYY - Present", both years in 1900-2099.
static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:19|20)\d{2}\s*(?:[-\u{2013}\u{2014}]|\bto\b)\s*(?:(?:19|20)\d{2}|present|current|now)\b",
    )
    .unwrap()
});

/// Dash-like separators plus the whole word "to". Word-bounded so month
/// names like "October" never split.
static RANGE_SEP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(?:[-\u{2013}\u{2014}]|\bto\b)\s*").unwrap());

static ONGOING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:present|current|now)$").unwrap());

/// Degree keywords: spelled-out names case-insensitively, common
/// abbreviations case-sensitively so prose like "based" never triggers.
static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:(?i:\b(?:bachelor|master|doctorate|associate|ph\.?d)\b)|\b(?:B\.?[A-Z][A-Za-z]{0,3}|M\.?[A-Z][A-Za-z]{0,3}|MBA|BBA|BS|BA|MS|MA|AA|AS)\b)",
    )
    .unwrap()
});

pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    parse_section(text)
        .into_iter()
        .map(|parts| ExperienceEntry {
            title: parts.primary,
            company: parts.secondary,
            start_date: parts.start_date,
            end_date: parts.end_date,
            is_current: parts.is_current,
            description: parts.description,
        })
        .collect()
}

pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    parse_section(text)
        .into_iter()
        .map(|parts| {
            // The date-line heuristic fixed the ordering; the degree keyword
            // only decides which of the two header lines is which.
            let (degree, institution) = if DEGREE_RE.is_match(&parts.primary) {
                (parts.primary, parts.secondary)
            } else {
                (parts.secondary, parts.primary)
            };
            EducationEntry {
                degree,
                institution,
                start_date: parts.start_date,
                end_date: parts.end_date,
                is_current: parts.is_current,
                description: parts.description,
            }
        })
        .collect()
}

/// Field assignment shared by both extractors, before degree/institution
/// disambiguation. `primary` is the title/degree slot, `secondary` the
/// company/institution slot.
struct EntryParts {
    primary: String,
    secondary: String,
    start_date: String,
    end_date: String,
    is_current: bool,
    description: String,
}

fn parse_section(text: &str) -> Vec<EntryParts> {
    let text = text.trim();
    if text.len() < MIN_SECTION_CONTENT {
        return Vec::new();
    }
    BLANK_LINE_RUN_RE
        .split(text)
        .filter_map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> Option<EntryParts> {
    let lines: Vec<&str> = entry
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 2 {
        return None;
    }

    // Month-year pattern takes precedence over the bare-year pattern; the
    // first line with a match is the date line.
    let date_line = lines.iter().enumerate().find_map(|(i, line)| {
        MONTH_RANGE_RE
            .find(line)
            .or_else(|| YEAR_RANGE_RE.find(line))
            .map(|m| (i, m.start(), m.end()))
    });

    let (start_date, end_date, is_current) = match date_line {
        Some((i, start, end)) => parse_range(&lines[i][start..end]),
        None => (String::new(), String::new(), false),
    };

    let (primary, secondary) = match date_line {
        // Date on the first line: the rest of that line is the title slot,
        // the next line the company slot.
        Some((0, start, end)) => (strip_span(lines[0], start, end), lines[1].to_string()),
        // Date on the second line: first line is the title slot, the rest
        // of the date line the company slot.
        Some((1, start, end)) => (lines[0].to_string(), strip_span(lines[1], start, end)),
        // Date elsewhere or absent: positional fallback.
        _ => (lines[0].to_string(), lines[1].to_string()),
    };

    let date_idx = date_line.map(|(i, _, _)| i);
    let description = lines
        .iter()
        .enumerate()
        .filter(|(i, _)| *i >= 2 && Some(*i) != date_idx)
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n");

    Some(EntryParts {
        primary,
        secondary,
        start_date,
        end_date,
        is_current,
        description,
    })
}

/// Splits a matched date range into normalized start/end. An end of
/// "Present"/"Current"/"Now" marks the entry ongoing and leaves the end
/// date empty. Tokens the normalizer rejects are kept verbatim.
fn parse_range(range: &str) -> (String, String, bool) {
    let mut halves = RANGE_SEP_RE.splitn(range, 2);
    let start = halves.next().unwrap_or("").trim();
    let end = halves.next().unwrap_or("").trim();

    let start_date = if start.is_empty() {
        String::new()
    } else {
        normalize_or_verbatim(start)
    };

    if ONGOING_RE.is_match(end) {
        (start_date, String::new(), true)
    } else if end.is_empty() {
        (start_date, String::new(), false)
    } else {
        (start_date, normalize_or_verbatim(end), false)
    }
}

/// Removes the matched span from a line and tidies leftover separators.
fn strip_span(line: &str, start: usize, end: usize) -> String {
    let mut remainder = String::with_capacity(line.len());
    remainder.push_str(&line[..start]);
    remainder.push_str(&line[end..]);
    remainder
        .trim()
        .trim_matches(|c: char| matches!(c, '|' | ',' | '(' | ')' | '\u{00b7}'))
        .trim()
        .to_string()
}
