//! Date normalization for loosely formatted résumé dates.

use once_cell::sync::Lazy;
use regex::Regex;

const MONTHS: &[(&str, &str)] = &[
    ("jan", "01"),
    ("feb", "02"),
    ("mar", "03"),
    ("apr", "04"),
    ("may", "05"),
    ("jun", "06"),
    ("jul", "07"),
    ("aug", "08"),
    ("sep", "09"),
    ("oct", "10"),
    ("nov", "11"),
    ("dec", "12"),
];

static YEAR_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());
static MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([a-z]{3})[a-z]*\s+(\d{4})$").unwrap());

/// Converts a free-text date token into canonical `YYYY-MM` form.
///
/// A bare 4-digit year maps to January of that year; the month is an
/// explicit approximation, not a guess. A recognized 3-letter month
/// prefix ("Jan", "January", "sept") followed by a year maps to that
/// month. Anything else is unparseable and returns `None`; callers keep
/// the original token instead of dropping it.
pub fn normalize_date(token: &str) -> Option<String> {
    let token = token.trim();
    if YEAR_ONLY.is_match(token) {
        return Some(format!("{token}-01"));
    }
    let caps = MONTH_YEAR.captures(token)?;
    let prefix = caps[1].to_lowercase();
    let month = MONTHS.iter().find(|(name, _)| *name == prefix)?.1;
    Some(format!("{}-{}", &caps[2], month))
}

/// Normalizes a token, keeping the trimmed original text when the
/// normalizer cannot parse it.
pub fn normalize_or_verbatim(token: &str) -> String {
    normalize_date(token).unwrap_or_else(|| token.trim().to_string())
}
