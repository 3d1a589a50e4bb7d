//! Skills extraction: delimiter sniffing, noise filtering, dedup.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::MIN_SECTION_CONTENT;

/// A bullet marker and everything after it up to the next marker or line end.
static BULLET_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[•\-*]\s*([^•\-*\n]+)").unwrap());

/// Candidates longer than this are prose, not skill tokens.
const MAX_SKILL_LEN: usize = 60;

/// Splits the skills section into tokens, choosing the delimiter by
/// inspection: bullet markers first, then commas, then one skill per line.
/// Tokens that look like prose, sub-headings, or stray numbers are dropped,
/// and duplicates are removed case-insensitively keeping the first-seen
/// casing and order.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.len() < MIN_SECTION_CONTENT {
        return Vec::new();
    }

    let candidates: Vec<String> = if text.contains(|c| matches!(c, '•' | '-' | '*')) {
        BULLET_TOKEN_RE
            .captures_iter(text)
            .map(|caps| caps[1].trim().to_string())
            .collect()
    } else if text.contains(',') {
        text.split(',').map(|token| token.trim().to_string()).collect()
    } else {
        text.lines().map(|line| line.trim().to_string()).collect()
    };

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|token| {
            !token.is_empty()
                && token.chars().count() <= MAX_SKILL_LEN
                && !token.contains(':')
                && !token.chars().all(|c| c.is_ascii_digit())
        })
        .filter(|token| seen.insert(token.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_separated() {
        let skills = extract_skills("• Python\n• SQL\n• Python");
        assert_eq!(skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_comma_separated() {
        let skills = extract_skills("Rust, PostgreSQL, Kubernetes");
        assert_eq!(skills, vec!["Rust", "PostgreSQL", "Kubernetes"]);
    }

    #[test]
    fn test_newline_separated() {
        let skills = extract_skills("Rust\nPostgreSQL\nKubernetes");
        assert_eq!(skills, vec!["Rust", "PostgreSQL", "Kubernetes"]);
    }

    #[test]
    fn test_dedup_is_case_insensitive_first_casing_wins() {
        let skills = extract_skills("JavaScript, javascript, Python");
        assert_eq!(skills, vec!["JavaScript", "Python"]);
    }

    #[test]
    fn test_sub_heading_with_colon_is_dropped() {
        let skills = extract_skills("Databases:\nPostgreSQL\nRedis");
        assert_eq!(skills, vec!["PostgreSQL", "Redis"]);
    }

    #[test]
    fn test_prose_line_is_dropped() {
        let long = "Extensive production experience with distributed systems and large teams";
        assert!(long.len() > MAX_SKILL_LEN);
        let skills = extract_skills(&format!("Rust, {long}, SQL"));
        assert_eq!(skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_numeric_token_is_dropped() {
        let skills = extract_skills("Rust, 2020, SQL");
        assert_eq!(skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_empty_and_short_input() {
        assert!(extract_skills("").is_empty());
        assert!(extract_skills("Rust").is_empty());
    }

    #[test]
    fn test_asterisk_bullets() {
        let skills = extract_skills("* Rust\n* Go\n* SQL");
        assert_eq!(skills, vec!["Rust", "Go", "SQL"]);
    }
}
