//! Language extraction.
//!
//! Two shapes are recognized. Text carrying `:`/`-`/`•` is treated as one
//! language per line with an attached level; plain comma or newline lists
//! get the default level for every entry.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::{LanguageEntry, Proficiency};
use crate::parser::MIN_SECTION_CONTENT;

static BULLET_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•\-*]\s*").unwrap());

/// Known proficiency keywords, including CEFR codes. "upper intermediate"
/// sits before "intermediate" so the longer phrase wins.
static LEVEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:native|mother\s*tongue|first\s*language|fluent|proficient|excellent|advanced|upper[\s-]*intermediate|intermediate|basic|beginner|elementary|[abc][12])\b",
    )
    .unwrap()
});

pub fn extract_languages(text: &str) -> Vec<LanguageEntry> {
    let text = text.trim();
    if text.len() < MIN_SECTION_CONTENT {
        return Vec::new();
    }

    if text.contains(|c| matches!(c, ':' | '-' | '•')) {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(parse_line)
            .collect()
    } else {
        // Plain list, no level indicators anywhere.
        text.split(|c| matches!(c, ',' | '\n'))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| LanguageEntry {
                name: name.to_string(),
                proficiency: Proficiency::default(),
            })
            .collect()
    }
}

fn parse_line(line: &str) -> Option<LanguageEntry> {
    let entry = BULLET_PREFIX_RE.replace(line, "");
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }

    let (name, level) = if let Some((name, level)) = entry.split_once(':') {
        (name.trim(), level.trim().to_string())
    } else if let Some((name, level)) = entry.split_once('-') {
        (name.trim(), level.trim().to_string())
    } else if let Some(m) = LEVEL_RE.find(entry) {
        if m.start() == 0 {
            // "Fluent English"
            (entry[m.end()..].trim(), m.as_str().to_string())
        } else {
            // "English (Fluent)" or "English Fluent"
            (entry[..m.start()].trim(), m.as_str().to_string())
        }
    } else {
        (entry, String::new())
    };

    let name = name
        .trim_matches(|c: char| matches!(c, '(' | ')' | ','))
        .trim();
    if name.is_empty() {
        return None;
    }

    Some(LanguageEntry {
        name: name.to_string(),
        proficiency: if level.is_empty() {
            Proficiency::default()
        } else {
            Proficiency::from_text(&level)
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_delimited_lines() {
        let langs = extract_languages("French: Fluent\nGerman: Basic");
        assert_eq!(langs.len(), 2);
        assert_eq!(langs[0].name, "French");
        assert_eq!(langs[0].proficiency, Proficiency::Fluent);
        assert_eq!(langs[1].name, "German");
        assert_eq!(langs[1].proficiency, Proficiency::Basic);
    }

    #[test]
    fn test_dash_delimited_lines() {
        let langs = extract_languages("Spanish - Advanced\nItalian - Beginner");
        assert_eq!(langs[0].name, "Spanish");
        assert_eq!(langs[0].proficiency, Proficiency::Advanced);
        assert_eq!(langs[1].proficiency, Proficiency::Basic);
    }

    #[test]
    fn test_bulleted_lines() {
        let langs = extract_languages("• English: Native\n• Dutch: Intermediate");
        assert_eq!(langs[0].name, "English");
        assert_eq!(langs[0].proficiency, Proficiency::Native);
        assert_eq!(langs[1].proficiency, Proficiency::Intermediate);
    }

    #[test]
    fn test_level_in_parentheses() {
        // The dash line switches the whole section into line mode; the
        // parenthesized level is then picked up by the keyword match.
        let langs = extract_languages("English (Fluent)\nSwedish - Basic");
        assert_eq!(langs[0].name, "English");
        assert_eq!(langs[0].proficiency, Proficiency::Fluent);
        assert_eq!(langs[1].name, "Swedish");
        assert_eq!(langs[1].proficiency, Proficiency::Basic);
    }

    #[test]
    fn test_parenthesized_list_without_delimiters_loses_levels() {
        // No colon, dash, or bullet anywhere, so the section is read as a
        // plain list and every entry gets the default level.
        let langs = extract_languages("English (Fluent), Japanese");
        assert_eq!(langs[0].name, "English (Fluent)");
        assert_eq!(langs[0].proficiency, Proficiency::Intermediate);
    }

    #[test]
    fn test_level_before_name() {
        let langs = extract_languages("Fluent English\nBasic Portuguese\nMandarin: B1");
        assert_eq!(langs[0].name, "English");
        assert_eq!(langs[0].proficiency, Proficiency::Fluent);
        assert_eq!(langs[1].name, "Portuguese");
        assert_eq!(langs[1].proficiency, Proficiency::Basic);
        assert_eq!(langs[2].proficiency, Proficiency::Intermediate);
    }

    #[test]
    fn test_cefr_codes() {
        let langs = extract_languages("German: C1\nFrench: A2");
        assert_eq!(langs[0].proficiency, Proficiency::Advanced);
        assert_eq!(langs[1].proficiency, Proficiency::Basic);
    }

    #[test]
    fn test_plain_comma_list_defaults_to_intermediate() {
        let langs = extract_languages("English, French, German");
        assert_eq!(langs.len(), 3);
        assert!(langs
            .iter()
            .all(|l| l.proficiency == Proficiency::Intermediate));
    }

    #[test]
    fn test_plain_line_list_defaults_to_intermediate() {
        let langs = extract_languages("English\nFrench\nGerman");
        assert_eq!(langs.len(), 3);
        assert_eq!(langs[2].name, "German");
        assert!(langs
            .iter()
            .all(|l| l.proficiency == Proficiency::Intermediate));
    }

    #[test]
    fn test_line_without_level_defaults_to_intermediate() {
        let langs = extract_languages("French: Fluent\nKlingon");
        assert_eq!(langs[1].name, "Klingon");
        assert_eq!(langs[1].proficiency, Proficiency::Intermediate);
    }

    #[test]
    fn test_empty_and_short_input() {
        assert!(extract_languages("").is_empty());
        assert!(extract_languages("Eng").is_empty());
    }
}
