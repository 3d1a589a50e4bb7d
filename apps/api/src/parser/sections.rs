//! Section segmentation: slices raw document text into named regions keyed
//! by the heading they follow.

use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical section families. Several heading synonyms map onto each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Languages,
    Additional,
}

/// Heading vocabulary, grouped by canonical field. Matching is
/// case-insensitive; phrases contain only letters and spaces so they can be
/// joined into an alternation without escaping.
const HEADING_SYNONYMS: &[(&str, SectionKind)] = &[
    ("summary", SectionKind::Summary),
    ("profile", SectionKind::Summary),
    ("professional summary", SectionKind::Summary),
    ("objective", SectionKind::Summary),
    ("about me", SectionKind::Summary),
    ("experience", SectionKind::Experience),
    ("work experience", SectionKind::Experience),
    ("employment history", SectionKind::Experience),
    ("work history", SectionKind::Experience),
    ("professional experience", SectionKind::Experience),
    ("education", SectionKind::Education),
    ("academic background", SectionKind::Education),
    ("educational background", SectionKind::Education),
    ("academic qualifications", SectionKind::Education),
    ("skills", SectionKind::Skills),
    ("technical skills", SectionKind::Skills),
    ("core competencies", SectionKind::Skills),
    ("technologies", SectionKind::Skills),
    ("expertise", SectionKind::Skills),
    ("professional skills", SectionKind::Skills),
    ("certifications", SectionKind::Certifications),
    ("certificates", SectionKind::Certifications),
    ("qualifications", SectionKind::Certifications),
    ("professional certifications", SectionKind::Certifications),
    ("languages", SectionKind::Languages),
    ("language proficiency", SectionKind::Languages),
    ("language skills", SectionKind::Languages),
    ("additional information", SectionKind::Additional),
    ("interests", SectionKind::Additional),
    ("hobbies", SectionKind::Additional),
    ("volunteering", SectionKind::Additional),
    ("publications", SectionKind::Additional),
    ("projects", SectionKind::Additional),
];

/// Matches a heading phrase at the start of a line, followed by a colon or
/// the end of the line. Headings embedded mid-paragraph never match, which
/// bounds false positives on words like "experience" in prose.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    // Longest phrase first so "work experience" wins over "experience"
    // when both could match at the same offset.
    let mut phrases: Vec<&str> = HEADING_SYNONYMS.iter().map(|(p, _)| *p).collect();
    phrases.sort_by_key(|p| std::cmp::Reverse(p.len()));
    let pattern = format!(r"(?mi)^[ \t]*({})[ \t]*(?::|$)", phrases.join("|"));
    Regex::new(&pattern).unwrap()
});

/// Named text regions produced by segmentation.
///
/// `header` holds everything before the first recognized heading (or the
/// whole input when nothing matched). When two synonyms of the same
/// canonical field both appear, the later occurrence wins; the
/// `additional` family instead accumulates in encounter order, blank-line
/// separated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    pub header: String,
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub certifications: String,
    pub languages: String,
    pub additional: String,
}

pub fn segment(text: &str) -> Sections {
    let mut sections = Sections::default();

    let matches: Vec<(usize, usize, SectionKind)> = HEADING_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            let kind = canonical_kind(caps.get(1)?.as_str())?;
            Some((full.start(), full.end(), kind))
        })
        .collect();

    if matches.is_empty() {
        sections.header = text.trim().to_string();
        return sections;
    }

    sections.header = text[..matches[0].0].trim().to_string();

    for (i, &(_, end, kind)) in matches.iter().enumerate() {
        let next_start = matches.get(i + 1).map_or(text.len(), |m| m.0);
        assign(&mut sections, kind, text[end..next_start].trim());
    }

    sections
}

fn canonical_kind(heading: &str) -> Option<SectionKind> {
    let heading = heading.to_lowercase();
    HEADING_SYNONYMS
        .iter()
        .find(|(phrase, _)| *phrase == heading)
        .map(|(_, kind)| *kind)
}

fn assign(sections: &mut Sections, kind: SectionKind, content: &str) {
    match kind {
        SectionKind::Summary => sections.summary = content.to_string(),
        SectionKind::Experience => sections.experience = content.to_string(),
        SectionKind::Education => sections.education = content.to_string(),
        SectionKind::Skills => sections.skills = content.to_string(),
        SectionKind::Certifications => sections.certifications = content.to_string(),
        SectionKind::Languages => sections.languages = content.to_string(),
        SectionKind::Additional => {
            if content.is_empty() {
                return;
            }
            if !sections.additional.is_empty() {
                sections.additional.push_str("\n\n");
            }
            sections.additional.push_str(content);
        }
    }
}
