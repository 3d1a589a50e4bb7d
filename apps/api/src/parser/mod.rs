//! Heuristic résumé parser: raw extracted document text in, structured
//! `ResumeRecord` out.
//!
//! Pure and synchronous, one linear pass per concern, no I/O. It never
//! fails on malformed text: résumé content is unstructured by nature, and
//! every extraction step degrades to an empty value instead of erroring,
//! because partial data is strictly more useful than none. The same
//! function serves both the upload path and callers that extracted text
//! on their own device, which is what keeps the two entry points' record
//! shapes identical.

pub mod certifications;
pub mod dates;
pub mod entries;
pub mod languages;
pub mod personal;
pub mod sections;
pub mod skills;

use crate::models::resume::ResumeRecord;

/// Sections with less content than this are noise (stray heading, page
/// artifact) and yield empty results from the extractors.
pub const MIN_SECTION_CONTENT: usize = 10;

pub fn parse_resume(raw_text: &str) -> ResumeRecord {
    // Everything downstream assumes \n line breaks.
    let text = raw_text.replace("\r\n", "\n");
    let sections = sections::segment(&text);

    ResumeRecord {
        personal_info: personal::extract_personal_info(&sections.header),
        summary: sections.summary,
        experience: entries::extract_experience(&sections.experience),
        education: entries::extract_education(&sections.education),
        skills: skills::extract_skills(&sections.skills),
        certifications: certifications::extract_certifications(&sections.certifications),
        languages: languages::extract_languages(&sections.languages),
        additional: sections.additional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Proficiency;

    const FULL_RESUME: &str = "\
Jane Doe
jane.doe@example.com
+1 555-123-4567
Portland, Oregon
linkedin.com/in/janedoe

Summary
Backend engineer with ten years of production experience.

Experience
Senior Developer
Acme Corp
Jan 2020 - Present
Led a team of five engineers.

Backend Engineer
Initech
Mar 2016 - Dec 2019
Maintained billing services.

Education
BSc Computer Science
State University
2012 - 2016

Skills
Rust, PostgreSQL, Kubernetes, rust

Certifications
AWS Certified Solutions Architect
Amazon Web Services, Mar 2021

Languages
French: Fluent
German: Basic

Interests
Chess and long-distance running.
";

    #[test]
    fn test_full_resume_end_to_end() {
        let record = parse_resume(FULL_RESUME);

        assert_eq!(record.personal_info.full_name, "Jane Doe");
        assert_eq!(record.personal_info.email, "jane.doe@example.com");
        assert_eq!(record.personal_info.location, "Portland, Oregon");
        assert_eq!(record.personal_info.linkedin_handle, "linkedin.com/in/janedoe");

        assert_eq!(
            record.summary,
            "Backend engineer with ten years of production experience."
        );

        assert_eq!(record.experience.len(), 2);
        assert_eq!(record.experience[0].title, "Senior Developer");
        assert_eq!(record.experience[0].company, "Acme Corp");
        assert_eq!(record.experience[0].start_date, "2020-01");
        assert!(record.experience[0].is_current);
        assert_eq!(record.experience[1].start_date, "2016-03");
        assert_eq!(record.experience[1].end_date, "2019-12");

        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].degree, "BSc Computer Science");
        assert_eq!(record.education[0].institution, "State University");

        assert_eq!(record.skills, vec!["Rust", "PostgreSQL", "Kubernetes"]);

        assert_eq!(record.certifications.len(), 1);
        assert_eq!(
            record.certifications[0].organization,
            "Amazon Web Services"
        );
        assert_eq!(record.certifications[0].issue_date, "2021-03");

        assert_eq!(record.languages.len(), 2);
        assert_eq!(record.languages[0].proficiency, Proficiency::Fluent);
        assert_eq!(record.languages[1].proficiency, Proficiency::Basic);

        assert_eq!(record.additional, "Chess and long-distance running.");
    }

    #[test]
    fn test_unsegmentable_text_lands_in_header_only() {
        let record = parse_resume("Jane Doe\njane@example.com\nJust a paragraph of plain text here.");
        assert_eq!(record.personal_info.full_name, "Jane Doe");
        assert_eq!(record.personal_info.email, "jane@example.com");
        assert!(record.summary.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.education.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.certifications.is_empty());
        assert!(record.languages.is_empty());
        assert!(record.additional.is_empty());
    }

    #[test]
    fn test_empty_input_yields_default_record() {
        assert_eq!(parse_resume(""), ResumeRecord::default());
        assert_eq!(parse_resume("   \n\n  "), ResumeRecord::default());
    }

    #[test]
    fn test_crlf_input_parses_like_lf() {
        let crlf = FULL_RESUME.replace('\n', "\r\n");
        assert_eq!(parse_resume(&crlf), parse_resume(FULL_RESUME));
    }

    #[test]
    fn test_heading_casing_does_not_change_the_record() {
        let shouted = FULL_RESUME
            .replace("Experience\n", "EXPERIENCE\n")
            .replace("Skills\n", "SKILLS\n")
            .replace("Languages\n", "LANGUAGES\n");
        let record = parse_resume(&shouted);
        assert_eq!(record.experience.len(), 2);
        assert_eq!(record.skills, vec!["Rust", "PostgreSQL", "Kubernetes"]);
        assert_eq!(record.languages.len(), 2);
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse_resume(FULL_RESUME), parse_resume(FULL_RESUME));
    }
}
