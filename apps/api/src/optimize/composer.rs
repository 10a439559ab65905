//! Prompt Composer — merges the instruction template, the stored document,
//! and a job description into the single prompt sent to the LLM.
//!
//! Composing is pure and deterministic: identical inputs yield byte-identical
//! prompts. No side effects, no network access.

use crate::models::document::DocumentKind;
use crate::optimize::prompts::{DEFAULT_COVER_LETTER_TEMPLATE, DEFAULT_RESUME_TEMPLATE};

/// Placeholder substituted when a job description carries no company name.
pub const COMPANY_PLACEHOLDER: &str = "Not specified";

/// The job description fields the composer needs. Borrowed from the stored
/// row so the composer stays decoupled from the persistence layer.
#[derive(Debug, Clone, Copy)]
pub struct JobPosting<'a> {
    pub title: &'a str,
    pub company: Option<&'a str>,
    pub description: &'a str,
}

/// The built-in instruction block for a document kind, used when the user
/// has no stored template.
pub fn default_template(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Resume => DEFAULT_RESUME_TEMPLATE,
        DocumentKind::CoverLetter => DEFAULT_COVER_LETTER_TEMPLATE,
    }
}

fn document_section_label(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Resume => "RESUME",
        DocumentKind::CoverLetter => "COVER LETTER TEMPLATE",
    }
}

/// Builds the full prompt in fixed order: instruction template, labeled
/// document section, labeled job description section, output directive.
///
/// The output directive names the three fields the LLM must return
/// (`optimized_latex`, `suggestions`, `ats_score`) — the fixed contract
/// between the LLM adapter and storage.
pub fn compose(
    template: &str,
    source_document: &str,
    kind: DocumentKind,
    job: &JobPosting<'_>,
) -> String {
    format!(
        "{template}\n\n\
         {section}:\n{source_document}\n\n\
         JOB DESCRIPTION:\n\
         Title: {title}\n\
         Company: {company}\n\
         Description: {description}\n\n\
         OUTPUT FORMAT:\n\
         Return a JSON object with these fields:\n\
         - optimized_latex: The complete optimized LaTeX {label}\n\
         - suggestions: A detailed explanation of changes made\n\
         - ats_score: A number between 0-100 representing ATS compatibility",
        section = document_section_label(kind),
        title = job.title,
        company = job.company.unwrap_or(COMPANY_PLACEHOLDER),
        description = job.description,
        label = kind.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: JobPosting<'static> = JobPosting {
        title: "Senior Rust Engineer",
        company: Some("Acme Corp"),
        description: "Build distributed systems in Rust.",
    };

    #[test]
    fn test_default_template_embedded_verbatim() {
        let prompt = compose(
            default_template(DocumentKind::Resume),
            r"\documentclass{article}",
            DocumentKind::Resume,
            &JOB,
        );
        assert!(prompt.starts_with(DEFAULT_RESUME_TEMPLATE));
    }

    #[test]
    fn test_custom_template_replaces_default() {
        let prompt = compose("Rewrite tersely.", "src", DocumentKind::Resume, &JOB);
        assert!(prompt.starts_with("Rewrite tersely.\n\n"));
        assert!(!prompt.contains(DEFAULT_RESUME_TEMPLATE));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose("T", "doc", DocumentKind::Resume, &JOB);
        let b = compose("T", "doc", DocumentKind::Resume, &JOB);
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_company_uses_placeholder() {
        let job = JobPosting {
            company: None,
            ..JOB
        };
        let prompt = compose("T", "doc", DocumentKind::Resume, &job);
        assert!(prompt.contains("Company: Not specified\n"));
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let prompt = compose("TEMPLATE", "SOURCE", DocumentKind::Resume, &JOB);
        let template_at = prompt.find("TEMPLATE").unwrap();
        let doc_at = prompt.find("RESUME:\nSOURCE").unwrap();
        let jd_at = prompt.find("JOB DESCRIPTION:").unwrap();
        let out_at = prompt.find("OUTPUT FORMAT:").unwrap();
        assert!(template_at < doc_at && doc_at < jd_at && jd_at < out_at);
    }

    #[test]
    fn test_output_directive_names_all_three_fields() {
        let prompt = compose("T", "doc", DocumentKind::CoverLetter, &JOB);
        assert!(prompt.contains("optimized_latex"));
        assert!(prompt.contains("suggestions"));
        assert!(prompt.contains("ats_score"));
    }

    #[test]
    fn test_cover_letter_uses_its_own_section_label() {
        let prompt = compose("T", "doc", DocumentKind::CoverLetter, &JOB);
        assert!(prompt.contains("COVER LETTER TEMPLATE:\ndoc"));
    }
}
