#![allow(dead_code)]

//! Rendering seam. The service owns the structured record and the template
//! selection; turning them into a printable document is a downstream
//! collaborator implemented behind this trait.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::session::EditorSession;

/// Visual template the user picked in the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Professional,
    Modern,
    Executive,
}

/// Page size for document export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
}

/// A finished document handed back to the caller.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Renderer seam. Implementations take the editor session (record plus
/// presentation choices) and produce a document for download.
pub trait Renderer: Send + Sync {
    fn render(&self, session: &EditorSession) -> Result<RenderedDocument, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_kind_serde_names() {
        let kind: TemplateKind = serde_json::from_str(r#""executive""#).unwrap();
        assert_eq!(kind, TemplateKind::Executive);
        assert_eq!(
            serde_json::to_string(&TemplateKind::Professional).unwrap(),
            r#""professional""#
        );
    }

    #[test]
    fn test_paper_size_serde_names() {
        let size: PaperSize = serde_json::from_str(r#""a4""#).unwrap();
        assert_eq!(size, PaperSize::A4);
        assert_eq!(serde_json::to_string(&PaperSize::Letter).unwrap(), r#""letter""#);
    }
}
