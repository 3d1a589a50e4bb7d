use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::ResumeRecord;
use crate::render::{PaperSize, TemplateKind};

/// Editor context carried explicitly through render and export flows.
/// Holds the working record plus presentation choices; there is no
/// process-wide "current document" anywhere in the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorSession {
    /// Upload the record was extracted from, when it came from a stored file.
    pub file_id: Option<Uuid>,
    pub record: ResumeRecord,
    pub template: TemplateKind,
    pub paper_size: PaperSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_defaults_match_editor_defaults() {
        let session = EditorSession::default();
        assert!(session.file_id.is_none());
        assert_eq!(session.template, TemplateKind::Professional);
        assert_eq!(session.paper_size, PaperSize::A4);
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let json = r#"{"template": "modern", "paperSize": "letter"}"#;
        let session: EditorSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.template, TemplateKind::Modern);
        assert_eq!(session.paper_size, PaperSize::Letter);
    }
}
