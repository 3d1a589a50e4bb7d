use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::{FileHandle, PDF_MAGIC};

/// Multipart field name the upload form posts the document under.
const UPLOAD_FIELD: &str = "cv";

/// POST /api/v1/uploads
///
/// Accepts a multipart form with a single `cv` field, validates it is a
/// PDF within the size limit, and stores it for later extraction.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<FileHandle>, AppError> {
    let mut content: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            content = Some(bytes);
            break;
        }
    }

    let content = content.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    if content.len() > state.config.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Upload exceeds the {} byte limit",
            state.config.max_upload_bytes
        )));
    }
    if !content.starts_with(PDF_MAGIC) {
        return Err(AppError::UnsupportedMediaType(
            "Only PDF files are allowed".to_string(),
        ));
    }

    let handle = state
        .store
        .put(content)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    info!(file_id = %handle.file_id, size = handle.size, "Stored uploaded CV");
    Ok(Json(handle))
}
