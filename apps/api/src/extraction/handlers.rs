use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::parser::parse_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseTextRequest {
    pub raw_text: String,
}

/// GET /api/v1/uploads/:file_id/record
///
/// Server-side entry point: fetches a stored upload, extracts its text,
/// and parses it into a structured record.
pub async fn handle_extract_record(
    State(state): State<AppState>,
    Path(file_id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    let content = state
        .store
        .get(file_id)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("File {file_id} not found")))?;

    let text = state.extractor.extract_text(&content).await?;
    let record = parse_resume(&text);

    info!(file_id = %file_id, chars = text.len(), "Extracted and parsed uploaded CV");
    Ok(Json(record))
}

/// POST /api/v1/resumes/parse
///
/// Client-side entry point for callers that extracted the text on their
/// own device. Produces the identical record shape as the upload path
/// for identical input text.
pub async fn handle_parse_text(
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ResumeRecord>, AppError> {
    if req.raw_text.trim().is_empty() {
        return Err(AppError::Validation("rawText must not be empty".to_string()));
    }
    Ok(Json(parse_resume(&req.raw_text)))
}
