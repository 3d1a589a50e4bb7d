pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::extraction::handlers as extraction;
use crate::state::AppState;
use crate::upload::handlers as upload;

/// Headroom for multipart framing on top of the raw file limit.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

async fn not_implemented() -> Result<(), AppError> {
    Err(AppError::NotImplemented)
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health::health_handler))
        // Upload + server-side extraction
        .route("/api/v1/uploads", post(upload::handle_upload))
        .route(
            "/api/v1/uploads/:file_id/record",
            get(extraction::handle_extract_record),
        )
        // Client-side extraction entry point; identical record contract
        .route("/api/v1/resumes/parse", post(extraction::handle_parse_text))
        // Render API (the renderer is a downstream collaborator)
        .route("/api/v1/render", post(not_implemented))
        .route("/api/v1/render/:job_id", get(not_implemented))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
