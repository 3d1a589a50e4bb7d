use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::upload::UploadStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Upload store seam. Default: disk-backed, one file per upload id.
    pub store: Arc<dyn UploadStore>,
    /// Text extraction seam. Default: pdf-extract on the blocking pool.
    pub extractor: Arc<dyn TextExtractor>,
}
