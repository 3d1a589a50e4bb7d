//! Text extraction seam: PDF bytes in, visible text in reading order out.

pub mod handlers;

use async_trait::async_trait;

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the document's visible text in reading order. Fails only
    /// for unreadable or corrupt documents; that failure propagates to
    /// the caller as-is rather than being papered over.
    async fn extract_text(&self, content: &[u8]) -> Result<String, AppError>;
}

/// `pdf-extract` backed extractor. Parsing is CPU-bound, so it runs on
/// the blocking pool rather than stalling the async executor.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, content: &[u8]) -> Result<String, AppError> {
        let bytes = content.to_vec();
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?
            .map_err(|e| AppError::Extraction(e.to_string()))
    }
}
