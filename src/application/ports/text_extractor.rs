use async_trait::async_trait;

use crate::domain::Document;

/// Narrow seam over text recovery from uploaded bytes.
///
/// Implementations are best-effort: unreadable input yields `Ok` with an
/// empty string, and the caller decides whether that is an error. An `Err`
/// means the extraction machinery itself failed, not that the document had
/// no text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
