use std::sync::Arc;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{Analysis, Document};

use super::HeuristicScorer;

pub struct AnalysisService<E>
where
    E: TextExtractor,
{
    extractor: Arc<E>,
    scorer: HeuristicScorer,
    max_file_size_bytes: u64,
}

impl<E> AnalysisService<E>
where
    E: TextExtractor,
{
    pub fn new(extractor: Arc<E>, scorer: HeuristicScorer, max_file_size_bytes: u64) -> Self {
        Self {
            extractor,
            scorer,
            max_file_size_bytes,
        }
    }

    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    pub async fn analyze(
        &self,
        document: &Document,
        data: &[u8],
    ) -> Result<Analysis, AnalysisError> {
        if document.size_bytes > self.max_file_size_bytes {
            tracing::warn!(size_bytes = document.size_bytes, "Upload over size limit");
            return Err(AnalysisError::FileTooLarge {
                size_bytes: document.size_bytes,
                limit_bytes: self.max_file_size_bytes,
            });
        }

        let text = self.extractor.extract_text(data, document).await?;

        if text.trim().is_empty() {
            return Err(AnalysisError::NoExtractableText);
        }

        let analysis = self.scorer.score(&text);

        tracing::info!(
            ai_probability = analysis.ai_probability,
            word_count = analysis.word_count,
            text_length = analysis.text_length,
            "Resume analyzed"
        );

        Ok(analysis)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("file size {size_bytes} exceeds the {limit_bytes} byte limit")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("no extractable text in document")]
    NoExtractableText,
    #[error("extraction: {0}")]
    Extraction(#[from] TextExtractorError),
}
