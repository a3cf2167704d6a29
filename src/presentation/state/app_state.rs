use std::sync::Arc;

use crate::application::ports::TextExtractor;
use crate::application::services::AnalysisService;

pub struct AppState<E>
where
    E: TextExtractor,
{
    pub analysis_service: Arc<AnalysisService<E>>,
}

impl<E> Clone for AppState<E>
where
    E: TextExtractor,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
        }
    }
}
