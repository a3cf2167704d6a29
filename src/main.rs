use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use resume_analyzer::application::services::{AnalysisService, HeuristicScorer};
use resume_analyzer::domain::IndicatorSet;
use resume_analyzer::infrastructure::observability::{init_tracing, TracingConfig};
use resume_analyzer::infrastructure::text_processing::RawPdfExtractor;
use resume_analyzer::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(&TracingConfig::default());

    let extractor = Arc::new(RawPdfExtractor::new());
    let indicators = Arc::new(IndicatorSet::builtin());
    let scorer = HeuristicScorer::new(indicators);

    let analysis_service = Arc::new(AnalysisService::new(
        extractor,
        scorer,
        settings.upload.max_file_size_bytes(),
    ));

    let state = AppState { analysis_service };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
