use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::TextExtractor;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{analyze_handler, health_handler};
use crate::presentation::state::AppState;

// Generous headroom above the 10 MiB document cap, so oversized uploads are
// answered by the size rule rather than a framework 413.
const BODY_LIMIT_BYTES: usize = 32 * 1024 * 1024;

pub fn create_router<E>(state: AppState<E>) -> Router
where
    E: TextExtractor + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/analyze", post(analyze_handler::<E>))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
