use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::TextExtractor;
use crate::application::services::AnalysisError;
use crate::domain::{ContentType, Document};
use crate::presentation::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    ai_probability: f64,
    word_count: usize,
    text_length: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<E>(
    State(state): State<AppState<E>>,
    mut multipart: Multipart,
) -> Response
where
    E: TextExtractor + 'static,
{
    let (filename, content_type, data) = loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some(UPLOAD_FIELD) {
                    continue;
                }

                let filename = field.file_name().unwrap_or("unknown").to_string();
                let mime = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();

                let Some(content_type) = ContentType::from_mime(&mime) else {
                    tracing::warn!(content_type = %mime, filename = %filename, "Upload is not a PDF");
                    return error_response(StatusCode::BAD_REQUEST, "File must be a PDF");
                };

                match field.bytes().await {
                    Ok(data) => break (filename, content_type, data),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Failed to analyze resume",
                        );
                    }
                }
            }
            Ok(None) => {
                tracing::warn!("Analyze request without a file field");
                return error_response(StatusCode::BAD_REQUEST, "No file provided");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart body");
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to analyze resume",
                );
            }
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

    let document = Document::new(filename, content_type, data.len() as u64);

    match state.analysis_service.analyze(&document, &data).await {
        Ok(analysis) => (
            StatusCode::OK,
            Json(AnalyzeResponse {
                ai_probability: analysis.ai_probability,
                word_count: analysis.word_count,
                text_length: analysis.text_length,
            }),
        )
            .into_response(),
        Err(AnalysisError::FileTooLarge { .. }) => {
            error_response(StatusCode::BAD_REQUEST, "File size must be less than 10MB")
        }
        Err(AnalysisError::NoExtractableText) => {
            error_response(StatusCode::BAD_REQUEST, "Could not extract text from PDF")
        }
        Err(AnalysisError::Extraction(e)) => {
            tracing::error!(error = %e, "Extraction machinery failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to analyze resume")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
