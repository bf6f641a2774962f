use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("text required")]
    EmptyText,

    #[error("Speech synthesis is not configured")]
    NotConfigured,

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("Speech provider request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// The voice endpoints keep their own response shape: a bare `error` token
/// the kiosk script can branch on, with the upstream detail alongside.
impl IntoResponse for SpeechError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            SpeechError::EmptyText => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "text required" }),
            ),
            SpeechError::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "error": "tts_not_available" }),
            ),
            SpeechError::Synthesis(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "tts_failed", "detail": detail }),
            ),
            SpeechError::Upstream(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "tts_failed", "detail": e.to_string() }),
            ),
        };

        tracing::error!("Speech error: {}: {}", status, self);

        (status, Json(body)).into_response()
    }
}
