use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Machine-readable code attached to revisit-window rejections. The kiosk
/// front end keys its Telugu re-registration prompt off this value.
pub const EXPIRED_CODE: &str = "EXPIRED_14D";

/// Fixed Telugu line shown and spoken when the revisit window has lapsed.
pub const EXPIRED_MESSAGE: &str =
    "వాలిడిటీ సమయం పూర్తైంది. దయచేసి కొత్త రిజిస్ట్రేషన్ చేయించుకోండి.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Revisit window expired")]
    Expired,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "status": "error", "message": msg }),
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "status": "error", "message": msg }),
            ),
            AppError::Expired => (
                StatusCode::BAD_REQUEST,
                json!({
                    "status": "error",
                    "code": EXPIRED_CODE,
                    "message": EXPIRED_MESSAGE,
                }),
            ),
            AppError::Database(msg) | AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "status": "error", "message": msg }),
            ),
        };

        tracing::error!("Error: {}: {}", status, self);

        (status, Json(body)).into_response()
    }
}
