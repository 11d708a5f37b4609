//! Error types for the thumbnail server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pdf_thumbnail::service::{ErrorKind, ThumbnailError};
use serde::Serialize;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Thumbnail(#[from] ThumbnailError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorKind,
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Thumbnail(err) = &self;

        let (status, message) = match err.kind() {
            ErrorKind::SourceNotFound => (StatusCode::NOT_FOUND, err.to_string()),
            ErrorKind::PageOutOfRange => (StatusCode::BAD_REQUEST, err.to_string()),
            ErrorKind::RenderFailed | ErrorKind::EncodingFailed | ErrorKind::WriteFailed => {
                tracing::error!("Thumbnail error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Cannot write image data".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: err.kind(),
            code: err.code(),
            message,
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
        });

        (status, body).into_response()
    }
}
