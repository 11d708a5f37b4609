//! Thumbnail API endpoint
//!
//! `POST /api/v1/thumbnails` renders one page and answers with the written
//! file's URI and the page size, or a classified error.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use pdf_thumbnail::service::{OutputDescriptor, ThumbnailRequest};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    /// Path or `file://` URI of the PDF
    pub file_path: String,
    /// Zero-based page index
    pub page: i64,
    /// Prefix for the output file name (defaults to the file path)
    #[serde(default)]
    pub output_name: Option<String>,
}

impl From<GenerateBody> for ThumbnailRequest {
    fn from(body: GenerateBody) -> Self {
        let request = ThumbnailRequest::new(body.file_path, body.page);
        match body.output_name {
            Some(name) => request.with_name_hint(name),
            None => request,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(generate))
}

async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Result<(StatusCode, Json<OutputDescriptor>), AppError> {
    let descriptor = state.service().generate(body.into()).await?;
    Ok((StatusCode::CREATED, Json(descriptor)))
}
