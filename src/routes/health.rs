//! Health check endpoints

use axum::{extract::State, Json};
use pdf_thumbnail::raster::RenderPolicy;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
    /// Configured output location (`cache`, `data` or a path)
    pub output: String,
    pub policy: RenderPolicy,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let thumbnails = &state.config().thumbnails;
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "pdf-thumbnail",
        output: thumbnails.output.to_string(),
        policy: thumbnails.policy,
    })
}
