//! Route modules for the thumbnail server

pub mod health;
pub mod thumbnails;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Application router without transport layers
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/health", get(health::health_check))
        .nest("/api/v1/thumbnails", thumbnails::router())
        .with_state(state)
}
