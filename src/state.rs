//! Application state management

use std::sync::Arc;

use pdf_thumbnail::service::ThumbnailService;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    service: ThumbnailService,
}

impl AppState {
    pub fn new(config: Config, service: ThumbnailService) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, service }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the thumbnail service
    pub fn service(&self) -> &ThumbnailService {
        &self.inner.service
    }
}
