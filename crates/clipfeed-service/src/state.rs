//! Application state.

use std::sync::Arc;

use clipfeed_store::Store;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<dyn Store>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    /// Clamp a requested feed size to the configured bound.
    #[must_use]
    pub fn feed_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(clipfeed_store::DEFAULT_FEED_LIMIT)
            .min(self.config.feed_max_limit)
    }
}
