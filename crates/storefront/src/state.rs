//! Application state shared across handlers.

use std::sync::Arc;

use chrono::FixedOffset;

use crate::config::StorefrontConfig;
use crate::middleware::SessionRecords;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Per-visitor state lives in
/// the session records, not here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    sessions: SessionRecords,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                sessions: SessionRecords::new(config.max_sessions),
                config,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Session records behind the session layer.
    #[must_use]
    pub fn sessions(&self) -> &SessionRecords {
        &self.inner.sessions
    }

    /// Offset used to show receipt times.
    #[must_use]
    pub fn display_offset(&self) -> FixedOffset {
        self.inner.config.display_offset
    }
}
