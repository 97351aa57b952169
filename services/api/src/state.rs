//! Application state shared across request handlers.

use std::sync::Arc;

use devurn_urn::Detector;

use crate::config::Config;

/// Shared application state.
///
/// This is passed to all request handlers via Axum's state extractor. It is
/// read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    detector: Detector,
    cors_permissive: bool,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: &Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                detector: Detector::new(config.detect_policy),
                cors_permissive: config.cors_permissive,
            }),
        }
    }

    /// The subtype detector, configured with the deployment's tie-breaks.
    pub fn detector(&self) -> &Detector {
        &self.inner.detector
    }

    pub fn cors_permissive(&self) -> bool {
        self.inner.cors_permissive
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
