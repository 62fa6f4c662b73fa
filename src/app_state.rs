//! Application state for the Actix-web server
//!
//! The `AppState` struct is wrapped in `web::Data` and shared across all
//! HTTP request handlers. No per-request state lives here: every crawl
//! request owns its browser session exclusively, so the shared state is
//! just configuration and counters.

use crate::config::Config;
use crate::metrics::MetricsTracker;

/// Shared application state for Actix-web handlers
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Metrics tracker for render outcomes (inherently thread-safe)
    pub metrics: MetricsTracker,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            metrics: MetricsTracker::new(),
        }
    }
}
