//! Application state for the web server

use crate::config::WebConfig;

/// Shared, read-only application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: WebConfig,
    /// Server start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(config: WebConfig) -> Self {
        Self {
            config,
            started_at: chrono::Utc::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> i64 {
        (chrono::Utc::now() - self.started_at).num_seconds()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(WebConfig::default())
    }
}
