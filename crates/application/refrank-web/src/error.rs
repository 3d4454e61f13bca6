//! Error type for the web server

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Result type for refrank-web operations
pub type Result<T> = std::result::Result<T, WebError>;

/// Errors that can occur in refrank-web
///
/// Unknown paths are not errors; the fallback handler renders them as a 404 page.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Config file error: {0}")]
    ConfigFile(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
