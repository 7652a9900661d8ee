//! Error types for the registry client.

use thiserror::Error;

/// Errors produced by registry calls.
///
/// Per-item registration issues are NOT errors — the registry reports those
/// inside a successful response (see `RegistrationOutcome::errors`). This
/// enum only covers call-level failures, which abort the whole batch.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry answered with a non-2xx status.
    #[error("registry returned {} {}: {}", .status, .status_text, .message.as_deref().unwrap_or("<no body>"))]
    Upstream {
        status: u16,
        status_text: String,
        message: Option<String>,
    },

    /// Network-level failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body did not match the expected wire model.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        RegistryError::Http(err.to_string())
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
