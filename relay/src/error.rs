//! Relay errors
//!
//! Taxonomy for the outbound provider call. Upstream error bodies are
//! logged server-side and never carried inside these variants, so error
//! messages are safe to surface in API responses.

/// Relay errors
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Network error (connection refused, timeout, etc.)
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the provider
    #[error("AI service unavailable (HTTP {status})")]
    Http { status: u16 },

    /// Response body was not the expected envelope
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration error (missing credential, unknown provider)
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Json(err.to_string())
    }
}
