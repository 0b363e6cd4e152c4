//! API request/response models

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
}

/// Inbound generation request
///
/// Both fields are optional at the wire level so that missing fields
/// surface as a 400 validation error rather than a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Requested mode ("explain" | "summarize" | "quiz" | "flashcard")
    #[serde(default)]
    pub mode: Option<String>,
    /// Topic or notes to work from
    #[serde(default)]
    pub content: Option<String>,
}

/// Successful generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text
    pub response: String,
}

/// Uniform JSON error shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short user-facing error message
    pub error: String,
    /// Failure detail (internal errors only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
