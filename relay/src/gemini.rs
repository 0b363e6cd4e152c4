//! Gemini relay
//!
//! Strategy for Google's generative-language API. One POST of
//! `{"contents":[{"parts":[{"text": prompt}]}]}` per generation; the
//! first candidate's text is the result. The API key is injected at
//! construction, never read from the environment per call.

use crate::error::RelayError;
use crate::transport::Transport;
use crate::AiRelay;
use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};
use studybuddy_core::RelayConfig;

/// Default base URL for the generative-language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Placeholder returned when a success envelope carries no candidate text
pub const NO_RESPONSE_FALLBACK: &str = "No response generated.";

/// Gemini relay strategy
#[derive(Debug)]
pub struct GeminiRelay {
    /// Base URL (e.g. https://generativelanguage.googleapis.com/v1beta)
    base_url: String,
    /// Model name (e.g. gemini-1.5-flash)
    model: String,
    /// API key, passed as a query parameter per the provider's scheme
    api_key: String,
    /// HTTP transport
    transport: Transport,
}

impl GeminiRelay {
    /// Create a new Gemini relay
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        Self {
            base_url,
            model,
            api_key,
            transport: Transport::default(),
        }
    }

    /// Create a relay with a custom transport (for testing)
    pub fn with_transport(
        base_url: String,
        model: String,
        api_key: String,
        transport: Transport,
    ) -> Self {
        Self {
            base_url,
            model,
            api_key,
            transport,
        }
    }

    /// Create a relay from configuration
    ///
    /// The credential must already be resolved; an empty key is a
    /// configuration error here rather than a 401 later.
    pub fn from_config(config: &RelayConfig) -> Result<Self, RelayError> {
        if config.api_key.is_empty() {
            return Err(RelayError::Configuration(
                "gemini provider requires an api_key".to_string(),
            ));
        }
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Self::new(base_url, model, config.api_key.clone()))
    }

    /// Generation endpoint URL (carries the key; never log this)
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }

    /// Build the request envelope
    fn build_request(prompt: &str) -> JsonValue {
        json!({
            "contents": [
                {
                    "parts": [{ "text": prompt }]
                }
            ]
        })
    }

    /// Extract the first candidate's text from a success envelope
    ///
    /// An envelope that parses but lacks the candidate-text path yields
    /// the literal placeholder instead of an error.
    pub(crate) fn extract_text(body: &str) -> Result<String, RelayError> {
        let envelope: JsonValue = serde_json::from_str(body)
            .map_err(|e| RelayError::InvalidResponse(format!("malformed envelope: {e}")))?;

        let text = envelope["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string());

        Ok(text)
    }
}

#[async_trait]
impl AiRelay for GeminiRelay {
    async fn generate(&self, prompt: &str) -> Result<String, RelayError> {
        let request = Self::build_request(prompt);
        let response = self.transport.post_json(&self.endpoint(), &request).await?;

        if !response.is_success() {
            // The upstream body stays in the server log only.
            tracing::error!(
                status = response.status,
                body = %response.body,
                "generative-language API error"
            );
            return Err(RelayError::Http {
                status: response.status,
            });
        }

        Self::extract_text(&response.body)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::FakeTransport;

    fn candidate_envelope(text: &str) -> String {
        serde_json::to_string(&json!({
            "candidates": [
                {
                    "content": {
                        "parts": [{ "text": text }]
                    }
                }
            ]
        }))
        .unwrap()
    }

    fn relay_with(fake: FakeTransport) -> GeminiRelay {
        GeminiRelay::with_transport(
            "https://example.invalid/v1beta".to_string(),
            "test-model".to_string(),
            "test-key".to_string(),
            Transport::Fake(fake),
        )
    }

    #[test]
    fn test_build_request_shape() {
        let request = GeminiRelay::build_request("explain entropy");
        assert_eq!(
            request["contents"][0]["parts"][0]["text"],
            "explain entropy"
        );
    }

    #[test]
    fn test_endpoint_includes_model_and_key() {
        let relay = GeminiRelay::new(
            "https://example.invalid/v1beta/".to_string(),
            "gemini-1.5-flash".to_string(),
            "k123".to_string(),
        );
        assert_eq!(
            relay.endpoint(),
            "https://example.invalid/v1beta/models/gemini-1.5-flash:generateContent?key=k123"
        );
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let config = RelayConfig {
            provider: "gemini".to_string(),
            base_url: None,
            model: None,
            api_key: String::new(),
        };
        assert!(matches!(
            GeminiRelay::from_config(&config),
            Err(RelayError::Configuration(_))
        ));
    }

    #[test]
    fn test_extract_text_first_candidate() {
        let body = candidate_envelope("Entropy measures disorder.");
        assert_eq!(
            GeminiRelay::extract_text(&body).unwrap(),
            "Entropy measures disorder."
        );
    }

    #[test]
    fn test_extract_text_missing_path_yields_placeholder() {
        assert_eq!(GeminiRelay::extract_text("{}").unwrap(), NO_RESPONSE_FALLBACK);
        assert_eq!(
            GeminiRelay::extract_text("{\"candidates\":[]}").unwrap(),
            NO_RESPONSE_FALLBACK
        );
    }

    #[test]
    fn test_extract_text_malformed_body_is_error() {
        assert!(matches!(
            GeminiRelay::extract_text("not json"),
            Err(RelayError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_generate_success() {
        let relay = relay_with(FakeTransport::ok(&candidate_envelope("X")));
        assert_eq!(relay.generate("prompt").await.unwrap(), "X");
    }

    #[tokio::test]
    async fn test_generate_non_success_status_is_unavailable() {
        let relay = relay_with(FakeTransport::with_status(429, "quota exceeded"));
        let err = relay.generate("prompt").await.unwrap_err();
        assert!(matches!(err, RelayError::Http { status: 429 }));
        // Error display must not leak the upstream body.
        assert!(!format!("{err}").contains("quota"));
    }

    #[tokio::test]
    async fn test_generate_network_error() {
        let relay = relay_with(FakeTransport::with_error("dns failure"));
        assert!(matches!(
            relay.generate("prompt").await,
            Err(RelayError::Network(_))
        ));
    }
}
