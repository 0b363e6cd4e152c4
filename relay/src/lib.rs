//! StudyBuddy AI Relay
//!
//! Provider-agnostic interface for the one outbound generative-language
//! call per request. Historical deployments swapped providers (a hosted
//! generative-language API and a canned-text fallback); those live here
//! as mutually exclusive strategies behind one trait, selected by
//! configuration. No retries, no streaming.

pub mod canned;
pub mod error;
pub mod factory;
pub mod gemini;
pub mod transport;

pub use canned::CannedRelay;
pub use error::RelayError;
pub use factory::create_relay;
pub use gemini::GeminiRelay;
pub use transport::{FakeTransport, HttpResponse, Transport};

use async_trait::async_trait;

/// AI relay strategy trait
///
/// Accepts a fully built prompt and returns the generated text.
#[async_trait]
pub trait AiRelay: Send + Sync {
    /// Issue one generation call for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, RelayError>;

    /// Strategy name (for logs and diagnostics)
    fn provider_name(&self) -> &str;
}

/// Concrete relay enum
///
/// Wraps all strategies, avoiding dyn dispatch at the call site.
/// Exactly one variant is live per deployment.
#[derive(Debug)]
pub enum Relay {
    /// Hosted generative-language API
    Gemini(GeminiRelay),
    /// Deterministic canned text, no network
    Canned(CannedRelay),
}

#[async_trait]
impl AiRelay for Relay {
    async fn generate(&self, prompt: &str) -> Result<String, RelayError> {
        match self {
            Relay::Gemini(relay) => relay.generate(prompt).await,
            Relay::Canned(relay) => relay.generate(prompt).await,
        }
    }

    fn provider_name(&self) -> &str {
        match self {
            Relay::Gemini(relay) => relay.provider_name(),
            Relay::Canned(relay) => relay.provider_name(),
        }
    }
}
