//! Relay factory
//!
//! Creates the live relay strategy from configuration. Strategies are
//! never merged: a deployment runs exactly one.

use crate::canned::CannedRelay;
use crate::error::RelayError;
use crate::gemini::GeminiRelay;
use crate::Relay;
use studybuddy_core::RelayConfig;

/// Create the relay strategy selected by configuration
pub fn create_relay(config: &RelayConfig) -> Result<Relay, RelayError> {
    match config.provider.as_str() {
        "gemini" => Ok(Relay::Gemini(GeminiRelay::from_config(config)?)),
        "canned" => Ok(Relay::Canned(CannedRelay::new())),
        other => Err(RelayError::Configuration(format!(
            "unknown relay provider: {other}"
        ))),
    }
}
