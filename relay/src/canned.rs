//! Canned relay
//!
//! Deterministic no-network strategy. An earlier deployment shipped
//! canned study text instead of a live provider; that revision survives
//! here as a selectable strategy, and doubles as the test stub.

use crate::error::RelayError;
use crate::AiRelay;
use async_trait::async_trait;

/// Canned relay strategy (returns fixed text, no network)
#[derive(Debug)]
pub struct CannedRelay {
    /// Text to return for every prompt
    response: String,
}

impl CannedRelay {
    /// Create a canned relay with the default study text
    pub fn new() -> Self {
        Self {
            response: Self::default_response(),
        }
    }

    /// Create a canned relay with a custom response
    pub fn with_response(response: String) -> Self {
        Self { response }
    }

    fn default_response() -> String {
        "**Study Notes**\n\n\
         • Start from the core definition and restate it in your own words.\n\
         • Work through one concrete example end to end.\n\
         • Note any formulas and the conditions under which they hold.\n\
         • Quiz yourself on the edge cases before moving on.\n"
            .to_string()
    }
}

impl Default for CannedRelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiRelay for CannedRelay {
    async fn generate(&self, _prompt: &str) -> Result<String, RelayError> {
        Ok(self.response.clone())
    }

    fn provider_name(&self) -> &str {
        "canned"
    }
}
