//! HTTP transport for relay strategies
//!
//! Abstraction over the HTTP client so relay behavior is testable
//! without a live network. The fake returns a fixture status and body.

use crate::error::RelayError;
use serde_json::Value as JsonValue;

/// One HTTP exchange result: status plus raw body text
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Concrete transport enum
///
/// Wraps the real client and the test fake, avoiding dyn compatibility
/// issues in async code.
#[derive(Debug)]
pub enum Transport {
    Real(reqwest::Client),
    Fake(FakeTransport),
}

impl Transport {
    /// POST a JSON body and return the response status and body text
    pub async fn post_json(&self, url: &str, body: &JsonValue) -> Result<HttpResponse, RelayError> {
        match self {
            Transport::Real(client) => {
                let response = client
                    .post(url)
                    .json(body)
                    .send()
                    .await
                    .map_err(|e| RelayError::Network(e.to_string()))?;
                let status = response.status().as_u16();
                let body = response
                    .text()
                    .await
                    .map_err(|e| RelayError::Network(e.to_string()))?;
                Ok(HttpResponse { status, body })
            }
            Transport::Fake(fake) => fake.post_json(),
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Transport::Real(reqwest::Client::new())
    }
}

/// Fake transport for testing (uses fixture strings)
#[derive(Debug)]
pub struct FakeTransport {
    /// Status code to return
    pub status: u16,
    /// Response body to return
    pub body: String,
    /// Network error to return instead (if set)
    pub error: Option<String>,
}

impl FakeTransport {
    /// Fake that returns 200 with the given body
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            error: None,
        }
    }

    /// Fake that returns the given status and body
    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            error: None,
        }
    }

    /// Fake that fails with a network error
    pub fn with_error(msg: &str) -> Self {
        Self {
            status: 0,
            body: String::new(),
            error: Some(msg.to_string()),
        }
    }

    fn post_json(&self) -> Result<HttpResponse, RelayError> {
        if let Some(ref msg) = self.error {
            return Err(RelayError::Network(msg.clone()));
        }
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fake_transport_returns_fixture() {
        let transport = Transport::Fake(FakeTransport::ok("{\"fixture\":true}"));
        let response = transport.post_json("http://test", &json!({})).await.unwrap();
        assert_eq!(response.status, 200);
        assert!(response.is_success());
        assert_eq!(response.body, "{\"fixture\":true}");
    }

    #[tokio::test]
    async fn test_fake_transport_non_success_status() {
        let transport = Transport::Fake(FakeTransport::with_status(503, "overloaded"));
        let response = transport.post_json("http://test", &json!({})).await.unwrap();
        assert!(!response.is_success());
        assert_eq!(response.status, 503);
    }

    #[tokio::test]
    async fn test_fake_transport_network_error() {
        let transport = Transport::Fake(FakeTransport::with_error("connection refused"));
        let result = transport.post_json("http://test", &json!({})).await;
        assert!(matches!(result, Err(RelayError::Network(_))));
    }
}
