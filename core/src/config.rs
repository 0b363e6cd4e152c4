//! Service configuration
//!
//! TOML configuration for the server, relay, and store. Credentials are
//! never read from the environment at request time: an `env:NAME` value
//! is resolved once at load, and the resolved key is injected into the
//! relay at construction.

use serde::Deserialize;
use std::path::Path;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An `env:NAME` reference points at an unset variable
    #[error("environment variable '{0}' referenced by config is not set")]
    MissingEnv(String),
}

/// Top-level service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// AI relay strategy settings
    pub relay: RelayConfig,
    /// Session store settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

/// AI relay strategy settings
///
/// `provider` selects the strategy ("gemini" or "canned"); exactly one
/// strategy is live per deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Provider strategy name
    pub provider: String,
    /// Provider base URL (strategy default when absent)
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model name (strategy default when absent)
    #[serde(default)]
    pub model: Option<String>,
    /// API key, either literal or an `env:NAME` reference
    #[serde(default)]
    pub api_key: String,
}

/// Session store settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database path
    pub db_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: "study_sessions.db".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file and resolve `env:` references
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string and resolve `env:` references
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(content)?;
        config.relay.api_key = resolve_env_var(&config.relay.api_key)?;
        Ok(config)
    }
}

/// Resolve an `env:NAME` reference to the variable's value
///
/// Literal values pass through unchanged. A reference to an unset
/// variable is a configuration error, not a silent empty credential.
fn resolve_env_var(value: &str) -> Result<String, ConfigError> {
    if let Some(name) = value.strip_prefix("env:") {
        std::env::var(name).map_err(|_| ConfigError::MissingEnv(name.to_string()))
    } else {
        Ok(value.to_string())
    }
}
