//! StudyBuddy Core Module
//!
//! Domain types shared by the relay, store, and API crates:
//! the closed study-aid [`Mode`] set, the pure prompt builder, and
//! service configuration loading.

pub mod config;
pub mod mode;
pub mod prompt;

pub use config::{AppConfig, ConfigError, RelayConfig, ServerConfig, StoreConfig};
pub use mode::Mode;
pub use prompt::build_prompt;
