//! StudyBuddy API Module
//!
//! HTTP surface of the study-aid service: the generation endpoint, the
//! session-history endpoints, preflight/CORS handling, and the server
//! wiring.

pub mod handlers;
pub mod models;
pub mod server;

pub use handlers::ApiState;
pub use models::ApiConfig;
pub use server::{router, ApiServer};
