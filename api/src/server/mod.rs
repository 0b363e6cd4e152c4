//! API Server Module
//!
//! Router construction and server startup. The three CORS headers ride
//! on every response via header layers, and every API route answers
//! OPTIONS preflight with an empty 200.

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use studybuddy_relay::Relay;
use studybuddy_store::SessionStore;

use crate::handlers::{
    create_session, delete_session, generate, health_check, list_sessions, preflight, ApiState,
};
use crate::models::ApiConfig;

/// Build the service router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/generate", post(generate).options(preflight))
        .route(
            "/api/sessions",
            get(list_sessions).post(create_session).options(preflight),
        )
        .route(
            "/api/sessions/:id",
            delete(delete_session).options(preflight),
        )
        .route("/health", get(health_check).options(preflight))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, DELETE, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Authorization, X-Client-Info, Apikey"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Main API server
pub struct ApiServer {
    /// Server configuration
    config: ApiConfig,
    /// Shared state
    state: Arc<ApiState>,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: ApiConfig, relay: Relay, store: Arc<SessionStore>) -> Self {
        let state = Arc::new(ApiState { relay, store });
        Self { config, state }
    }

    /// Start the API server
    pub async fn start(&self) -> Result<()> {
        let app = router(self.state.clone());

        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address: {e}"))?;
        info!("StudyBuddy API server listening on {addr}");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .await
            .map_err(|e| anyhow::anyhow!("API server failed: {e}"))?;

        Ok(())
    }
}
