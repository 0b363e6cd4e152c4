//! API Handlers Module
//!
//! Request handlers for the study-aid service. Each request is one
//! independent cycle: validate, build the prompt, relay, shape the JSON
//! response. Failures map to the uniform `{ error, details }` shape and
//! are logged server-side; none of them crash the process.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use studybuddy_core::{build_prompt, Mode};
use studybuddy_relay::{AiRelay, Relay};
use studybuddy_store::{NewStudySession, SessionStore, StoreError};

use crate::models::{ErrorResponse, GenerateRequest, GenerateResponse};

/// Shared state of the API server
pub struct ApiState {
    /// Live relay strategy
    pub relay: Relay,
    /// Session store
    pub store: Arc<SessionStore>,
}

/// Health check endpoint
pub async fn health_check() -> Json<HashMap<String, String>> {
    let mut response = HashMap::new();
    response.insert("status".to_string(), "healthy".to_string());
    response.insert("service".to_string(), "studybuddy-api".to_string());
    Json(response)
}

/// Preflight endpoint: 200, empty body
///
/// The CORS headers themselves are attached to every response by the
/// server's header layers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Generate a study aid
///
/// The body is taken as raw text and parsed here so that malformed JSON
/// follows the catch-all 500 path instead of an extractor rejection.
pub async fn generate(State(state): State<Arc<ApiState>>, body: String) -> Response {
    let request: GenerateRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("failed to parse generation request: {e}");
            return internal_error(e.to_string());
        }
    };

    let mode_raw = request.mode.as_deref().unwrap_or("");
    let content = request.content.as_deref().map(str::trim).unwrap_or("");
    if mode_raw.is_empty() || content.is_empty() {
        return bad_request("Missing mode or content");
    }

    let mode = match Mode::from_str(mode_raw) {
        Ok(mode) => mode,
        Err(_) => return bad_request("Invalid mode"),
    };

    let prompt = build_prompt(mode, content);
    match state.relay.generate(&prompt).await {
        Ok(text) => (StatusCode::OK, Json(GenerateResponse { response: text })).into_response(),
        Err(e) => {
            tracing::error!(provider = state.relay.provider_name(), error = %e, "generation failed");
            internal_error(e.to_string())
        }
    }
}

/// Record a completed session
pub async fn create_session(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<NewStudySession>,
) -> Response {
    if request.input_content.trim().is_empty() {
        return bad_request("Missing input_content");
    }

    match state.store.insert(request) {
        Ok(session) => (StatusCode::CREATED, Json(session)).into_response(),
        Err(e) => {
            tracing::error!("failed to store session: {e}");
            internal_error(e.to_string())
        }
    }
}

/// List the ten most recent sessions, newest first
pub async fn list_sessions(State(state): State<Arc<ApiState>>) -> Response {
    match state.store.list_recent() {
        Ok(sessions) => Json(sessions).into_response(),
        Err(e) => {
            tracing::error!("failed to list sessions: {e}");
            internal_error(e.to_string())
        }
    }
}

/// Delete a session by id
pub async fn delete_session(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Response {
    match state.store.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(StoreError::NotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("session not found: {id}"),
                details: None,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to delete session: {e}");
            internal_error(e.to_string())
        }
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
            details: None,
        }),
    )
        .into_response()
}

fn internal_error(details: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Unable to process request".to_string(),
            details: Some(details),
        }),
    )
        .into_response()
}
