//! AI status endpoint
//!
//! Lets the page render the "AI Models Online" / degraded-mode badge.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// AI availability status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// False when stub oracles are standing in for the inference backend
    pub ai_online: bool,
    pub grammar_backend: String,
    pub rewrite_backend: String,
}

/// GET /api/status
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        ai_online: !state.oracles.degraded,
        grammar_backend: state.oracles.grammar.name().to_string(),
        rewrite_backend: state.oracles.rewrite.name().to_string(),
    })
}
