//! writewise-ui library - single-page writing feedback module
//!
//! Serves the WriteWise page and the JSON analysis API. All state is the
//! read-only oracle handle set selected at startup; nothing persists across
//! requests.

use axum::Router;

pub mod api;
pub mod error;
pub mod oracles;

pub use error::{ApiError, ApiResult};

use oracles::OracleSet;

/// Maximum accepted request body (1 MB is generous for pasted text)
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Oracle handles selected at startup (immutable thereafter)
    pub oracles: OracleSet,
}

impl AppState {
    /// Create new application state
    pub fn new(oracles: OracleSet) -> Self {
        Self { oracles }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::extract::DefaultBodyLimit;
    use axum::routing::{get, post};
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/analyze", post(api::analyze_text))
        .route("/api/status", get(api::get_status))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
