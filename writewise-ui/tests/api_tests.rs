//! Integration tests for writewise-ui API endpoints
//!
//! Tests cover:
//! - Health endpoint
//! - Build info endpoint
//! - AI status endpoint (online vs degraded)
//! - Text analysis happy path and result bundle shape
//! - Empty-input rejection
//! - Display preview truncation
//! - Degraded-mode flagging
//!
//! All tests drive the router directly with stub oracles; no inference
//! backend is required.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method
use writewise_common::GrammarSignal;
use writewise_ui::oracles::{
    GrammarOracle, OracleError, OracleSet, RewriteOracle, StubGrammarOracle, StubRewriteOracle,
    PLACEHOLDER_SUGGESTION,
};
use writewise_ui::{build_router, AppState};

/// Test oracle whose every invocation fails with a network error
struct UnreachableGrammarOracle;

#[async_trait]
impl GrammarOracle for UnreachableGrammarOracle {
    fn name(&self) -> &'static str {
        "unreachable"
    }

    async fn analyze(&self, _text: &str) -> Result<GrammarSignal, OracleError> {
        Err(OracleError::Network("connection refused".to_string()))
    }
}

/// Test oracle whose every invocation fails with a network error
struct UnreachableRewriteOracle;

#[async_trait]
impl RewriteOracle for UnreachableRewriteOracle {
    fn name(&self) -> &'static str {
        "unreachable"
    }

    async fn rewrite(&self, _text: &str) -> Result<String, OracleError> {
        Err(OracleError::Network("connection refused".to_string()))
    }
}

/// Test helper: app with stub oracles marked as a healthy session
fn setup_app_online() -> axum::Router {
    let oracles = OracleSet {
        grammar: Arc::new(StubGrammarOracle),
        rewrite: Arc::new(StubRewriteOracle),
        degraded: false,
    };
    build_router(AppState::new(oracles))
}

/// Test helper: app in degraded mode (what OracleSet::connect falls back to)
fn setup_app_degraded() -> axum::Router {
    build_router(AppState::new(OracleSet::stub()))
}

/// Test helper: GET request
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: POST /api/analyze with the given text
fn analyze_request(text: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "text": text }).to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health & Build Info Endpoints
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app_online();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "writewise-ui");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let app = setup_app_online();

    let response = app.oneshot(get("/api/buildinfo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["version"].is_string());
    assert!(body["git_hash"].is_string());
    assert!(body["build_timestamp"].is_string());
    assert!(body["build_profile"].is_string());
}

// =============================================================================
// AI Status Endpoint
// =============================================================================

#[tokio::test]
async fn test_status_reports_online() {
    let app = setup_app_online();

    let response = app.oneshot(get("/api/status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ai_online"], true);
    assert_eq!(body["grammar_backend"], "stub");
    assert_eq!(body["rewrite_backend"], "stub");
}

#[tokio::test]
async fn test_status_reports_degraded() {
    let app = setup_app_degraded();

    let response = app.oneshot(get("/api/status")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ai_online"], false);
}

// =============================================================================
// Text Analysis
// =============================================================================

#[tokio::test]
async fn test_analyze_returns_full_result_bundle() {
    let app = setup_app_online();

    let text = "The quick brown fox jumps over the lazy dog. It was a bright \
                morning and everyone felt ready for the day ahead.";
    let response = app.oneshot(analyze_request(text)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;

    let grade = body["grade"].as_str().unwrap();
    assert!(
        ["A+", "A", "A-", "B+", "B", "C", "Needs Work"].contains(&grade),
        "unexpected grade: {}",
        grade
    );

    let composite = body["composite"].as_f64().unwrap();
    assert!((10.0..=100.0).contains(&composite));

    assert_eq!(body["stats"]["sentences"], 2);
    assert_eq!(body["stats"]["paragraphs"], 1);
    assert!(body["stats"]["words"].as_u64().unwrap() > 15);
    assert!(body["stats"]["readability"].is_f64());

    // Stub grammar oracle always reports acceptable with high confidence
    assert_eq!(body["grammar"]["label"], "acceptable");
    assert_eq!(body["grammar"]["status"], "Excellent");
    let confidence = body["grammar"]["confidence"].as_f64().unwrap();
    assert!((0.70..0.99).contains(&confidence));
    assert!(body["grammar"]["delta"].as_str().unwrap().starts_with('+'));

    assert_eq!(body["suggestion"], PLACEHOLDER_SUGGESTION);

    // Short input is previewed in full
    assert_eq!(body["original_preview"], text);
    assert_eq!(body["degraded"], false);
}

#[tokio::test]
async fn test_analyze_rejects_empty_text() {
    let app = setup_app_online();

    let response = app.oneshot(analyze_request("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_analyze_rejects_whitespace_only_text() {
    let app = setup_app_online();

    let response = app.oneshot(analyze_request("   \n\t  ")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_truncates_preview_for_long_input() {
    let app = setup_app_online();

    let text = "word ".repeat(100); // 500 characters
    let response = app.oneshot(analyze_request(&text)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let preview = body["original_preview"].as_str().unwrap();
    assert!(preview.ends_with("..."));
    assert_eq!(preview.chars().count(), 153);
}

#[tokio::test]
async fn test_analyze_in_degraded_mode_still_produces_bundle() {
    let app = setup_app_degraded();

    let response = app
        .oneshot(analyze_request("A complete sentence for the stub to judge."))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["degraded"], true);
    assert!(body["grade"].is_string());
    assert_eq!(body["suggestion"], PLACEHOLDER_SUGGESTION);
}

// =============================================================================
// Per-Request Oracle Failure Fallback
// =============================================================================

#[tokio::test]
async fn test_grammar_oracle_failure_falls_back_to_stand_in() {
    // Healthy session whose grammar backend fails mid-request: the request
    // still succeeds with a stand-in signal and the response is flagged.
    let oracles = OracleSet {
        grammar: Arc::new(UnreachableGrammarOracle),
        rewrite: Arc::new(StubRewriteOracle),
        degraded: false,
    };
    let app = build_router(AppState::new(oracles));

    let response = app
        .oneshot(analyze_request("The backend went away between requests."))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["degraded"], true);
    // Stand-in signal has the stub's shape
    assert_eq!(body["grammar"]["label"], "acceptable");
    let confidence = body["grammar"]["confidence"].as_f64().unwrap();
    assert!((0.70..0.99).contains(&confidence));
    assert!(body["grade"].is_string());
}

#[tokio::test]
async fn test_rewrite_oracle_failure_falls_back_to_placeholder() {
    let oracles = OracleSet {
        grammar: Arc::new(StubGrammarOracle),
        rewrite: Arc::new(UnreachableRewriteOracle),
        degraded: false,
    };
    let app = build_router(AppState::new(oracles));

    let response = app
        .oneshot(analyze_request("Another sentence for the pipeline."))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["degraded"], true);
    assert_eq!(body["suggestion"], PLACEHOLDER_SUGGESTION);
    // The grammar half of the pipeline was unaffected
    assert_eq!(body["grammar"]["status"], "Excellent");
}

#[tokio::test]
async fn test_oracle_failure_does_not_demote_session() {
    // A per-request failure must not flip the session-level status
    let oracles = OracleSet {
        grammar: Arc::new(UnreachableGrammarOracle),
        rewrite: Arc::new(UnreachableRewriteOracle),
        degraded: false,
    };
    let app = build_router(AppState::new(oracles));

    let response = app
        .clone()
        .oneshot(analyze_request("First request fails over to stand-ins."))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["degraded"], true);

    // Status endpoint still reports the session as online
    let response = app.oneshot(get("/api/status")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ai_online"], true);
}

// =============================================================================
// UI Serving
// =============================================================================

#[tokio::test]
async fn test_index_serves_html() {
    let app = setup_app_online();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("WriteWise"));
    assert!(html.contains("Analyze Text"));
}

#[tokio::test]
async fn test_app_js_served_with_content_type() {
    let app = setup_app_online();

    let response = app.oneshot(get("/static/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/javascript"
    );
}
