//! Oracle capability layer
//!
//! The grammar check and rewrite suggestion are produced by two external
//! model capabilities. Each is a trait with two variants: an HTTP client
//! against the local inference backend, and a stand-in stub used when the
//! backend is unavailable. Selection happens once at startup; handlers only
//! ever see the trait objects, never an availability flag.

pub mod grammar;
pub mod rewrite;

pub use grammar::{HttpGrammarOracle, StubGrammarOracle};
pub use rewrite::{HttpRewriteOracle, StubRewriteOracle, PLACEHOLDER_SUGGESTION};

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};
use writewise_common::GrammarSignal;

/// Maximum input length (in characters) forwarded to the grammar model.
/// Longer input is truncated deterministically, never rejected.
pub const MAX_GRAMMAR_INPUT: usize = 512;

/// Oracle invocation errors
#[derive(Debug, Error)]
pub enum OracleError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Inference backend returned an error response
    #[error("Backend error {0}: {1}")]
    Backend(u16, String),

    /// Failed to parse backend response
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for OracleError {
    fn from(err: reqwest::Error) -> Self {
        OracleError::Network(err.to_string())
    }
}

/// Grammar-acceptability capability
#[async_trait]
pub trait GrammarOracle: Send + Sync {
    /// Backend name for the status endpoint
    fn name(&self) -> &'static str;

    /// Classify a span of text as acceptable/unacceptable with a confidence
    /// score in [0,1]. Implementations truncate long input rather than fail.
    async fn analyze(&self, text: &str) -> Result<GrammarSignal, OracleError>;
}

/// Rewrite-suggestion capability
///
/// Output is advisory only; it is displayed but never fed back into grading.
#[async_trait]
pub trait RewriteOracle: Send + Sync {
    /// Backend name for the status endpoint
    fn name(&self) -> &'static str;

    /// Produce a corrected/rewritten version of the input text
    async fn rewrite(&self, text: &str) -> Result<String, OracleError>;
}

/// The oracle handles selected at startup, shared read-only across requests
#[derive(Clone)]
pub struct OracleSet {
    pub grammar: Arc<dyn GrammarOracle>,
    pub rewrite: Arc<dyn RewriteOracle>,
    /// True when the inference backend was unreachable at startup and the
    /// stubs are standing in for it
    pub degraded: bool,
}

impl OracleSet {
    /// Probe the inference backend once and select oracle implementations.
    ///
    /// On success both oracles are HTTP clients sharing one connection pool.
    /// On any failure the session runs in degraded mode with stub oracles
    /// for its remaining lifetime; initialization is not retried per request.
    pub async fn connect(inference_url: &str) -> OracleSet {
        let client = match reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                warn!("Failed to construct HTTP client: {} - entering degraded mode", e);
                return OracleSet::stub();
            }
        };

        let probe_url = format!("{}/health", inference_url.trim_end_matches('/'));
        match client.get(&probe_url).timeout(Duration::from_secs(3)).send().await {
            Ok(response) if response.status().is_success() => {
                info!("✓ Inference backend online at {}", inference_url);
                OracleSet {
                    grammar: Arc::new(HttpGrammarOracle::new(client.clone(), inference_url)),
                    rewrite: Arc::new(HttpRewriteOracle::new(client, inference_url)),
                    degraded: false,
                }
            }
            Ok(response) => {
                warn!(
                    "Inference backend at {} returned {} - entering degraded mode",
                    inference_url,
                    response.status()
                );
                OracleSet::stub()
            }
            Err(e) => {
                warn!(
                    "Inference backend at {} unreachable: {} - entering degraded mode",
                    inference_url, e
                );
                OracleSet::stub()
            }
        }
    }

    /// Stub oracle set for degraded mode
    pub fn stub() -> OracleSet {
        OracleSet {
            grammar: Arc::new(StubGrammarOracle),
            rewrite: Arc::new(StubRewriteOracle),
            degraded: true,
        }
    }
}

/// Truncate text to at most `max_chars` characters on a char boundary
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
