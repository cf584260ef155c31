//! Rewrite oracle implementations
//!
//! The HTTP variant forwards text to the inference backend's grammar
//! correction model (T5-style text-to-text generation). The stub variant
//! returns a fixed placeholder suggestion for degraded mode.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{truncate_chars, OracleError, RewriteOracle, MAX_GRAMMAR_INPUT};

/// Placeholder suggestion shown when no rewrite model is available
pub const PLACEHOLDER_SUGGESTION: &str =
    "Since AI modules are offline, here is a placeholder suggestion: \
     Consider varying your sentence structure for better flow.";

/// Rewrite request body
#[derive(Debug, Serialize)]
struct RewriteRequest<'a> {
    text: &'a str,
}

/// Rewrite response from the inference backend
#[derive(Debug, Deserialize)]
struct RewriteResponse {
    text: String,
}

/// HTTP client for the rewrite model endpoint
pub struct HttpRewriteOracle {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRewriteOracle {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/rewrite", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl RewriteOracle for HttpRewriteOracle {
    fn name(&self) -> &'static str {
        "t5-grammar-correction"
    }

    async fn rewrite(&self, text: &str) -> Result<String, OracleError> {
        let capped = truncate_chars(text, MAX_GRAMMAR_INPUT);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&RewriteRequest { text: capped })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Backend(status.as_u16(), body));
        }

        let parsed: RewriteResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Parse(e.to_string()))?;

        Ok(parsed.text)
    }
}

/// Stand-in rewrite oracle for degraded mode
pub struct StubRewriteOracle;

impl StubRewriteOracle {
    /// Fixed placeholder suggestion
    pub fn suggestion() -> String {
        PLACEHOLDER_SUGGESTION.to_string()
    }
}

#[async_trait]
impl RewriteOracle for StubRewriteOracle {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn rewrite(&self, _text: &str) -> Result<String, OracleError> {
        Ok(Self::suggestion())
    }
}
