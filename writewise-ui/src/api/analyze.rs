//! Text analysis API handler
//!
//! POST /api/analyze runs the full feedback pipeline: text statistics,
//! grammar check, rewrite suggestion, and grade aggregation. The statistics
//! and both oracles operate independently on the same input; only the grade
//! depends on their outputs.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;
use writewise_common::{GradeAggregator, Grade, GrammarLabel, GrammarSignal, TextStats};

use crate::error::{ApiError, ApiResult};
use crate::oracles::{truncate_chars, StubGrammarOracle, StubRewriteOracle};
use crate::AppState;

/// Display preview length for the original text (characters)
const PREVIEW_CHARS: usize = 150;

/// POST /api/analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Readability and structure statistics
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub readability: f64,
    pub paragraphs: usize,
    pub sentences: usize,
    pub words: usize,
    pub unique_words: usize,
}

/// Grammar verdict with display fields
#[derive(Debug, Serialize)]
pub struct GrammarReport {
    /// "acceptable" or "unacceptable"
    pub label: String,
    /// Oracle confidence in its label, 0.0-1.0
    pub confidence: f64,
    /// "Excellent" or "Needs Review"
    pub status: String,
    /// Signed percentage for the metric widget, e.g. "+92.3%"
    pub delta: String,
}

/// POST /api/analyze response - the full result bundle
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub grade: Grade,
    pub composite: f64,
    pub stats: StatsReport,
    pub grammar: GrammarReport,
    /// Rewritten text from the rewrite oracle (full, untruncated)
    pub suggestion: String,
    /// Original text truncated for side-by-side display
    pub original_preview: String,
    /// True when any stand-in value was used for this response
    pub degraded: bool,
}

/// POST /api/analyze
///
/// Empty or whitespace-only text is rejected with 400 and no result bundle.
/// A failing oracle call does not fail the request: the handler falls back
/// to the stub result for that single call and marks the response degraded.
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let text = request.text;
    if text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Please enter some text to analyze".to_string(),
        ));
    }

    let mut degraded = state.oracles.degraded;

    let stats = TextStats::analyze(&text);

    let signal = match state.oracles.grammar.analyze(&text).await {
        Ok(signal) => signal,
        Err(e) => {
            warn!("Grammar oracle failed, using stand-in signal: {}", e);
            degraded = true;
            StubGrammarOracle::signal()
        }
    };

    let suggestion = match state.oracles.rewrite.rewrite(&text).await {
        Ok(suggestion) => suggestion,
        Err(e) => {
            warn!("Rewrite oracle failed, using placeholder suggestion: {}", e);
            degraded = true;
            StubRewriteOracle::suggestion()
        }
    };

    let aggregator = GradeAggregator::new();
    let composite = aggregator.composite(&signal, stats.readability);
    let grade = GradeAggregator::grade_for(composite);

    Ok(Json(AnalyzeResponse {
        grade,
        composite,
        stats: StatsReport {
            readability: stats.readability,
            paragraphs: stats.paragraphs,
            sentences: stats.sentences,
            words: stats.words,
            unique_words: stats.unique_words,
        },
        grammar: grammar_report(&signal),
        suggestion,
        original_preview: preview(&text),
        degraded,
    }))
}

/// Build the grammar display fields from a signal
fn grammar_report(signal: &GrammarSignal) -> GrammarReport {
    let percent = signal.confidence * 100.0;
    let (status, delta) = match signal.label {
        GrammarLabel::Acceptable => ("Excellent", format!("+{:.1}%", percent)),
        GrammarLabel::Unacceptable => ("Needs Review", format!("-{:.1}%", percent)),
    };
    GrammarReport {
        label: signal.label.as_str().to_string(),
        confidence: signal.confidence,
        status: status.to_string(),
        delta,
    }
}

/// Truncate the original text for side-by-side display
fn preview(text: &str) -> String {
    let capped = truncate_chars(text, PREVIEW_CHARS);
    if capped.len() < text.len() {
        format!("{}...", capped)
    } else {
        text.to_string()
    }
}
