//! Grade aggregation
//!
//! Combines a grammar-acceptability signal and a readability score into a
//! single ordinal grade on a fixed 0-100 composite scale. This is the one
//! piece of decision logic in WriteWise; everything else is measurement or
//! presentation. The aggregator is a pure, total function: no I/O, no
//! randomness, and no failure path for any finite input.

use serde::Serialize;

/// Grammar-acceptability label reported by the grammar oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarLabel {
    /// Text reads as grammatically acceptable
    Acceptable,
    /// Text reads as grammatically unacceptable
    Unacceptable,
}

impl GrammarLabel {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GrammarLabel::Acceptable => "acceptable",
            GrammarLabel::Unacceptable => "unacceptable",
        }
    }
}

/// Grammar verdict for a span of text
///
/// `confidence` is the oracle's self-reported probability mass on its chosen
/// label (0.0-1.0), not a calibrated probability of correctness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrammarSignal {
    pub label: GrammarLabel,
    pub confidence: f64,
}

/// Ordinal grade, ordered best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    C,
    NeedsWork,
}

impl Grade {
    /// Convert to display representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::NeedsWork => "Needs Work",
        }
    }
}

impl Serialize for Grade {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade aggregator
///
/// Composite score = grammar component + readability component + fixed
/// component, each capped to its own allotment, then thresholded to a grade.
pub struct GradeAggregator {
    /// Grammar allotment (default 30)
    grammar_weight: f64,

    /// Readability allotment (default 30)
    readability_weight: f64,

    /// Vocabulary/length allotment (default 40) - placeholder, currently
    /// awarded in full regardless of input
    fixed_weight: f64,

    /// Target readability grade level (default 10)
    readability_target: f64,
}

impl GradeAggregator {
    /// Create a new aggregator with the default weights and target
    ///
    /// **Default allotments:**
    /// - Grammar: 30
    /// - Readability: 30 (target grade level 10)
    /// - Vocabulary/length: 40 (constant for now)
    pub fn new() -> Self {
        Self {
            grammar_weight: 30.0,
            readability_weight: 30.0,
            fixed_weight: 40.0,
            readability_target: 10.0,
        }
    }

    /// Compute the composite score in [10, 100]
    ///
    /// Confidence values outside [0,1] are not validated here; callers
    /// supply values already in range.
    pub fn composite(&self, signal: &GrammarSignal, readability: f64) -> f64 {
        let mut score = 0.0;

        // Grammar component: reward scales with confidence when acceptable;
        // a low-confidence "unacceptable" call is penalized less than a
        // high-confidence one.
        score += match signal.label {
            GrammarLabel::Acceptable => self.grammar_weight * signal.confidence,
            GrammarLabel::Unacceptable => self.grammar_weight * (1.0 - signal.confidence),
        };

        // Readability component: three-bucket step function around the
        // target grade level (close / somewhat off / far off).
        let dist = (readability - self.readability_target).abs();
        score += if dist <= 2.0 {
            self.readability_weight
        } else if dist <= 4.0 {
            self.readability_weight * 2.0 / 3.0
        } else {
            self.readability_weight / 3.0
        };

        // Vocabulary/length component: full marks for now
        score += self.fixed_weight;

        score
    }

    /// Map a composite score to a grade. Thresholds are evaluated high to
    /// low; the first match wins.
    pub fn grade_for(composite: f64) -> Grade {
        if composite >= 90.0 {
            Grade::APlus
        } else if composite >= 85.0 {
            Grade::A
        } else if composite >= 80.0 {
            Grade::AMinus
        } else if composite >= 75.0 {
            Grade::BPlus
        } else if composite >= 70.0 {
            Grade::B
        } else if composite >= 60.0 {
            Grade::C
        } else {
            Grade::NeedsWork
        }
    }

    /// Compute the grade for a grammar signal and readability score
    pub fn grade(&self, signal: &GrammarSignal, readability: f64) -> Grade {
        Self::grade_for(self.composite(signal, readability))
    }
}

impl Default for GradeAggregator {
    fn default() -> Self {
        Self::new()
    }
}
