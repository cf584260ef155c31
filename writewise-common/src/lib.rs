//! # WriteWise Common Library
//!
//! Shared code for the WriteWise writing-feedback tool:
//! - Error types
//! - Configuration resolution
//! - Text statistics (readability, word/sentence counting)
//! - Grade aggregation

pub mod config;
pub mod error;
pub mod grading;
pub mod textstat;

pub use error::{Error, Result};
pub use grading::{Grade, GradeAggregator, GrammarLabel, GrammarSignal};
pub use textstat::TextStats;
