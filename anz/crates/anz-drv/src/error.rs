//! Error handling module for the analyzer driver.
//!
//! Analysis itself never fails: lexical and syntax faults are collected as
//! diagnostics. The errors here are the fatal ones that stop a run before or
//! after analysis.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal driver error.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The input file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing, unreadable or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A report file could not be written.
    #[error("cannot write report '{}': {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using AnalyzerError.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
