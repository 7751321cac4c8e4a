//! Core error types for the anz-util crate

use thiserror::Error;

/// Error type for source text lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Invalid span range
    #[error("invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for the text
    #[error("span out of bounds: text has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Invalid line number
    #[error("invalid line number: {line} (text has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Result type alias for source lookups
pub type SourceResult<T> = std::result::Result<T, SourceError>;
