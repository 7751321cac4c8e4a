//! anz-util - Shared infrastructure for the Analizador crates
//!
//! This crate holds the pieces every analysis phase needs:
//!
//! - [`span`] - source locations ([`Span`], [`Position`]) and line lookup ([`SourceFile`])
//! - [`diagnostic`] - diagnostics, severity levels, codes and the collecting [`Handler`]
//! - [`error`] - `thiserror` error types for fallible utility operations
//!
//! # Example
//!
//! ```
//! use anz_util::{DiagnosticBuilder, Handler, Span};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("invalid character '@'")
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&mut handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, Phase, SourceSnippet,
};
pub use error::{SourceError, SourceResult};
pub use span::{Position, SourceFile, Span};

/// Fast non-cryptographic hash map used for small static lookup tables.
pub use rustc_hash::FxHashMap;
