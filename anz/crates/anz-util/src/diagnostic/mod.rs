//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Lexical and syntax faults never stop an analysis run. They are recorded
//! as [`Diagnostic`]s in a [`Handler`] and the run carries on.
//!
//! # Examples
//!
//! ```
//! use anz_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Level};
//! use anz_util::Span;
//!
//! let mut handler = Handler::new();
//! handler.report(Level::Warning, "reserved word 'if' must be written in lowercase", Span::DUMMY);
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&mut handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::{DiagnosticCode, Phase};

use crate::{Position, Span};
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use anz_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// A fault in the analyzed text
    Error,
    /// Suspicious but accepted text
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
///
/// # Examples
///
/// ```
/// use anz_util::diagnostic::{Diagnostic, Level};
/// use anz_util::Span;
///
/// let diag = Diagnostic::error("invalid character '@'", Span::new(0, 1, 1, 1));
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!((diag.line(), diag.column()), (1, 1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.span.position()
    }
}

/// `error[E1001]: invalid character '@' at 1:1`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {} at {}:{}", self.message, self.line(), self.column())
    }
}

/// Diagnostic collector
///
/// Keeps every reported diagnostic in emission order. Nothing is merged or
/// deduplicated. Phases borrow the handler mutably while they run, so the
/// collected sequence can only be read once they are done.
///
/// # Examples
///
/// ```
/// use anz_util::diagnostic::{Handler, Level};
/// use anz_util::Span;
///
/// let mut handler = Handler::new();
/// handler.report(Level::Error, "unexpected token", Span::DUMMY);
/// handler.report(Level::Error, "unexpected token", Span::DUMMY);
///
/// assert_eq!(handler.all().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain diagnostic.
    pub fn report(&mut self, level: Level, message: impl Into<String>, span: Span) {
        self.emit_diagnostic(Diagnostic::new(level, message, span));
    }

    /// Append a fully built diagnostic.
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Start building an error diagnostic at `span`.
    ///
    /// ```
    /// use anz_util::diagnostic::Handler;
    /// use anz_util::Span;
    ///
    /// let mut handler = Handler::new();
    /// let diag = handler.build_error(Span::DUMMY, "expected ';'").build();
    /// handler.emit_diagnostic(diag);
    /// assert!(handler.has_errors());
    /// ```
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// All diagnostics in emission order.
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
