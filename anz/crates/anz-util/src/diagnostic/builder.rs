//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for quoting the
//! offending source line with a caret underline.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// One quoted source line with an underlined column range.
///
/// Columns are 1-based; `end_column` is exclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line text
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Start column of the underline (1-based)
    pub start_column: usize,
    /// End column of the underline (exclusive)
    pub end_column: usize,
    /// Optional label printed after the carets
    pub label: Option<String>,
}

impl SourceSnippet {
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Render the line and its caret underline.
    ///
    /// # Examples
    ///
    /// ```
    /// use anz_util::diagnostic::SourceSnippet;
    ///
    /// let snippet = SourceSnippet::new("put @;", 1, 5, 6, Some("here"));
    /// assert_eq!(snippet.format(), "  1 | put @;\n    |     ^ here");
    /// ```
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(label) = &self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use anz_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use anz_util::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Error, "expected ';', found '}'")
///     .code(DiagnosticCode::E_PARSER_EXPECTED_TOKEN)
///     .span(Span::new(12, 13, 2, 1))
///     .help("statements end with ';'")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &mut Handler) {
        handler.emit_diagnostic(self.build());
    }
}
