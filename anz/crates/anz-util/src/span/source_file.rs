//! Source file with line lookup.
//!
//! [`SourceFile`] keeps the analyzed text and the byte offset of each line
//! start so diagnostics can quote the offending line.

use std::sync::Arc;

use super::Span;
use crate::diagnostic::SourceSnippet;
use crate::error::{SourceError, SourceResult};

/// An analyzed text with a precomputed line index.
///
/// # Examples
///
/// ```
/// use anz_util::span::SourceFile;
///
/// let file = SourceFile::new("input.txt", "let a int;\nput a;\n");
/// assert_eq!(file.line_count(), 3);
/// assert_eq!(file.line_text(2), Some("put a;"));
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines, counting a trailing empty line after a final newline.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a 1-based line without its line terminator.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let index = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .map(|&next| next - 1)
            .unwrap_or(self.content.len());
        let text = &self.content[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// The text a span covers.
    pub fn slice(&self, span: Span) -> SourceResult<&str> {
        if span.start > span.end {
            return Err(SourceError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        self.content
            .get(span.start..span.end)
            .ok_or(SourceError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: span.start,
                span_end: span.end,
            })
    }

    /// Build a caret snippet for the line a span starts on.
    ///
    /// Spans reaching past the end of their first line are underlined up to
    /// the end of that line.
    pub fn snippet(&self, span: Span) -> SourceResult<SourceSnippet> {
        let text = self
            .line_text(span.line)
            .ok_or(SourceError::InvalidLineNumber {
                line: span.line as usize,
                max_lines: self.line_count(),
            })?;
        let line_chars = text.chars().count();
        let start_column = span.column as usize;
        let width = self
            .slice(span)
            .map(|covered| covered.chars().take_while(|&c| c != '\n').count())
            .unwrap_or(0);
        let end_column = (start_column + width).min(line_chars + 1).max(start_column + 1);
        Ok(SourceSnippet::new(
            text,
            span.line as usize,
            start_column,
            end_column,
            None::<String>,
        ))
    }
}
