//! Span module - Source location tracking.
//!
//! A [`Span`] is a byte range in the analyzed text together with the
//! human-readable line and column of its first character. A [`Position`]
//! is a single point with the same coordinates.
//!
//! # Examples
//!
//! ```
//! use anz_util::span::{Position, Span};
//!
//! let span = Span::new(4, 9, 1, 5);
//! assert_eq!(span.len(), 5);
//! assert_eq!(span.position(), Position::new(1, 5, 4));
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::fmt;

/// A single point in the source text.
///
/// `line` and `column` are 1-based; `column` counts characters. `offset`
/// is the 0-based byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
    /// Byte offset from the start of the text
    pub offset: usize,
}

impl Position {
    /// Position of the first character of any text.
    pub const START: Position = Position {
        line: 1,
        column: 1,
        offset: 0,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// A `Span` represents a half-open byte range `start..end` plus the line and
/// column where it begins.
///
/// # Examples
///
/// ```
/// use anz_util::span::Span;
///
/// let span = Span::new(10, 20, 2, 3);
/// assert_eq!(span.len(), 10);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for tests and synthesized values.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span.
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line of `start` (1-based)
    /// * `column` - Column of `start` (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span covering `start` up to (not including) `end`.
    #[inline]
    pub fn between(start: Position, end: Position) -> Self {
        Self::new(start.offset, end.offset, start.line, start.column)
    }

    /// The position of the first character.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}
