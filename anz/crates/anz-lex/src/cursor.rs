//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through the characters of an in-memory text. It handles
//! UTF-8 correctly and tracks line/column information for diagnostics.

use anz_util::Position;

/// A cursor for traversing source text character by character.
///
/// Lines and columns are 1-based. Consuming `'\n'` moves to column 1 of the
/// next line; any other character moves one column right, whatever its
/// UTF-8 width. Offsets are byte offsets.
///
/// # Example
///
/// ```
/// use anz_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x int;");
///
/// assert_eq!(cursor.peek(0), Some('l'));
/// assert_eq!(cursor.advance(), Some('l'));
/// assert_eq!(cursor.peek(0), Some('e'));
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    offset: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character `offset` characters ahead without consuming it.
    ///
    /// `None` is the end marker.
    ///
    /// # Example
    ///
    /// ```
    /// use anz_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("añb");
    /// assert_eq!(cursor.peek(0), Some('a'));
    /// assert_eq!(cursor.peek(1), Some('ñ'));
    /// assert_eq!(cursor.peek(2), Some('b'));
    /// assert_eq!(cursor.peek(3), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        let rest = self.remaining();
        // Fast path for ASCII
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return Some(b as char);
            }
        }
        rest.chars().nth(offset)
    }

    /// Consumes and returns the current character.
    ///
    /// Updates line and column tracking. Returns `None` and does nothing at
    /// the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use anz_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// ```
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.remaining().chars().next()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes characters while `predicate` holds. Returns how many were
    /// consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek(0) {
            if !predicate(c) {
                break;
            }
            self.advance();
            count += 1;
        }
        count
    }

    /// Consumes the current character if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek(0) == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Current line, column and byte offset.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    /// The text from byte offset `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }

    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    pub fn source(&self) -> &'a str {
        self.source
    }
}
