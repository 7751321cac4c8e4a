//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-character dispatch
//! and the helpers the lexeme-class modules share.

use std::iter::FusedIterator;

use anz_util::{DiagnosticBuilder, DiagnosticCode, Handler, Position, Span};

use crate::cursor::Cursor;
use crate::symbols::SymbolTable;
use crate::token::{Punctuation, Token, TokenKind};

/// Literal size limits enforced while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of characters between the quotes of a string literal.
    pub max_string_chars: usize,
    /// Largest accepted integer literal.
    pub max_integer: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_string_chars: 64,
            max_integer: 32767,
        }
    }
}

/// Lexer for JS-PdL source text.
///
/// The lexer turns text into a stream of tokens, trivia included. Faults
/// are reported to the handler and scanning carries on: every call consumes
/// at least one character until the single [`TokenKind::EndOfInput`] token.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    pub(crate) handler: &'a mut Handler,

    /// Identifiers seen so far.
    pub(crate) symbols: SymbolTable,

    pub(crate) limits: Limits,

    /// Where the current token starts.
    pub(crate) token_start: Position,

    /// Whether EndOfInput has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            symbols: SymbolTable::new(),
            limits: Limits::default(),
            token_start: Position::START,
            finished: false,
        }
    }

    /// Replaces the default literal limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the next token from the source text.
    ///
    /// After the end of input has been reached every further call returns
    /// another `EndOfInput` token.
    pub fn next_token(&mut self) -> Token {
        self.token_start = self.cursor.position();

        let Some(c) = self.cursor.peek(0) else {
            self.finished = true;
            return self.make_token(TokenKind::EndOfInput);
        };

        match c {
            c if c.is_whitespace() => self.lex_whitespace(),
            '\u{FEFF}' if self.token_start.offset == 0 => self.lex_whitespace(),
            '/' => self.lex_slash(),
            '"' => self.lex_string(),
            '+' => self.lex_plus(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            c if super::identifier::is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => match Punctuation::from_char(c) {
                Some(punct) => {
                    self.cursor.advance();
                    self.make_token(TokenKind::Punctuation(punct))
                },
                None => {
                    self.cursor.advance();
                    self.report_error(
                        DiagnosticCode::E_LEXER_INVALID_CHAR,
                        format!("invalid character '{}'", c.escape_debug()),
                    );
                    self.make_token(TokenKind::Invalid)
                },
            },
        }
    }

    /// Builds a token covering everything consumed since `token_start`.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start.offset),
            self.token_span(),
        )
    }

    pub(crate) fn token_span(&self) -> Span {
        Span::between(self.token_start, self.cursor.position())
    }

    /// Starts an error diagnostic covering the current token.
    pub(crate) fn error(&self, code: DiagnosticCode, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message)
            .code(code)
            .span(self.token_span())
    }

    /// Reports a lexical error at the current token position.
    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        let diagnostic = self.error(code, message);
        diagnostic.emit(self.handler);
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }
}

/// Yields every token including the final `EndOfInput`, then stops.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
