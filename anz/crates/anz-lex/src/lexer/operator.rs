//! Operator lexing.
//!
//! Two-character operators win over their one-character prefixes.

use crate::token::{Operator, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `+` or `+=`.
    pub(crate) fn lex_plus(&mut self) -> Token {
        self.cursor.advance();
        let op = if self.cursor.match_char('=') {
            Operator::PlusAssign
        } else {
            Operator::Plus
        };
        self.make_token(TokenKind::Operator(op))
    }

    /// Lexes `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        let op = if self.cursor.match_char('=') {
            Operator::Equal
        } else {
            Operator::Assign
        };
        self.make_token(TokenKind::Operator(op))
    }

    /// Lexes `!`.
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        self.make_token(TokenKind::Operator(Operator::Not))
    }
}
