//! Trivia lexing.
//!
//! Whitespace runs and comments are kept as tokens so the token stream
//! covers the whole source.

use anz_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a run of whitespace (a leading byte-order mark included).
    pub(crate) fn lex_whitespace(&mut self) -> Token {
        self.cursor.advance();
        self.cursor.eat_while(char::is_whitespace);
        self.make_token(TokenKind::Whitespace)
    }

    /// Lexes a comment, or rejects a `/` that does not start one.
    pub(crate) fn lex_slash(&mut self) -> Token {
        match self.cursor.peek(1) {
            Some('/') => self.lex_line_comment(),
            Some('*') => self.lex_block_comment(),
            _ => {
                self.cursor.advance();
                self.error(
                    DiagnosticCode::E_LEXER_INVALID_CHAR,
                    "invalid character '/'",
                )
                .help("comments start with '//' or '/*'")
                .emit(self.handler);
                self.make_token(TokenKind::Invalid)
            },
        }
    }

    /// Lexes a line comment, from `//` up to (not including) the newline.
    fn lex_line_comment(&mut self) -> Token {
        self.cursor.eat_while(|c| c != '\n');
        self.make_token(TokenKind::Comment)
    }

    /// Lexes a `/* ... */` comment. Block comments do not nest.
    fn lex_block_comment(&mut self) -> Token {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            if self.cursor.remaining().starts_with("*/") {
                self.cursor.advance();
                self.cursor.advance();
                return self.make_token(TokenKind::Comment);
            }
            self.cursor.advance();
        }

        self.error(
            DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            "unterminated block comment",
        )
        .note("the comment runs to the end of the input")
        .emit(self.handler);
        self.make_token(TokenKind::Invalid)
    }
}
