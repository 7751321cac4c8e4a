//! String literal lexing.

use anz_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `"..."` string literal.
    ///
    /// Strings cannot span lines. Without a closing quote on the same line
    /// the text from the opening quote up to the newline (or the end of
    /// input) becomes an Invalid token, and scanning resumes at the newline.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.cursor.advance();
        let mut length = 0usize;

        loop {
            match self.cursor.peek(0) {
                Some('"') => {
                    self.cursor.advance();
                    break;
                },
                None | Some('\n') => {
                    self.error(
                        DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                        "unterminated string literal",
                    )
                    .help("close the string with '\"' before the end of the line")
                    .emit(self.handler);
                    return self.make_token(TokenKind::Invalid);
                },
                Some(_) => {
                    self.cursor.advance();
                    length += 1;
                },
            }
        }

        let max = self.limits.max_string_chars;
        if length > max {
            self.error(
                DiagnosticCode::E_LEXER_STRING_TOO_LONG,
                format!("string literal exceeds {} characters", max),
            )
            .note(format!("this literal has {} characters", length))
            .emit(self.handler);
        }

        self.make_token(TokenKind::StringLiteral)
    }
}
