//! Number literal lexing.

use anz_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or float literal.
    ///
    /// A `.` joins the literal only when a digit follows it, so `3.` is the
    /// integer `3` followed by a `.` token.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.peek(0) == Some('.')
            && self.cursor.peek(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            return self.make_token(TokenKind::FloatLiteral);
        }

        let text = self.cursor.slice_from(self.token_start.offset);
        let max = self.limits.max_integer;
        let in_range = text.parse::<u64>().is_ok_and(|value| value <= u64::from(max));
        if !in_range {
            self.error(
                DiagnosticCode::E_LEXER_INTEGER_OUT_OF_RANGE,
                format!("integer literal exceeds the maximum value of {}", max),
            )
            .emit(self.handler);
        }

        self.make_token(TokenKind::IntegerLiteral)
    }
}
