//! Identifier and keyword lexing.

use anz_util::DiagnosticCode;

use crate::classify::{classify, miscased_keyword};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// `[A-Za-z_]`
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// `[A-Za-z0-9_]`
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// The whole identifier is matched first, then classified. Identifiers
    /// are counted in the symbol table; keywords are not.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.token_start.offset);
        let kind = classify(text);

        if kind == TokenKind::Identifier {
            if let Some(keyword) = miscased_keyword(text) {
                self.handler
                    .build_warning(
                        self.token_span(),
                        format!("reserved word '{}' must be written in lowercase", keyword),
                    )
                    .code(DiagnosticCode::W_LEXER_KEYWORD_CASE)
                    .note(format!("'{}' is treated as an identifier", text))
                    .emit(self.handler);
            }
            self.symbols.record(text, self.token_start);
        }

        self.make_token(kind)
    }
}
