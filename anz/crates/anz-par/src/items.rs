//! Function declarations.

use crate::{Parser, Rule};
use anz_lex::{Keyword, Punctuation, TokenKind};

impl<'a> Parser<'a> {
    /// `function id H ( A ) { C }`
    pub(crate) fn parse_function(&mut self) -> Option<()> {
        self.advance();
        self.expect_identifier()?;
        self.parse_return_type()?;
        self.trace.push(Rule::FunctionName);

        self.expect_punct(Punctuation::LParen)?;
        self.parse_params()?;
        self.expect_punct(Punctuation::RParen)?;
        self.trace.push(Rule::FunctionHead);

        self.parse_block()?;
        self.trace.push(Rule::Function);
        Some(())
    }

    /// `H`: a type or `void`
    fn parse_return_type(&mut self) -> Option<()> {
        if self.match_token(TokenKind::Keyword(Keyword::Void)) {
            self.trace.push(Rule::ReturnVoid);
        } else {
            self.parse_type_or("type or 'void'")?;
            self.trace.push(Rule::ReturnType);
        }
        Some(())
    }

    /// `A`: `void`, or one or more `T id` separated by commas
    fn parse_params(&mut self) -> Option<()> {
        if self.match_token(TokenKind::Keyword(Keyword::Void)) {
            self.trace.push(Rule::ParamsVoid);
            return Some(());
        }

        self.parse_type_or("parameter type or 'void'")?;
        self.expect_identifier()?;

        let mut more = 0;
        while self.match_token(TokenKind::Punctuation(Punctuation::Comma)) {
            self.parse_type()?;
            self.expect_identifier()?;
            more += 1;
        }

        self.trace.push(Rule::ParamsEnd);
        self.trace.push_n(Rule::ParamsMore, more);
        self.trace.push(Rule::Params);
        Some(())
    }

    /// A type, with a custom description when it is missing.
    fn parse_type_or(&mut self, expected: &str) -> Option<()> {
        match self.current_kind() {
            TokenKind::Keyword(Keyword::Int | Keyword::Boolean | Keyword::String) => {
                self.parse_type()
            },
            _ => {
                self.error_unexpected(expected);
                None
            },
        }
    }
}
