//! Statement parsing - if, while, let and the simple statements.

use crate::{Parser, Rule};
use anz_lex::{Keyword, Operator, Punctuation, TokenKind};

impl<'a> Parser<'a> {
    /// Parse a statement (`B`)
    pub(crate) fn parse_statement(&mut self) -> Option<()> {
        match self.current_kind() {
            TokenKind::Keyword(Keyword::If) => self.parse_if_stmt(),
            TokenKind::Keyword(Keyword::While) => self.parse_while_stmt(),
            TokenKind::Keyword(Keyword::Let) => self.parse_let_stmt(),
            _ => {
                self.parse_simple_stmt()?;
                self.trace.push(Rule::Simple);
                Some(())
            },
        }
    }

    /// `if ( E ) S`
    ///
    /// The body is a single simple statement; there is no `else`.
    fn parse_if_stmt(&mut self) -> Option<()> {
        self.advance();
        self.expect_punct(Punctuation::LParen)?;
        self.parse_expr()?;
        self.expect_punct(Punctuation::RParen)?;
        self.parse_simple_stmt()?;
        self.trace.push(Rule::If);
        Some(())
    }

    /// `while ( E ) { C }`
    fn parse_while_stmt(&mut self) -> Option<()> {
        self.advance();
        self.expect_punct(Punctuation::LParen)?;
        self.parse_expr()?;
        self.expect_punct(Punctuation::RParen)?;
        self.parse_block()?;
        self.trace.push(Rule::While);
        Some(())
    }

    /// `let id T ;` or `let id T = E ;`
    fn parse_let_stmt(&mut self) -> Option<()> {
        self.advance();
        self.expect_identifier()?;
        self.parse_type()?;

        let rule = if self.match_token(TokenKind::Operator(Operator::Assign)) {
            self.parse_expr()?;
            Rule::LetInit
        } else {
            Rule::Let
        };

        self.expect_punct(Punctuation::Semicolon)?;
        self.trace.push(rule);
        Some(())
    }

    /// Parse a simple statement (`S`)
    pub(crate) fn parse_simple_stmt(&mut self) -> Option<()> {
        let rule = match self.current_kind() {
            TokenKind::Identifier => {
                self.advance();
                match self.current_kind() {
                    TokenKind::Operator(Operator::Assign) => {
                        self.advance();
                        self.parse_expr()?;
                        Rule::Assign
                    },
                    TokenKind::Operator(Operator::PlusAssign) => {
                        self.advance();
                        self.parse_expr()?;
                        Rule::AddAssign
                    },
                    TokenKind::Punctuation(Punctuation::LParen) => {
                        self.advance();
                        self.parse_args()?;
                        self.expect_punct(Punctuation::RParen)?;
                        Rule::CallStatement
                    },
                    _ => {
                        self.error_unexpected("'=', '+=' or '('");
                        return None;
                    },
                }
            },
            TokenKind::Keyword(Keyword::Put) => {
                self.advance();
                self.parse_expr()?;
                Rule::Put
            },
            TokenKind::Keyword(Keyword::Get) => {
                self.advance();
                self.expect_identifier()?;
                Rule::Get
            },
            TokenKind::Keyword(Keyword::Return) => {
                self.advance();
                if self.check_punct(Punctuation::Semicolon) {
                    self.trace.push(Rule::ReturnEmpty);
                } else {
                    self.parse_expr()?;
                    self.trace.push(Rule::ReturnValue);
                }
                Rule::Return
            },
            _ => {
                self.error_unexpected("statement");
                return None;
            },
        };

        self.expect_punct(Punctuation::Semicolon)?;
        self.trace.push(rule);
        Some(())
    }

    /// Parse a type (`T`)
    pub(crate) fn parse_type(&mut self) -> Option<()> {
        let rule = match self.current_kind() {
            TokenKind::Keyword(Keyword::Int) => Rule::TypeInt,
            TokenKind::Keyword(Keyword::Boolean) => Rule::TypeBoolean,
            TokenKind::Keyword(Keyword::String) => Rule::TypeString,
            _ => {
                self.error_unexpected("type");
                return None;
            },
        };
        self.advance();
        self.trace.push(rule);
        Some(())
    }

    /// `{ C }`
    ///
    /// Statements that fail inside the block are recovered from here, so
    /// only a missing `}` fails the enclosing construct.
    pub(crate) fn parse_block(&mut self) -> Option<()> {
        self.expect_punct(Punctuation::LBrace)?;

        let mut count = 0;
        loop {
            match self.current_kind() {
                TokenKind::EndOfInput
                | TokenKind::Punctuation(Punctuation::RBrace)
                | TokenKind::Keyword(Keyword::Function) => break,
                _ => {
                    let start = self.position;
                    match self.parse_statement() {
                        Some(()) => count += 1,
                        None => self.recover_to_sync_point(start, false),
                    }
                },
            }
        }

        self.trace.push(Rule::BodyEnd);
        self.trace.push_n(Rule::BodyStatement, count);
        self.expect_punct(Punctuation::RBrace)
    }
}
