//! Expression parsing.
//!
//! Precedence, lowest first: `==`, `+`, `!`. Both binary operators are
//! left-associative; the left-recursive rules are parsed as loops that
//! reduce after each operand.

use crate::{Parser, Rule};
use anz_lex::{Operator, Punctuation, TokenKind};

impl<'a> Parser<'a> {
    /// Parse an expression (`E`)
    pub(crate) fn parse_expr(&mut self) -> Option<()> {
        self.parse_additive()?;
        self.trace.push(Rule::EqualOperand);

        while self.match_token(TokenKind::Operator(Operator::Equal)) {
            self.parse_additive()?;
            self.trace.push(Rule::Equal);
        }
        Some(())
    }

    /// `U`
    fn parse_additive(&mut self) -> Option<()> {
        self.parse_unary()?;
        self.trace.push(Rule::AddOperand);

        while self.match_token(TokenKind::Operator(Operator::Plus)) {
            self.parse_unary()?;
            self.trace.push(Rule::Add);
        }
        Some(())
    }

    /// `V`
    fn parse_unary(&mut self) -> Option<()> {
        if self.match_token(TokenKind::Operator(Operator::Not)) {
            self.parse_primary()?;
            self.trace.push(Rule::Not);
        } else {
            self.parse_primary()?;
            self.trace.push(Rule::NotOperand);
        }
        Some(())
    }

    /// `W`
    fn parse_primary(&mut self) -> Option<()> {
        let rule = match self.current_kind() {
            TokenKind::Identifier => {
                if self.peek_kind() == TokenKind::Punctuation(Punctuation::LParen) {
                    self.advance();
                    self.advance();
                    self.parse_args()?;
                    self.expect_punct(Punctuation::RParen)?;
                    Rule::Call
                } else {
                    self.advance();
                    Rule::Variable
                }
            },
            TokenKind::Punctuation(Punctuation::LParen) => {
                self.advance();
                self.parse_expr()?;
                self.expect_punct(Punctuation::RParen)?;
                Rule::Paren
            },
            TokenKind::IntegerLiteral => {
                self.advance();
                Rule::Integer
            },
            TokenKind::StringLiteral => {
                self.advance();
                Rule::String
            },
            _ => {
                self.error_unexpected("expression");
                return None;
            },
        };
        self.trace.push(rule);
        Some(())
    }

    /// Parse a possibly empty argument list (`L`), stopping before `)`
    pub(crate) fn parse_args(&mut self) -> Option<()> {
        if self.check_punct(Punctuation::RParen) {
            self.trace.push(Rule::ArgsEmpty);
            return Some(());
        }

        self.parse_expr()?;
        let mut more = 0;
        while self.match_token(TokenKind::Punctuation(Punctuation::Comma)) {
            self.parse_expr()?;
            more += 1;
        }

        self.trace.push(Rule::ArgsEnd);
        self.trace.push_n(Rule::ArgsMore, more);
        self.trace.push(Rule::Args);
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Parser;
    use anz_lex::tokenize;
    use anz_util::Handler;

    /// Trace of `put <expr>;` without the statement and program rules.
    fn expr_numbers(expr: &str) -> Vec<u8> {
        let source = format!("put {};", expr);
        let mut handler = Handler::new();
        let (tokens, _) = tokenize(&source, &mut handler);
        let trace = Parser::new(&tokens, &mut handler).parse();
        assert!(!handler.has_errors(), "{:?}", handler.all());
        let nums: Vec<u8> = trace.numbers().collect();
        nums[..nums.len() - 5].to_vec()
    }

    #[test]
    fn test_parse_literals() {
        assert_eq!(expr_numbers("1"), vec![33, 29, 27, 25]);
        assert_eq!(expr_numbers("\"hola\""), vec![34, 29, 27, 25]);
        assert_eq!(expr_numbers("x"), vec![30, 29, 27, 25]);
    }

    #[test]
    fn test_parse_addition_is_left_associative() {
        assert_eq!(
            expr_numbers("a + b + c"),
            vec![30, 29, 27, 30, 29, 26, 30, 29, 26, 25]
        );
    }

    #[test]
    fn test_parse_equality_binds_looser_than_addition() {
        assert_eq!(
            expr_numbers("a == b + 1"),
            vec![30, 29, 27, 25, 30, 29, 27, 33, 29, 26, 24]
        );
    }

    #[test]
    fn test_parse_not() {
        assert_eq!(expr_numbers("!a"), vec![30, 28, 27, 25]);
    }

    #[test]
    fn test_parse_parenthesized() {
        assert_eq!(
            expr_numbers("(a == b)"),
            vec![30, 29, 27, 25, 30, 29, 27, 24, 31, 29, 27, 25]
        );
    }

    #[test]
    fn test_parse_function_call() {
        assert_eq!(expr_numbers("f()"), vec![42, 32, 29, 27, 25]);
        assert_eq!(
            expr_numbers("f(x)"),
            vec![30, 29, 27, 25, 44, 41, 32, 29, 27, 25]
        );
    }

    #[test]
    fn test_not_applies_to_primary_only() {
        let mut handler = Handler::new();
        let (tokens, _) = tokenize("put !!a;", &mut handler);
        Parser::new(&tokens, &mut handler).parse();
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.all()[0].message, "expected expression, found '!'");
    }

    #[test]
    fn test_unclosed_paren() {
        let mut handler = Handler::new();
        let (tokens, _) = tokenize("put (a;", &mut handler);
        Parser::new(&tokens, &mut handler).parse();
        assert_eq!(handler.all()[0].message, "expected ')', found ';'");
    }
}
