//! anz-par - Parser (Syntactic Analyzer) for JS-PdL
//!
//! This crate provides a recursive descent parser that validates a JS-PdL
//! token stream against the language grammar and records the grammar rules
//! it applies.
//!
//! # Overview
//!
//! The parser works on the significant tokens only: whitespace, comments and
//! the Invalid tokens the lexer already diagnosed are dropped before parsing.
//! No tree is built; the result is a [`ParseTrace`] listing rule numbers in
//! bottom-up (reduction) order.
//!
//! # Example Usage
//!
//! ```
//! use anz_util::Handler;
//! use anz_lex::tokenize;
//! use anz_par::{Parser, Rule};
//!
//! let source = "let x int;";
//! let mut handler = Handler::new();
//! let (tokens, _) = tokenize(source, &mut handler);
//!
//! let trace = Parser::new(&tokens, &mut handler).parse();
//! assert!(trace.accepted);
//! assert_eq!(trace.numbers().collect::<Vec<_>>(), vec![10, 7, 4, 2, 1]);
//! assert_eq!(trace.rules.last(), Some(&Rule::Accept));
//! ```
//!
//! # Error Recovery
//!
//! When encountering syntax errors, the parser:
//! 1. Reports a diagnostic at the offending token
//! 2. Skips tokens to the next synchronization point
//! 3. Continues parsing to find additional errors
//!
//! Synchronization points are:
//! - Statement terminators (`;`, consumed)
//! - Closing braces (`}`, left for the enclosing block)
//! - Statement and declaration keywords (`if`, `while`, `let`, `put`, `get`,
//!   `return`, `function`)
//! - End of input

mod expr;
mod items;
pub mod rule;
mod stmt;

#[cfg(test)]
mod edge_cases;

use anz_lex::{Keyword, Punctuation, Token, TokenKind};
use anz_util::{DiagnosticCode, Handler, Span};

pub use rule::{ParseTrace, Rule};

// ============================================================================
// PARSER
// ============================================================================

/// Recursive descent parser for JS-PdL.
///
/// Parse functions return `Option<()>`: `None` means a syntax error was
/// reported and the enclosing statement loop must recover.
pub struct Parser<'a> {
    /// Significant tokens, always ending with `EndOfInput`
    tokens: Vec<&'a Token>,

    /// Current position in token stream
    position: usize,

    /// Error handler
    handler: &'a mut Handler,

    /// Rules applied so far
    trace: ParseTrace,

    /// Syntax errors reported so far
    errors: usize,

    /// Stands in for `EndOfInput` when the stream lacks one
    end: Token,
}

impl<'a> Parser<'a> {
    /// Create a parser over a lexer token stream.
    ///
    /// Trivia and Invalid tokens are skipped.
    pub fn new(tokens: &'a [Token], handler: &'a mut Handler) -> Self {
        let significant: Vec<&'a Token> = tokens
            .iter()
            .filter(|t| !t.is_trivia() && t.kind != TokenKind::Invalid)
            .collect();

        let end_span = tokens
            .last()
            .map(|t| Span::new(t.end(), t.end(), t.line(), t.column()))
            .unwrap_or_default();

        Self {
            tokens: significant,
            position: 0,
            handler,
            trace: ParseTrace::new(),
            errors: 0,
            end: Token::new(TokenKind::EndOfInput, "", end_span),
        }
    }

    /// Parse a complete program.
    ///
    /// Always reads up to the end of input, whatever errors it meets.
    pub fn parse(&mut self) -> ParseTrace {
        let mut items = Vec::new();

        while !self.is_at_end() {
            let start = self.position;
            let (item, rule) = if self.check_keyword(Keyword::Function) {
                (self.parse_function(), Rule::ProgramFunction)
            } else {
                (self.parse_statement(), Rule::ProgramStatement)
            };
            match item {
                Some(()) => items.push(rule),
                None => self.recover_to_sync_point(start, true),
            }
        }

        self.trace.push(Rule::ProgramEnd);
        for rule in items.into_iter().rev() {
            self.trace.push(rule);
        }

        if self.errors == 0 {
            self.trace.push(Rule::Accept);
            self.trace.accepted = true;
        }

        std::mem::take(&mut self.trace)
    }

    /// Number of syntax errors reported so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    // ========================================================================
    // TOKEN NAVIGATION
    // ========================================================================

    /// Get current token
    fn current_token(&self) -> &Token {
        self.tokens.get(self.position).copied().unwrap_or(&self.end)
    }

    fn current_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Peek at next token
    fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.position + 1)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::EndOfInput)
    }

    /// Check if at end of tokens
    fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::EndOfInput
    }

    /// Advance to next token; never moves past the end of input
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.check(TokenKind::Keyword(keyword))
    }

    fn check_punct(&self, punct: Punctuation) -> bool {
        self.check(TokenKind::Punctuation(punct))
    }

    /// Match and consume token
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect specific token
    fn expect(&mut self, kind: TokenKind) -> Option<()> {
        if self.match_token(kind) {
            Some(())
        } else {
            self.error_expected(DiagnosticCode::E_PARSER_EXPECTED_TOKEN, &kind.to_string());
            None
        }
    }

    fn expect_punct(&mut self, punct: Punctuation) -> Option<()> {
        self.expect(TokenKind::Punctuation(punct))
    }

    fn expect_identifier(&mut self) -> Option<()> {
        self.expect(TokenKind::Identifier)
    }

    // ========================================================================
    // ERROR HANDLING
    // ========================================================================

    /// Check if current position is at a synchronization keyword
    pub fn is_at_stmt_start(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Keyword(
                Keyword::If
                    | Keyword::While
                    | Keyword::Let
                    | Keyword::Put
                    | Keyword::Get
                    | Keyword::Return
                    | Keyword::Function
            )
        )
    }

    /// Report "expected X, found Y" at the current token.
    ///
    /// At the end of input the message and code change to the
    /// premature-end form.
    fn error_expected(&mut self, code: DiagnosticCode, expected: &str) {
        let token = self.current_token();
        let span = token.span;
        let (code, message) = match token.kind {
            TokenKind::EndOfInput => (
                DiagnosticCode::E_PARSER_UNEXPECTED_EOF,
                format!("unexpected end of input, expected {}", expected),
            ),
            _ => (code, format!("expected {}, found {}", expected, token.describe())),
        };
        let help = match token.kind {
            TokenKind::FloatLiteral => Some("floating-point literals are not supported"),
            _ => None,
        };

        let mut diagnostic = self.handler.build_error(span, message).code(code);
        if let Some(help) = help {
            diagnostic = diagnostic.help(help);
        }
        diagnostic.emit(self.handler);
        self.errors += 1;
    }

    /// Report a token that cannot start the construct being parsed.
    fn error_unexpected(&mut self, expected: &str) {
        self.error_expected(DiagnosticCode::E_PARSER_UNEXPECTED_TOKEN, expected);
    }

    /// Recover to synchronization point
    ///
    /// Skips tokens until a `;` (consumed), a `}` (consumed only at top
    /// level), a statement keyword or the end of input. If the failed
    /// statement consumed nothing, at least one token is skipped.
    fn recover_to_sync_point(&mut self, start: usize, top_level: bool) {
        loop {
            match self.current_kind() {
                TokenKind::EndOfInput => break,
                TokenKind::Punctuation(Punctuation::Semicolon) => {
                    self.advance();
                    break;
                },
                TokenKind::Punctuation(Punctuation::RBrace) => {
                    if top_level {
                        self.advance();
                    }
                    break;
                },
                _ if self.is_at_stmt_start() => break,
                _ => self.advance(),
            }
        }

        if self.position == start {
            self.advance();
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
