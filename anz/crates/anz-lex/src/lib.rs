//! anz-lex - Lexical Analyzer for JS-PdL
//!
//! This crate turns JS-PdL source text into a stream of classified tokens,
//! counts identifier occurrences, and reports lexical faults without ever
//! stopping early.
//!
//! # Example Usage
//!
//! ```
//! use anz_util::Handler;
//! use anz_lex::{Lexer, TokenKind};
//!
//! let source = "let x int;";
//! let mut handler = Handler::new();
//! let lexer = Lexer::new(source, &mut handler);
//!
//! let significant: Vec<_> = lexer.filter(|t| !t.is_trivia()).collect();
//! assert_eq!(significant.len(), 5);
//! assert_eq!(significant[1].kind, TokenKind::Identifier);
//! assert_eq!(significant[4].kind, TokenKind::EndOfInput);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`cursor`] - Character cursor for source traversal
//! - [`symbols`] - Identifier occurrence table
//! - `lexer` - Main lexer implementation
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `boolean`, `function`, `get`, `if`, `int`, `let`, `put`, `return`,
//! `string`, `void`, `while`. Matching is case-sensitive; a keyword written
//! in another case is an identifier and draws a warning.
//!
//! ## Identifiers
//!
//! Pattern: `[A-Za-z_][A-Za-z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: `42` (at most 32767 by default)
//! - **Float**: `3.14` (lexed, but not accepted by the grammar)
//! - **String**: `"hola"` (single line, at most 64 characters by default)
//!
//! ## Operators and punctuation
//!
//! `+`, `+=`, `=`, `==`, `!` and `,`, `;`, `(`, `)`, `{`, `}`, `.`
//!
//! ## Trivia
//!
//! Whitespace runs and `//` or `/* */` comments are produced as tokens, so
//! the lexemes of a token stream always concatenate back to the source.

mod classify;
pub mod cursor;
mod lexer;
pub mod symbols;
pub mod token;

#[cfg(test)]
mod edge_cases;

use anz_util::Handler;

pub use classify::{classify, miscased_keyword};
pub use cursor::Cursor;
pub use lexer::{is_ident_continue, is_ident_start, Lexer, Limits};
pub use symbols::{SymbolEntry, SymbolTable};
pub use token::{Keyword, Operator, Punctuation, Token, TokenKind};

/// Lexes `source` to completion.
///
/// Returns every token, trivia and the final `EndOfInput` included, along
/// with the identifier table.
pub fn tokenize(source: &str, handler: &mut Handler) -> (Vec<Token>, SymbolTable) {
    tokenize_with_limits(source, handler, Limits::default())
}

/// [`tokenize`] with custom literal limits.
pub fn tokenize_with_limits(
    source: &str,
    handler: &mut Handler,
    limits: Limits,
) -> (Vec<Token>, SymbolTable) {
    let mut lexer = Lexer::new(source, handler).with_limits(limits);
    let tokens: Vec<Token> = lexer.by_ref().collect();
    (tokens, lexer.into_symbols())
}
