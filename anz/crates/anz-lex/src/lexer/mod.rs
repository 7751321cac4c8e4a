//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator lexing
//! - `comment` - Whitespace and comment lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{Lexer, Limits};
pub use identifier::{is_ident_continue, is_ident_start};
