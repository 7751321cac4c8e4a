//! Diagnostic codes for categorizing analysis errors and warnings.
//!
//! Codes in the `1000` range belong to the lexer, codes in the `2000`
//! range to the parser.
//!
//! # Examples
//!
//! ```
//! use anz_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" for errors or "W" for warnings and `number` is zero-padded to four
/// digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

/// Analysis phase a code belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexical,
    Syntax,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Lexical => write!(f, "lexical"),
            Phase::Syntax => write!(f, "syntax"),
        }
    }
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001", "W1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// The phase that emits this code, if it is one of the known ranges.
    pub const fn phase(&self) -> Option<Phase> {
        match self.number {
            1000..=1999 => Some(Phase::Lexical),
            2000..=2999 => Some(Phase::Syntax),
            _ => None,
        }
    }

    // =========================================================================
    // LEXICAL CODES (1000-1999)
    // =========================================================================

    /// E1001: Lexer - Invalid character
    pub const E_LEXER_INVALID_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Lexer - Integer literal out of range
    pub const E_LEXER_INTEGER_OUT_OF_RANGE: Self = Self::new("E", 1003);
    /// E1004: Lexer - String literal too long
    pub const E_LEXER_STRING_TOO_LONG: Self = Self::new("E", 1004);
    /// E1005: Lexer - Unterminated block comment
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1005);
    /// W1001: Lexer - Reserved word written with the wrong case
    pub const W_LEXER_KEYWORD_CASE: Self = Self::new("W", 1001);

    // =========================================================================
    // SYNTAX CODES (2000-2999)
    // =========================================================================

    /// E2001: Parser - Unexpected token
    pub const E_PARSER_UNEXPECTED_TOKEN: Self = Self::new("E", 2001);
    /// E2002: Parser - Expected token
    pub const E_PARSER_EXPECTED_TOKEN: Self = Self::new("E", 2002);
    /// E2003: Parser - Unexpected end of input
    pub const E_PARSER_UNEXPECTED_EOF: Self = Self::new("E", 2003);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
