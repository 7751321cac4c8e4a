//! Keyword classification.
//!
//! The keyword table is built once per process and never mutated.

use std::sync::LazyLock;

use anz_util::FxHashMap;

use crate::token::{Keyword, TokenKind};

/// Lower-case spelling → keyword.
static KEYWORDS: LazyLock<FxHashMap<&'static str, Keyword>> =
    LazyLock::new(|| Keyword::ALL.iter().map(|&kw| (kw.as_str(), kw)).collect());

/// Classify a scanned identifier lexeme.
///
/// Lookup is exact and case-sensitive: only the lower-case spelling of a
/// reserved word is a keyword.
///
/// # Example
///
/// ```
/// use anz_lex::{classify, Keyword, TokenKind};
///
/// assert_eq!(classify("if"), TokenKind::Keyword(Keyword::If));
/// assert_eq!(classify("ifx"), TokenKind::Identifier);
/// assert_eq!(classify("If"), TokenKind::Identifier);
/// ```
pub fn classify(lexeme: &str) -> TokenKind {
    match KEYWORDS.get(lexeme) {
        Some(&kw) => TokenKind::Keyword(kw),
        None => TokenKind::Identifier,
    }
}

/// The keyword `lexeme` spells when case is ignored, if it is not already
/// the exact spelling.
pub fn miscased_keyword(lexeme: &str) -> Option<Keyword> {
    if lexeme.len() > "function".len() || KEYWORDS.contains_key(lexeme) {
        return None;
    }
    KEYWORDS.get(lexeme.to_ascii_lowercase().as_str()).copied()
}
