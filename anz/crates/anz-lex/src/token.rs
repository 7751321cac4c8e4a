//! Token definitions.
//!
//! A [`Token`] is a classified lexeme with its location. The kind is a closed
//! set of variants: every consumer matches on [`TokenKind`] exhaustively.

use std::fmt;

use anz_util::{Position, Span};

/// Reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Keyword {
    Boolean,
    Function,
    Get,
    If,
    Int,
    Let,
    Put,
    Return,
    String,
    Void,
    While,
}

impl Keyword {
    /// Every keyword, in alphabetical order.
    pub const ALL: [Keyword; 11] = [
        Keyword::Boolean,
        Keyword::Function,
        Keyword::Get,
        Keyword::If,
        Keyword::Int,
        Keyword::Let,
        Keyword::Put,
        Keyword::Return,
        Keyword::String,
        Keyword::Void,
        Keyword::While,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Boolean => "boolean",
            Keyword::Function => "function",
            Keyword::Get => "get",
            Keyword::If => "if",
            Keyword::Int => "int",
            Keyword::Let => "let",
            Keyword::Put => "put",
            Keyword::Return => "return",
            Keyword::String => "string",
            Keyword::Void => "void",
            Keyword::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `+=`
    PlusAssign,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `!`
    Not,
}

impl Operator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::PlusAssign => "+=",
            Operator::Assign => "=",
            Operator::Equal => "==",
            Operator::Not => "!",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Punctuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Punctuation {
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `.`
    Dot,
}

impl Punctuation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Punctuation::Comma => ",",
            Punctuation::Semicolon => ";",
            Punctuation::LParen => "(",
            Punctuation::RParen => ")",
            Punctuation::LBrace => "{",
            Punctuation::RBrace => "}",
            Punctuation::Dot => ".",
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ',' => Some(Punctuation::Comma),
            ';' => Some(Punctuation::Semicolon),
            '(' => Some(Punctuation::LParen),
            ')' => Some(Punctuation::RParen),
            '{' => Some(Punctuation::LBrace),
            '}' => Some(Punctuation::RBrace),
            '.' => Some(Punctuation::Dot),
            _ => None,
        }
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    Operator(Operator),
    Punctuation(Punctuation),
    /// `// ...` or `/* ... */`
    Comment,
    /// A run of whitespace characters
    Whitespace,
    EndOfInput,
    /// Text the lexer rejected; always accompanied by a diagnostic
    Invalid,
}

impl TokenKind {
    /// Comments and whitespace.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Whitespace)
    }

    /// Upper-case name used in token reports.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword(_) => "KEYWORD",
            TokenKind::IntegerLiteral => "INTEGER",
            TokenKind::FloatLiteral => "FLOAT",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Operator(_) => "OPERATOR",
            TokenKind::Punctuation(_) => "PUNCTUATION",
            TokenKind::Comment => "COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Invalid => "INVALID",
        }
    }
}

/// Human-readable description, as used in "expected ..." messages.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Keyword(kw) => write!(f, "'{}'", kw),
            TokenKind::IntegerLiteral => write!(f, "integer literal"),
            TokenKind::FloatLiteral => write!(f, "float literal"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::Operator(op) => write!(f, "'{}'", op),
            TokenKind::Punctuation(p) => write!(f, "'{}'", p),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::Invalid => write!(f, "invalid token"),
        }
    }
}

/// A classified lexeme.
///
/// The lexeme is the exact source text the token covers, so concatenating
/// the lexemes of a full token stream gives back the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.span.position()
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// How the token is quoted in diagnostics: `'x'`, or `end of input`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfInput => "end of input".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

/// `<KIND, attribute>`
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "<{}, >", self.kind.name()),
            // an unterminated comment may span lines; keep the report line-based
            TokenKind::Invalid => {
                write!(f, "<{}, ", self.kind.name())?;
                for c in self.lexeme.chars() {
                    if c.is_control() {
                        write!(f, "{}", c.escape_default())?;
                    } else {
                        write!(f, "{}", c)?;
                    }
                }
                write!(f, ">")
            },
            _ => write!(f, "<{}, {}>", self.kind.name(), self.lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Identifier, "suma", Span::new(0, 4, 1, 1));
        assert_eq!(token.to_string(), "<IDENTIFIER, suma>");

        let eof = Token::new(TokenKind::EndOfInput, "", Span::new(4, 4, 1, 5));
        assert_eq!(eof.to_string(), "<EOF, >");
        assert_eq!(eof.describe(), "end of input");

        let invalid = Token::new(TokenKind::Invalid, "/* a\r\nb", Span::new(0, 7, 1, 1));
        assert_eq!(invalid.to_string(), "<INVALID, /* a\\r\\nb>");

        let quoted = Token::new(TokenKind::Invalid, "\"abc", Span::new(0, 4, 1, 1));
        assert_eq!(quoted.to_string(), "<INVALID, \"abc>");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Keyword(Keyword::While).to_string(), "'while'");
        assert_eq!(
            TokenKind::Operator(Operator::PlusAssign).to_string(),
            "'+='"
        );
        assert_eq!(
            TokenKind::Punctuation(Punctuation::Semicolon).to_string(),
            "';'"
        );
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    }

    #[test]
    fn test_trivia() {
        assert!(TokenKind::Comment.is_trivia());
        assert!(TokenKind::Whitespace.is_trivia());
        assert!(!TokenKind::Invalid.is_trivia());
        assert!(!TokenKind::EndOfInput.is_trivia());
    }

    #[test]
    fn test_punctuation_from_char() {
        assert_eq!(Punctuation::from_char('.'), Some(Punctuation::Dot));
        assert_eq!(Punctuation::from_char('}'), Some(Punctuation::RBrace));
        assert_eq!(Punctuation::from_char('['), None);
    }

    #[test]
    fn test_keyword_names_are_lowercase() {
        for kw in Keyword::ALL {
            assert_eq!(kw.as_str(), kw.as_str().to_lowercase());
        }
    }
}
