//! Edge case tests for anz-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Keyword, Operator, Punctuation, Token, TokenKind};
    use anz_util::{Handler, Level, Position, Span};

    fn lex_all(source: &str) -> (Vec<Token>, Handler) {
        let mut handler = Handler::new();
        let (tokens, _) = tokenize(source, &mut handler);
        (tokens, handler)
    }

    fn significant(source: &str) -> Vec<Token> {
        lex_all(source).0.into_iter().filter(|t| !t.is_trivia()).collect()
    }

    // ==================== EDGE CASES ====================

    /// EDGE CASE: empty input yields exactly one EndOfInput at 1:1
    #[test]
    fn test_edge_empty_source() {
        let (tokens, handler) = lex_all("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
        assert_eq!(tokens[0].position(), Position::START);
        assert!(handler.all().is_empty());
    }

    /// EDGE CASE: whitespace-only input is one trivia token then EndOfInput
    #[test]
    fn test_edge_whitespace_only() {
        let (tokens, _) = lex_all(" \t\r\n  \n");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        assert_eq!(tokens[1].line(), 3);
        assert_eq!(tokens[1].column(), 1);
    }

    /// EDGE CASE: an unterminated string at end of input
    #[test]
    fn test_edge_unterminated_string() {
        let (tokens, handler) = lex_all("\"abc");
        assert_eq!(handler.all().len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Invalid);
        assert_eq!(tokens[0].lexeme, "\"abc");
        assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
    }

    /// EDGE CASE: one bad character does not disturb what follows it
    #[test]
    fn test_edge_invalid_char_then_statement() {
        let (tokens, handler) = lex_all("@ x = 1;");
        assert_eq!(handler.all().len(), 1);
        assert_eq!(handler.all()[0].span, Span::new(0, 1, 1, 1));
        let kinds: Vec<_> = tokens
            .iter()
            .filter(|t| !t.is_trivia())
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Invalid,
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Assign),
                TokenKind::IntegerLiteral,
                TokenKind::Punctuation(Punctuation::Semicolon),
                TokenKind::EndOfInput,
            ]
        );
    }

    /// EDGE CASE: a trailing point is its own token
    #[test]
    fn test_edge_trailing_point() {
        let t = significant("3.");
        assert_eq!(t[0].kind, TokenKind::IntegerLiteral);
        assert_eq!(t[0].lexeme, "3");
        assert_eq!(t[1].kind, TokenKind::Punctuation(Punctuation::Dot));
        assert_eq!(t[2].kind, TokenKind::EndOfInput);
    }

    /// EDGE CASE: symbol counts and first positions
    #[test]
    fn test_edge_symbol_counts() {
        let mut handler = Handler::new();
        let (_, symbols) = tokenize("x x y x", &mut handler);
        let x = symbols.get("x").unwrap();
        let y = symbols.get("y").unwrap();
        assert_eq!(x.occurrences, 3);
        assert_eq!(x.first_seen, Position::new(1, 1, 0));
        assert_eq!(y.occurrences, 1);
        assert_eq!(y.first_seen, Position::new(1, 5, 4));
        assert_eq!(symbols.len(), 2);
    }

    /// EDGE CASE: keyword prefix inside a longer identifier
    #[test]
    fn test_edge_keyword_prefix() {
        let t = significant("if ifx whilee returned");
        assert_eq!(t[0].kind, TokenKind::Keyword(Keyword::If));
        assert_eq!(t[1].kind, TokenKind::Identifier);
        assert_eq!(t[2].kind, TokenKind::Identifier);
        assert_eq!(t[3].kind, TokenKind::Identifier);
    }

    /// EDGE CASE: upper-case keyword is an identifier plus a warning
    #[test]
    fn test_edge_uppercase_keyword() {
        let (tokens, handler) = lex_all("LET");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.all()[0].level, Level::Warning);
    }

    /// EDGE CASE: columns count characters, not bytes
    #[test]
    fn test_edge_multibyte_columns() {
        let (tokens, _) = lex_all("\"ñandú\" x");
        let x = tokens.iter().find(|t| t.kind == TokenKind::Identifier).unwrap();
        assert_eq!(x.column(), 9);
        assert_eq!(x.start(), 10);
    }

    /// EDGE CASE: CRLF line endings advance the line once
    #[test]
    fn test_edge_crlf() {
        let t = significant("a\r\nb");
        assert_eq!(t[1].line(), 2);
        assert_eq!(t[1].column(), 1);
    }

    /// EDGE CASE: block comments span lines and do not nest
    #[test]
    fn test_edge_block_comment_does_not_nest() {
        let (tokens, handler) = lex_all("/* a /* b */ c */");
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].lexeme, "/* a /* b */");
        let rest: Vec<_> = tokens
            .iter()
            .filter(|t| !t.is_trivia())
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(rest, vec!["c", "*", "/", ""]);
        assert_eq!(handler.error_count(), 2);
    }

    /// EDGE CASE: line comment at end of input without newline
    #[test]
    fn test_edge_line_comment_at_eof() {
        let (tokens, handler) = lex_all("x // done");
        assert_eq!(tokens[2].kind, TokenKind::Comment);
        assert_eq!(tokens[2].lexeme, "// done");
        assert!(handler.all().is_empty());
    }

    /// EDGE CASE: lone slash is rejected
    #[test]
    fn test_edge_lone_slash() {
        let (tokens, handler) = lex_all("a / b");
        assert_eq!(tokens[2].kind, TokenKind::Invalid);
        assert_eq!(handler.error_count(), 1);
    }

    /// EDGE CASE: adjacent tokens with no separating whitespace
    #[test]
    fn test_edge_no_whitespace() {
        let t = significant("x+=y==!z;");
        let lexemes: Vec<_> = t.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["x", "+=", "y", "==", "!", "z", ";", ""]);
    }

    /// EDGE CASE: very long identifier
    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let t = significant(&format!("let {} int;", name));
        assert_eq!(t[1].lexeme, name);
    }

    /// EDGE CASE: every error leaves a diagnostic and scanning keeps going
    #[test]
    fn test_edge_many_errors() {
        let (tokens, handler) = lex_all("#$%&");
        assert_eq!(handler.error_count(), 4);
        assert_eq!(tokens.len(), 5);
    }
}
