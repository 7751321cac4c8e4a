//! Edge case tests for anz-par

#[cfg(test)]
mod tests {
    use crate::{ParseTrace, Parser, Rule};
    use anz_lex::tokenize;
    use anz_util::{DiagnosticCode, Handler};

    fn parse_source(source: &str) -> (ParseTrace, Handler) {
        let mut handler = Handler::new();
        let (tokens, _) = tokenize(source, &mut handler);
        let trace = Parser::new(&tokens, &mut handler).parse();
        (trace, handler)
    }

    // ==================== EDGE CASES ====================

    /// EDGE CASE: Empty source is a valid empty program
    #[test]
    fn test_edge_empty_source() {
        let (trace, handler) = parse_source("");
        assert!(trace.accepted);
        assert_eq!(trace.rules, vec![Rule::ProgramEnd, Rule::Accept]);
        assert!(handler.all().is_empty());
    }

    /// EDGE CASE: Whitespace only
    #[test]
    fn test_edge_whitespace_only() {
        let (trace, handler) = parse_source("   \n\t  \n  ");
        assert!(trace.accepted);
        assert!(!handler.has_errors());
    }

    /// EDGE CASE: Full program from the course material
    #[test]
    fn test_edge_full_program() {
        let source = r#"
            let contador int = 0;
            let nombre string;
            let listo boolean;

            function doble int (int n) {
                return n + n;
            }

            function saluda void (string quien, int veces) {
                while (!(veces == 0)) {
                    put "hola ";
                    put quien;
                    veces += 32767;
                }
                return;
            }

            get nombre;
            saluda(nombre, 3);
            if (contador == 0) contador = doble(contador + 1);
            put contador;
        "#;
        let (trace, handler) = parse_source(source);
        assert!(handler.all().is_empty(), "{:?}", handler.all());
        assert!(trace.accepted);
        assert_eq!(trace.rules.last(), Some(&Rule::Accept));
        let functions = trace.rules.iter().filter(|&&r| r == Rule::ProgramFunction).count();
        let statements = trace.rules.iter().filter(|&&r| r == Rule::ProgramStatement).count();
        assert_eq!(functions, 2);
        assert_eq!(statements, 7);
    }

    /// EDGE CASE: Deeply nested parentheses
    #[test]
    fn test_edge_deep_parens() {
        let expr = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        let (trace, handler) = parse_source(&format!("put {};", expr));
        assert!(!handler.has_errors());
        assert_eq!(trace.rules.iter().filter(|&&r| r == Rule::Paren).count(), 100);
    }

    /// EDGE CASE: Many statements do not grow the stack
    #[test]
    fn test_edge_many_statements() {
        let source = "put 1;\n".repeat(10_000);
        let (trace, handler) = parse_source(&source);
        assert!(!handler.has_errors());
        assert!(trace.accepted);
    }

    /// EDGE CASE: Only garbage tokens
    #[test]
    fn test_edge_only_garbage() {
        let (trace, handler) = parse_source(") ) ) , , int");
        assert!(!trace.accepted);
        assert!(handler.has_errors());
        assert_eq!(trace.rules.last(), Some(&Rule::ProgramEnd));
    }

    /// EDGE CASE: Each bad statement yields a diagnostic, the rest parse
    #[test]
    fn test_edge_one_error_per_bad_statement() {
        let source = "let a int\nlet b int;\nput (1;\nput 2;\nget;\nreturn 3;";
        let (trace, handler) = parse_source(source);
        let lines: Vec<_> = handler.all().iter().map(|d| d.line()).collect();
        assert_eq!(lines, vec![2, 3, 5]);
        assert!(trace.rules.contains(&Rule::Return));
    }

    /// EDGE CASE: Missing semicolon at end of input
    #[test]
    fn test_edge_missing_semicolon_at_eof() {
        let (_, handler) = parse_source("put 1");
        assert_eq!(handler.error_count(), 1);
        assert_eq!(
            handler.all()[0].code,
            Some(DiagnosticCode::E_PARSER_UNEXPECTED_EOF)
        );
        assert_eq!(handler.all()[0].message, "unexpected end of input, expected ';'");
    }

    /// EDGE CASE: Missing token reported with its own code
    #[test]
    fn test_edge_expected_token_code() {
        let (_, handler) = parse_source("get 1;");
        assert_eq!(
            handler.all()[0].code,
            Some(DiagnosticCode::E_PARSER_EXPECTED_TOKEN)
        );
        assert_eq!(handler.all()[0].message, "expected identifier, found '1'");
    }

    /// EDGE CASE: Unexpected token at statement start
    #[test]
    fn test_edge_unexpected_token_code() {
        let (_, handler) = parse_source("int;");
        assert_eq!(
            handler.all()[0].code,
            Some(DiagnosticCode::E_PARSER_UNEXPECTED_TOKEN)
        );
    }

    /// EDGE CASE: Keywords are case-sensitive in the grammar too
    #[test]
    fn test_edge_uppercase_keyword_is_identifier() {
        let (_, handler) = parse_source("PUT 1;");
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.all()[1].message, "expected '=', '+=' or '(', found '1'");
    }

    /// EDGE CASE: Error position is the offending token
    #[test]
    fn test_edge_error_position() {
        let (_, handler) = parse_source("let x int;\n  put ;");
        let diagnostic = &handler.all()[0];
        assert_eq!(diagnostic.line(), 2);
        assert_eq!(diagnostic.column(), 7);
    }

    /// EDGE CASE: Trace is deterministic
    #[test]
    fn test_edge_deterministic() {
        let source = "function f int (int a) { return a; } put f(1) == 1;";
        let (a, _) = parse_source(source);
        let (b, _) = parse_source(source);
        assert_eq!(a, b);
    }
}
