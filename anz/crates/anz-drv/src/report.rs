//! Report rendering and output.
//!
//! Text reports are built as strings first, so the same text can go to a
//! file or to stdout.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;

use anz_lex::{SymbolTable, Token};
use anz_par::ParseTrace;
use anz_util::{Diagnostic, SourceFile};

use crate::error::{AnalyzerError, Result};
use crate::AnalysisResult;

pub const TOKENS_FILE: &str = "tokens.txt";
pub const RULES_FILE: &str = "rules.txt";
pub const SYMBOLS_FILE: &str = "symbols.txt";
pub const JSON_FILE: &str = "analysis.json";

/// `<KIND, lexeme>` per significant token.
pub fn tokens_report<'t>(tokens: impl IntoIterator<Item = &'t Token>) -> String {
    let mut out = String::new();
    for token in tokens.into_iter().filter(|t| !t.is_trivia()) {
        let _ = writeln!(out, "{}", token);
    }
    out
}

/// `A` followed by one rule number per line.
pub fn rules_report(trace: &ParseTrace) -> String {
    let mut out = String::from("A\n");
    for number in trace.numbers() {
        let _ = writeln!(out, "{}", number);
    }
    out
}

pub fn symbols_report(symbols: &SymbolTable) -> String {
    let mut out = String::from("SYMBOL TABLE:\n");
    for entry in symbols {
        let _ = writeln!(out, "* LEXEME : '{}'", entry.name);
        let _ = writeln!(
            out,
            "  + first seen : line {}, column {}",
            entry.first_seen.line, entry.first_seen.column
        );
        let _ = writeln!(out, "  + occurrences : {}", entry.occurrences);
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    token_count: usize,
    errors: usize,
    warnings: usize,
    accepted: bool,
    diagnostics: Vec<JsonDiagnostic<'a>>,
    symbols: Vec<JsonSymbol<'a>>,
    rules: Vec<JsonRule>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    severity: String,
    code: Option<String>,
    phase: Option<String>,
    message: &'a str,
    line: u32,
    column: u32,
}

#[derive(Serialize)]
struct JsonRule {
    number: u8,
    production: &'static str,
}

#[derive(Serialize)]
struct JsonSymbol<'a> {
    name: &'a str,
    line: u32,
    column: u32,
    occurrences: usize,
}

/// Machine-readable summary of a run.
pub fn json_report(result: &AnalysisResult) -> Result<String> {
    let report = JsonReport {
        token_count: result.significant_tokens().count(),
        errors: result.error_count(),
        warnings: result.warning_count(),
        accepted: result.trace.accepted,
        diagnostics: result
            .diagnostics
            .iter()
            .map(|d| JsonDiagnostic {
                severity: d.level.to_string(),
                code: d.code.map(|c| c.as_str()),
                phase: d.code.and_then(|c| c.phase()).map(|p| p.to_string()),
                message: &d.message,
                line: d.line(),
                column: d.column(),
            })
            .collect(),
        symbols: result
            .symbols
            .iter()
            .map(|e| JsonSymbol {
                name: &e.name,
                line: e.first_seen.line,
                column: e.first_seen.column,
                occurrences: e.occurrences,
            })
            .collect(),
        rules: result
            .trace
            .rules
            .iter()
            .map(|r| JsonRule {
                number: r.number(),
                production: r.production(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Write every report file into `dir`, creating it if needed.
pub fn write_all(dir: &Path, result: &AnalysisResult) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|source| AnalyzerError::Report {
        path: dir.to_path_buf(),
        source,
    })?;

    let files = [
        (TOKENS_FILE, tokens_report(&result.tokens)),
        (RULES_FILE, rules_report(&result.trace)),
        (SYMBOLS_FILE, symbols_report(&result.symbols)),
        (JSON_FILE, json_report(result)?),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = dir.join(name);
        std::fs::write(&path, content).map_err(|source| AnalyzerError::Report {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}

/// Render diagnostics with source snippets, ending with a summary line.
pub fn render_diagnostics(source: &SourceFile, diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        render_diagnostic(&mut out, source, diagnostic);
        out.push('\n');
    }
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    out.push_str(&summary_line(errors, diagnostics.len() - errors));
    out.push('\n');
    out
}

/// ```text
/// error[E1001]: invalid character '@'
///   --> input/input.txt:1:1
///     |
///   1 | @ x = 1;
///     | ^
/// ```
fn render_diagnostic(out: &mut String, source: &SourceFile, diagnostic: &Diagnostic) {
    let _ = write!(out, "{}", diagnostic.level);
    if let Some(code) = diagnostic.code {
        let _ = write!(out, "[{}]", code);
    }
    let _ = writeln!(out, ": {}", diagnostic.message);

    let width = diagnostic.line().to_string().len().max(3);
    let _ = writeln!(
        out,
        "{:>pad$}--> {}:{}:{}",
        "",
        source.name(),
        diagnostic.line(),
        diagnostic.column(),
        pad = width - 1
    );

    if let Ok(snippet) = source.snippet(diagnostic.span) {
        let _ = writeln!(out, "{:>width$} |", "");
        let _ = writeln!(out, "{}", snippet.format());
    }

    for note in &diagnostic.notes {
        let _ = writeln!(out, "{:>width$} = note: {}", "", note);
    }
    for help in &diagnostic.helps {
        let _ = writeln!(out, "{:>width$} = help: {}", "", help);
    }
}

/// `N error(s), M warning(s)`
pub fn summary_line(errors: usize, warnings: usize) -> String {
    format!("{} error(s), {} warning(s)", errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;
    use tempfile::TempDir;

    #[test]
    fn test_tokens_report() {
        let result = analyze("let x int; // c");
        assert_eq!(
            tokens_report(&result.tokens),
            "<KEYWORD, let>\n<IDENTIFIER, x>\n<KEYWORD, int>\n<PUNCTUATION, ;>\n<EOF, >\n"
        );
    }

    #[test]
    fn test_rules_report() {
        let result = analyze("let x int;");
        assert_eq!(rules_report(&result.trace), "A\n10\n7\n4\n2\n1\n");
    }

    #[test]
    fn test_symbols_report() {
        let result = analyze("x = 1;\n  y = x;");
        assert_eq!(
            symbols_report(&result.symbols),
            "SYMBOL TABLE:\n\
             * LEXEME : 'x'\n  + first seen : line 1, column 1\n  + occurrences : 2\n\
             * LEXEME : 'y'\n  + first seen : line 2, column 3\n  + occurrences : 1\n"
        );
    }

    #[test]
    fn test_json_report() {
        let result = analyze("put @;");
        let json: serde_json::Value = serde_json::from_str(&json_report(&result).unwrap()).unwrap();
        assert_eq!(json["errors"], 2);
        assert_eq!(json["accepted"], false);
        assert_eq!(json["diagnostics"][0]["code"], "E1001");
        assert_eq!(json["diagnostics"][0]["severity"], "error");
        assert_eq!(json["diagnostics"][0]["column"], 5);
        assert_eq!(json["diagnostics"][0]["phase"], "lexical");
        assert_eq!(json["diagnostics"][1]["phase"], "syntax");
    }

    #[test]
    fn test_json_report_rules_carry_productions() {
        let result = analyze("let x int;");
        let json: serde_json::Value = serde_json::from_str(&json_report(&result).unwrap()).unwrap();
        assert_eq!(json["rules"][0]["number"], 10);
        assert_eq!(json["rules"][0]["production"], "T → int");
        assert_eq!(json["rules"][4]["production"], "P' → P EOF");
    }

    #[test]
    fn test_tokens_report_keeps_one_line_per_token() {
        let result = analyze("put 1; /* a\nb");
        let report = tokens_report(&result.tokens);
        assert_eq!(report.lines().count(), result.significant_tokens().count());
        assert!(report.contains("<INVALID, /* a\\nb>\n"));
    }

    #[test]
    fn test_render_diagnostic() {
        let source = SourceFile::new("input/input.txt", "@ x = 1;");
        let result = analyze(source.content());
        let rendered = render_diagnostics(&source, &result.diagnostics);
        assert_eq!(
            rendered,
            "error[E1001]: invalid character '@'\n\
             \x20 --> input/input.txt:1:1\n\
             \x20   |\n\
             \x20 1 | @ x = 1;\n\
             \x20   | ^\n\
             \n\
             1 error(s), 0 warning(s)\n"
        );
    }

    #[test]
    fn test_render_help_lines() {
        let source = SourceFile::new("t.txt", "a / b;");
        let result = analyze(source.content());
        let rendered = render_diagnostics(&source, &result.diagnostics);
        assert!(rendered.contains("    = help: comments start with '//' or '/*'\n"));
    }

    #[test]
    fn test_render_clean_summary() {
        let source = SourceFile::new("t.txt", "put 1;");
        assert_eq!(render_diagnostics(&source, &[]), "0 error(s), 0 warning(s)\n");
    }

    #[test]
    fn test_write_all() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("output");
        let result = analyze("put 1;");

        let written = write_all(&out, &result).unwrap();
        assert_eq!(written.len(), 4);
        let rules = std::fs::read_to_string(out.join(RULES_FILE)).unwrap();
        assert!(rules.starts_with("A\n"));
        assert!(out.join(JSON_FILE).exists());
    }
}
