//! anz-drv - Analyzer driver
//!
//! Runs the lexer and parser over one source text and turns the outcome
//! into reports. [`analyze`] is the pure entry point; [`Session`] adds the
//! file input, configuration and report output around it.

pub mod config;
pub mod error;
pub mod report;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use anz_lex::{tokenize_with_limits, Limits, SymbolTable, Token};
use anz_par::{ParseTrace, Parser};
use anz_util::{Diagnostic, Handler, SourceFile};

pub use config::{Config, LimitsConfig};
pub use error::{AnalyzerError, Result};

/// Everything one analysis run produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Every token in source order, trivia included, ending with EndOfInput
    pub tokens: Vec<Token>,
    /// Lexical and syntax diagnostics, ordered by source position
    pub diagnostics: Vec<Diagnostic>,
    pub symbols: SymbolTable,
    pub trace: ParseTrace,
}

impl AnalysisResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }

    /// Tokens the parser sees: no whitespace or comments.
    pub fn significant_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_trivia())
    }
}

/// Analyze `source` with the default literal limits.
///
/// # Example
///
/// ```
/// let result = anz_drv::analyze("let x int = 1;\nput x;");
/// assert!(!result.has_errors());
/// assert_eq!(result.symbols.get("x").map(|e| e.occurrences), Some(2));
/// assert!(result.trace.accepted);
/// ```
pub fn analyze(source: &str) -> AnalysisResult {
    analyze_with_limits(source, Limits::default())
}

/// Analyze `source`: lex it fully, then parse the significant tokens.
///
/// Never fails; every fault becomes a diagnostic.
pub fn analyze_with_limits(source: &str, limits: Limits) -> AnalysisResult {
    let mut handler = Handler::new();
    let (tokens, symbols) = tokenize_with_limits(source, &mut handler, limits);
    let trace = Parser::new(&tokens, &mut handler).parse();

    let mut diagnostics = handler.into_diagnostics();
    // stable: ties keep emission order
    diagnostics.sort_by_key(|d| d.span.start);

    AnalysisResult {
        tokens,
        diagnostics,
        symbols,
        trace,
    }
}

/// One analyzer run over one input file.
pub struct Session {
    pub config: Config,
    pub source: SourceFile,
}

impl Session {
    /// Read the configured input file.
    pub fn new(config: Config) -> Result<Self> {
        let path = config.input.clone();
        let content = std::fs::read_to_string(&path).map_err(|source| AnalyzerError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read input");

        Ok(Self::from_source(config, path.display().to_string(), content))
    }

    /// Build a session over text that is already in memory.
    pub fn from_source(config: Config, name: impl Into<String>, content: impl Into<String>) -> Self {
        let content: String = content.into();
        Self {
            config,
            source: SourceFile::new(name, content),
        }
    }

    pub fn analyze(&self) -> AnalysisResult {
        let result = analyze_with_limits(self.source.content(), self.config.lexer_limits());
        debug!(
            tokens = result.tokens.len(),
            diagnostics = result.diagnostics.len(),
            rules = result.trace.len(),
            accepted = result.trace.accepted,
            "analysis finished"
        );
        result
    }

    /// Write the report files into the configured output directory.
    ///
    /// Returns the paths written, or nothing when reports are disabled.
    pub fn write_reports(&self, result: &AnalysisResult) -> Result<Vec<PathBuf>> {
        if !self.config.write_reports {
            debug!("report writing disabled");
            return Ok(Vec::new());
        }
        let written = report::write_all(&self.config.output_dir, result)?;
        for path in &written {
            debug!(path = %path.display(), "wrote report");
        }
        info!(
            dir = %self.config.output_dir.display(),
            files = written.len(),
            "reports written"
        );
        Ok(written)
    }

    /// Diagnostics with source snippets, plus the summary line.
    pub fn render_diagnostics(&self, result: &AnalysisResult) -> String {
        report::render_diagnostics(&self.source, &result.diagnostics)
    }

    pub fn input_path(&self) -> &Path {
        &self.config.input
    }
}
