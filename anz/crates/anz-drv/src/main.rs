//! analizador - lexical and syntactic analyzer for JS-PdL.
//!
//! Reads one source file, reports its diagnostics on stderr and writes the
//! token, rule and symbol reports.
//!
//! Exit status: 0 when the input is clean, 1 when analysis found errors,
//! 2 when the run itself failed.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use anz_drv::{report, AnalysisResult, Config, Session};

/// Lexical and syntactic analyzer for JS-PdL programs
#[derive(Parser, Debug)]
#[command(name = "analizador")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical and syntactic analyzer for JS-PdL programs", long_about = None)]
struct Cli {
    /// Source file to analyze (default: from config, else input/input.txt)
    input: Option<PathBuf>,

    /// Directory for the report files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, env = "ANALIZADOR_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "ANALIZADOR_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "ANALIZADOR_NO_COLOR")]
    no_color: bool,

    /// Do not write report files
    #[arg(long)]
    no_reports: bool,

    /// Print reports to stdout
    #[arg(long, value_enum)]
    emit: Vec<Emit>,

    /// Write the effective configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    write_config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    Tokens,
    Rules,
    Symbols,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // `verbose` may come from the config file
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(2);
        },
    };

    if let Err(e) = init_logging(cli.verbose || config.verbose, cli.no_color) {
        eprintln!("error: {:#}", e);
        return ExitCode::from(2);
    }

    match run(cli, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        },
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    config.context("failed to load configuration")
}

fn run(cli: Cli, mut config: Config) -> anyhow::Result<ExitCode> {
    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    config.verbose |= cli.verbose;
    if cli.no_reports {
        config.write_reports = false;
    }

    if let Some(path) = cli.write_config {
        config
            .save_to_path(&path)
            .with_context(|| format!("failed to write configuration to {}", path.display()))?;
        println!("{}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    debug!(?config, "effective configuration");

    let session = Session::new(config)?;
    debug!(input = %session.input_path().display(), "analyzing");
    let result = session.analyze();

    eprint!("{}", session.render_diagnostics(&result));
    emit_reports(&cli.emit, &result)?;
    session.write_reports(&result)?;

    if result.has_errors() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Print the requested report bodies to stdout.
fn emit_reports(emit: &[Emit], result: &AnalysisResult) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for kind in emit {
        let body = match kind {
            Emit::Tokens => report::tokens_report(&result.tokens),
            Emit::Rules => report::rules_report(&result.trace),
            Emit::Symbols => report::symbols_report(&result.symbols),
        };
        stdout
            .write_all(body.as_bytes())
            .context("failed to write to stdout")?;
    }
    Ok(())
}
