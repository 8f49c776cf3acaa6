// crates/steam-compare-cli/src/main.rs
// ============================================================================
// Module: Steam Compare CLI Entry Point
// Description: Compares game libraries across users and prints shared games.
// Purpose: Provide a localized CLI over the comparison pipeline.
// Dependencies: clap, steam-compare-config, steam-compare-core, steam-compare-source, thiserror.
// ============================================================================

//! ## Overview
//! `steam-compare` takes one or more user identifiers, fetches each user's
//! public library sequentially, and prints every game owned by at least two of
//! them, most-owned first. All user-facing strings are routed through the i18n
//! catalog. Any failure prints one diagnostic line and exits non-zero.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Parser;
use steam_compare_cli::log::JsonLineSink;
use steam_compare_cli::log::NoopRunLogSink;
use steam_compare_cli::log::RunLogSink;
use steam_compare_cli::runner::compare_users;
use steam_compare_cli::t;
use steam_compare_config::SourceConfig;
use steam_compare_config::SteamCompareConfig;
use steam_compare_core::ComparisonError;
use steam_compare_core::LibrarySource;
use steam_compare_source::FileLibrarySource;
use steam_compare_source::HttpLibrarySource;
use steam_compare_source::HttpSourceOptions;
use steam_compare_source::http::DEFAULT_USER_AGENT;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "steam-compare", disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,
    /// Config file path (overrides `STEAM_COMPARE_CONFIG`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Read saved `<id>.xml` documents from this directory instead of HTTP.
    #[arg(long, value_name = "DIR")]
    offline_dir: Option<PathBuf>,
    /// Emit the JSON-line run log on stderr.
    #[arg(long, action = ArgAction::SetTrue)]
    log_json: bool,
    /// Numeric 64-bit ids or vanity handles, in comparison order.
    #[arg(value_name = "USER_ID", required_unless_present = "show_version", num_args = 1..)]
    user_ids: Vec<String>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes one comparison run.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = SteamCompareConfig::load(cli.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let offline_dir = cli.offline_dir.or_else(|| config.source.offline_dir.clone());
    let source = build_source(&config.source, offline_dir)?;
    let log: Box<dyn RunLogSink> = if cli.log_json || config.output.log_json {
        Box::new(JsonLineSink::new(std::io::stderr()))
    } else {
        Box::new(NoopRunLogSink)
    };

    let report = compare_users(source.as_ref(), &cli.user_ids, &log).map_err(comparison_error)?;
    write_stdout_line(&report).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Source Selection
// ============================================================================

/// Builds the offline source when a directory is set, else the HTTP source.
fn build_source(config: &SourceConfig, offline_dir: Option<PathBuf>) -> CliResult<Box<dyn LibrarySource>> {
    if let Some(dir) = offline_dir {
        let source = FileLibrarySource::new(dir).with_max_document_bytes(config.max_document_bytes);
        return Ok(Box::new(source));
    }
    let options = HttpSourceOptions {
        base_url: config.base_url.clone(),
        timeout: config.timeout(),
        user_agent: config.user_agent.clone().unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        max_document_bytes: config.max_document_bytes,
    };
    let source = HttpLibrarySource::with_options(options)
        .map_err(|err| CliError::new(t!("source.init_failed", error = err)))?;
    Ok(Box::new(source))
}

/// Maps a comparison failure to a localized CLI error.
fn comparison_error(err: ComparisonError) -> CliError {
    let message = match err {
        ComparisonError::Fetch {
            user_id,
            source,
        } => t!("compare.fetch_failed", user_id = user_id, error = source),
        ComparisonError::Parse {
            user_id,
            source,
        } => t!("compare.parse_failed", user_id = user_id, error = source),
        ComparisonError::Lookup(source) => t!("compare.lookup_failed", error = source),
    };
    CliError::new(message)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
