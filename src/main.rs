//! Waypoint - weighted graph toolkit
//!
//! Inspect, validate, traverse and search graphs stored in the
//! line-oriented text format, and generate lattice graphs to work on.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use waypoint_core::error::{ExitCode as WaypointExitCode, GraphError, Result};
use waypoint_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return reject_arguments(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("waypoint: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let outcome = commands::dispatch::run(&cli, start);
    finish(&cli, outcome)
}

/// Report an argument error before `Cli` exists.
///
/// Help and version output, and every error under human format, keep
/// clap's own rendering and exit status.
fn reject_arguments(err: clap::Error) -> ExitCode {
    let is_display = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if is_display || !json_requested(env::args()) {
        err.exit();
    }

    let error = argument_error(&err);
    eprintln!("{}", error.to_json());
    exit_status(error.exit_code())
}

/// Scan raw argv for `--format json`; the last occurrence wins.
fn json_requested<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut json = false;
    let mut args = args.into_iter().skip(1).take_while(|arg| arg != "--");
    while let Some(arg) = args.next() {
        match arg.strip_prefix("--format") {
            Some("") => json = args.next().is_some_and(|value| value == "json"),
            Some(inline) if inline.starts_with('=') => json = inline == "=json",
            _ => {}
        }
    }
    json
}

/// Convert a clap failure to the error type the JSON envelope reports.
fn argument_error(err: &clap::Error) -> GraphError {
    // Drop the usage and tip paragraphs that follow the first blank line
    let rendered = err.to_string();
    let summary = rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
        .trim_start_matches("error: ")
        .to_string();

    match err.kind() {
        ErrorKind::Io | ErrorKind::Format => GraphError::Other(summary),
        _ => GraphError::UsageError(summary),
    }
}

fn finish(cli: &Cli, outcome: Result<()>) -> ExitCode {
    let Err(e) = outcome else {
        return exit_status(WaypointExitCode::Success);
    };

    match cli.format {
        OutputFormat::Json => eprintln!("{}", e.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {}", e),
        OutputFormat::Human => {}
    }
    exit_status(e.exit_code())
}

fn exit_status(code: WaypointExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}
