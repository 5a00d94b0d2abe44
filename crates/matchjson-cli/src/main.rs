//! # match-json CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use matchjson_loader::MatchConfig;
use tracing_subscriber::EnvFilter;

use matchjson_cli::check::{run_check, CheckArgs};
use matchjson_cli::diff::{run_diff, DiffArgs};

/// match-json — check JSON documents against an etalon's shape.
///
/// Verifies that a document has every top-level key of its etalon, with
/// the same coarse value types, and optionally no keys the etalon lacks.
#[derive(Parser, Debug)]
#[command(name = "match-json", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Options file (YAML or JSON) with `etalon`, `matchTypes`, `excessKeys`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a document against its etalon and echo it unchanged on success.
    Check(CheckArgs),

    /// Compare two documents and print the mismatch report.
    Diff(DiffArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = load_base_config(cli.config.as_deref()).and_then(|base| match &cli.command {
        Commands::Check(args) => run_check(args, base),
        Commands::Diff(args) => run_diff(args, base),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Options from `--config`, or an empty layer when none is given.
fn load_base_config(path: Option<&std::path::Path>) -> anyhow::Result<MatchConfig> {
    match path {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading options file");
            Ok(MatchConfig::from_file(path)?)
        }
        None => Ok(MatchConfig::default()),
    }
}
