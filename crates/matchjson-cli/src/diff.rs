//! # Diff Subcommand
//!
//! Compares two JSON files directly, without etalon resolution, and prints
//! the mismatch report. Exits 0 on match and 1 otherwise.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use matchjson_core::Document;
use matchjson_loader::MatchConfig;
use matchjson_shape::{compare, MatchOptions, MismatchReport};

use crate::flag_overrides;

/// Report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable blocks.
    Text,
    /// The report as a JSON object.
    Json,
}

/// Arguments for the diff subcommand.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Reference document.
    pub reference: PathBuf,

    /// Candidate document.
    pub candidate: PathBuf,

    /// Only check key presence.
    #[arg(long)]
    pub no_match_types: bool,

    /// Allow keys the reference does not have.
    #[arg(long)]
    pub no_excess_keys: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Read and parse one document.
fn load_document(path: &Path) -> anyhow::Result<Document> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    Document::parse(&text).with_context(|| format!("invalid document {}", path.display()))
}

/// Compare two documents on disk.
pub fn diff_files(
    reference: &Path,
    candidate: &Path,
    options: &MatchOptions,
) -> anyhow::Result<MismatchReport> {
    let reference = load_document(reference)?;
    let candidate = load_document(candidate)?;
    Ok(compare(&reference, &candidate, options))
}

/// Render a report for printing.
pub fn render(report: &MismatchReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text if report.is_match() => Ok("match".to_string()),
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("cannot serialize report")
        }
    }
}

/// Execute the diff subcommand.
pub fn run_diff(args: &DiffArgs, base: MatchConfig) -> anyhow::Result<u8> {
    let options = base
        .merge(flag_overrides(args.no_match_types, args.no_excess_keys))
        .options();

    let report = diff_files(&args.reference, &args.candidate, &options)?;
    println!("{}", render(&report, args.format)?);

    if report.is_match() {
        Ok(0)
    } else {
        tracing::info!(entries = report.len(), "documents differ");
        Ok(1)
    }
}
