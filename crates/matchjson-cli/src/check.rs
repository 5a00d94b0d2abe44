//! # Check Subcommand
//!
//! Runs the etalon check on one file the way a build pipeline would: the
//! file's text is written to stdout untouched on success, and the command
//! fails on any loader error.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use matchjson_loader::{MatchConfig, ShapeLoader, Source};

use crate::flag_overrides;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Document to check.
    pub resource: PathBuf,

    /// Etalon file name, resolved in the resource's directory.
    #[arg(long)]
    pub etalon: Option<String>,

    /// Loader query string, e.g. `?etalon=base&matchTypes=false`.
    #[arg(long)]
    pub query: Option<String>,

    /// Only check key presence.
    #[arg(long)]
    pub no_match_types: bool,

    /// Allow keys the etalon does not have.
    #[arg(long)]
    pub no_excess_keys: bool,
}

impl CheckArgs {
    /// Layer query and flags over `base`.
    pub fn config(&self, base: MatchConfig) -> anyhow::Result<MatchConfig> {
        let query = match &self.query {
            Some(q) => MatchConfig::from_query(q)?,
            None => MatchConfig::default(),
        };
        let flags = MatchConfig {
            etalon: self.etalon.clone(),
            ..flag_overrides(self.no_match_types, self.no_excess_keys)
        };
        Ok(base.merge(query).merge(flags))
    }
}

/// Check `resource` and return its text unchanged.
pub fn check_file(resource: &Path, config: MatchConfig) -> anyhow::Result<String> {
    let text = std::fs::read_to_string(resource)
        .with_context(|| format!("cannot read {}", resource.display()))?;

    match ShapeLoader::new(config).process(resource, Source::Text(text))? {
        Source::Text(text) => Ok(text),
        Source::Json(value) => Ok(value.to_string()),
    }
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, base: MatchConfig) -> anyhow::Result<u8> {
    let config = args.config(base)?;
    tracing::debug!(?config, resource = %args.resource.display(), "running check");

    let text = check_file(&args.resource, config)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("cannot write to stdout")?;
    stdout.flush().context("cannot flush stdout")?;

    Ok(0)
}
