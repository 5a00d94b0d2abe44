//! # matchjson-cli — match-json Command-Line Interface
//!
//! ## Subcommands
//!
//! - `check` — run the etalon check on a file as a build step. The file is
//!   echoed to stdout unchanged when it matches.
//! - `diff` — compare two files directly and print the mismatch report.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the checks themselves; handlers
//!   delegate to `matchjson-loader` and `matchjson-shape`.
//! - stdout carries only command output. Logs go to stderr.

pub mod check;
pub mod diff;

use matchjson_loader::MatchConfig;

/// Configuration layer built from `--no-match-types` / `--no-excess-keys`.
///
/// Flags can only switch checks off, so an unset flag leaves the field
/// to lower layers.
pub fn flag_overrides(no_match_types: bool, no_excess_keys: bool) -> MatchConfig {
    MatchConfig {
        etalon: None,
        match_types: no_match_types.then_some(false),
        excess_keys: no_excess_keys.then_some(false),
    }
}
