//! # matchjson-loader — Build-Pipeline Integration
//!
//! Wraps the shape matcher as a pass-through transform step: the document
//! being processed is compared against an etalon that lives in the same
//! directory, and is returned byte-for-byte when the shapes agree. Any
//! disagreement aborts the step with a single [`LoaderError`].
//!
//! ```text
//! i18n/
//!   base.json   <- etalon: {"title": "", "count": 0}
//!   de.json     <- checked with `?etalon=base`
//! ```
//!
//! ## Modules
//!
//! - [`config`] — [`MatchConfig`] and its sources (query string, file).
//! - [`etalon`] — etalon name normalization and location.
//! - [`store`] — [`ReferenceStore`] seam for reading etalons.
//! - [`loader`] — [`ShapeLoader`], the step itself.
//! - [`error`] — [`LoaderError`] and its [`ErrorKind`] categories.

pub mod config;
pub mod error;
pub mod etalon;
pub mod loader;
pub mod store;

use std::path::Path;

pub use config::MatchConfig;
pub use error::{ErrorKind, LoaderError, ERROR_TAG};
pub use etalon::{etalon_file_name, resolve_etalon_path};
pub use loader::{Outcome, ShapeLoader, Source};
pub use store::{FileSystem, MemoryStore, ReferenceStore};

/// Run the step once with a loader-style query string.
///
/// # Errors
///
/// Returns [`LoaderError`] for bad options or any failure of
/// [`ShapeLoader::process`].
pub fn match_json(query: &str, resource: &Path, source: Source) -> Result<Source, LoaderError> {
    let config = MatchConfig::from_query(query)?;
    ShapeLoader::new(config).process(resource, source)
}
