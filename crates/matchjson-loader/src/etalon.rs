//! # Etalon Resolution
//!
//! Turns the `etalon` option into a file name and locates it next to the
//! document being processed.

use std::path::{Component, Path, PathBuf};

use crate::error::LoaderError;

/// Extension every etalon must carry.
pub const ETALON_EXTENSION: &str = ".json";

/// Normalize the `etalon` option into a file name.
///
/// A name without any `.` gets `.json` appended. Otherwise everything from
/// the first `.` onward must be exactly `.json`, so `base.v2.json` is
/// rejected along with `base.yaml`.
///
/// # Errors
///
/// Returns [`LoaderError::MissingEtalon`] for a missing or empty option and
/// [`LoaderError::NotJsonEtalon`] for any other extension.
pub fn etalon_file_name(etalon: Option<&str>) -> Result<String, LoaderError> {
    let etalon = match etalon {
        Some(name) if !name.is_empty() => name,
        _ => return Err(LoaderError::MissingEtalon),
    };

    match etalon.find('.') {
        None => Ok(format!("{etalon}{ETALON_EXTENSION}")),
        Some(idx) if &etalon[idx..] == ETALON_EXTENSION => Ok(etalon.to_string()),
        Some(_) => Err(LoaderError::NotJsonEtalon {
            etalon: etalon.to_string(),
        }),
    }
}

/// Location of the etalon named `file_name` in the directory of `resource`.
///
/// Root and drive prefixes of `file_name` are dropped, so `/etc/base.json`
/// resolves to `<dir>/etc/base.json` and never leaves the resource's directory.
pub fn resolve_etalon_path(resource: &Path, file_name: &str) -> PathBuf {
    let relative: PathBuf = Path::new(file_name)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();

    match resource.parent() {
        Some(dir) => dir.join(relative),
        None => relative,
    }
}
