//! # Shape Loader
//!
//! The transform step itself. Given the location and content of the
//! document being processed, it finds the etalon next to it, compares
//! shapes, and either hands the source back untouched or fails.
//!
//! A document configured as its own etalon is never compared: the loader
//! returns before reading or parsing anything.

use std::path::{Path, PathBuf};

use matchjson_core::Document;
use matchjson_shape::compare;
use serde_json::Value;

use crate::config::MatchConfig;
use crate::error::LoaderError;
use crate::etalon::resolve_etalon_path;
use crate::store::{FileSystem, ReferenceStore};

/// Content of the document being processed, as the pipeline hands it over.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Serialized JSON text. Parsed for comparison, returned as is.
    Text(String),
    /// A value the pipeline has already parsed.
    Json(Value),
}

impl Source {
    fn to_document(&self, path: &Path) -> Result<Document, LoaderError> {
        let parsed = match self {
            Self::Text(text) => Document::parse(text),
            Self::Json(value) => Document::from_value(value.clone()),
        };
        parsed.map_err(|e| LoaderError::InvalidJson {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// What a successful check did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The document matched the etalon at this location.
    Matched {
        /// Resolved etalon location.
        etalon: PathBuf,
    },
    /// The document is its own etalon and was not compared.
    SelfReference,
}

/// Shape-checking transform step.
#[derive(Debug, Clone)]
pub struct ShapeLoader<S = FileSystem> {
    config: MatchConfig,
    store: S,
}

impl ShapeLoader<FileSystem> {
    /// Loader reading etalons from the filesystem.
    pub fn new(config: MatchConfig) -> Self {
        Self::with_store(config, FileSystem)
    }
}

impl<S: ReferenceStore> ShapeLoader<S> {
    /// Loader reading etalons from `store`.
    pub fn with_store(config: MatchConfig, store: S) -> Self {
        Self { config, store }
    }

    /// Check `source`, located at `resource`, against its etalon.
    ///
    /// # Errors
    ///
    /// - [`LoaderError::MissingEtalon`], [`LoaderError::NotJsonEtalon`] for a
    ///   bad `etalon` option.
    /// - [`LoaderError::EtalonNotFound`], [`LoaderError::Read`] when the
    ///   etalon cannot be loaded.
    /// - [`LoaderError::InvalidJson`] when either document is not a JSON
    ///   object.
    /// - [`LoaderError::Mismatch`] when the shapes differ.
    pub fn check(&self, resource: &Path, source: &Source) -> Result<Outcome, LoaderError> {
        let file_name = self.config.etalon_file_name()?;
        let etalon = resolve_etalon_path(resource, &file_name);

        tracing::debug!(
            resource = %resource.display(),
            etalon = %etalon.display(),
            "resolved etalon"
        );

        if etalon == resource {
            tracing::debug!(resource = %resource.display(), "document is its own etalon; skipping");
            return Ok(Outcome::SelfReference);
        }

        let etalon_text = self.load_etalon(&etalon)?;
        let candidate = source.to_document(resource)?;
        let reference = Document::parse(&etalon_text).map_err(|e| LoaderError::InvalidJson {
            path: etalon.clone(),
            source: e,
        })?;

        let report = compare(&reference, &candidate, &self.config.options());
        if !report.is_match() {
            return Err(LoaderError::Mismatch {
                resource: resource.to_path_buf(),
                etalon,
                report,
            });
        }

        tracing::info!(
            resource = %resource.display(),
            etalon = %etalon.display(),
            "document matches etalon"
        );
        Ok(Outcome::Matched { etalon })
    }

    /// Run the step: check `source` and hand it back unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`check`](Self::check).
    pub fn process(&self, resource: &Path, source: Source) -> Result<Source, LoaderError> {
        self.check(resource, &source)?;
        Ok(source)
    }

    fn load_etalon(&self, path: &Path) -> Result<String, LoaderError> {
        if !self.store.exists(path) {
            return Err(LoaderError::EtalonNotFound {
                path: path.to_path_buf(),
            });
        }
        self.store.read_to_string(path).map_err(|e| LoaderError::Read {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
