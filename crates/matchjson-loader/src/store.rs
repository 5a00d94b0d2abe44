//! # Reference Store
//!
//! Where etalons are read from. [`FileSystem`] is the default; pipelines
//! that keep sources in memory can supply [`MemoryStore`] or their own
//! [`ReferenceStore`].

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only access to etalon documents.
pub trait ReferenceStore {
    /// Whether a document exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the full text of the document at `path`.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

impl<S: ReferenceStore + ?Sized> ReferenceStore for &S {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}

/// Store backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl ReferenceStore for FileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Store holding documents in memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<PathBuf, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the document at `path`.
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.documents.insert(path.into(), text.into());
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl ReferenceStore for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.documents.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.documents.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no document at {}", path.display()),
            )
        })
    }
}
