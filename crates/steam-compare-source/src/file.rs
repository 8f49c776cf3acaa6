// crates/steam-compare-source/src/file.rs
// ============================================================================
// Module: Steam Compare File Source
// Description: Directory-backed library source for offline comparisons.
// Purpose: Read `<id>.xml` library documents from a local directory.
// Dependencies: steam-compare-core, std
// ============================================================================

//! ## Overview
//! [`FileLibrarySource`] maps a locator's raw id to `<root>/<id>.xml`. The
//! locator kind is ignored: a saved document is found by id alone.
//! Ids that could escape the root (separators, `..`, empty) fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use steam_compare_core::DEFAULT_MAX_DOCUMENT_BYTES;
use steam_compare_core::FetchError;
use steam_compare_core::LibrarySource;
use steam_compare_core::Locator;

use crate::read_document;

// ============================================================================
// SECTION: File Source
// ============================================================================

/// Directory-backed library source.
#[derive(Debug, Clone)]
pub struct FileLibrarySource {
    /// Directory holding saved documents.
    root: PathBuf,
    /// Maximum accepted document size in bytes.
    max_document_bytes: usize,
}

impl FileLibrarySource {
    /// Creates a source reading documents from `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }

    /// Overrides the maximum document size.
    #[must_use]
    pub const fn with_max_document_bytes(mut self, max_document_bytes: usize) -> Self {
        self.max_document_bytes = max_document_bytes;
        self
    }

    /// Returns the configured root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the document path for `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidLocator`] when the id is not a plain file stem.
    pub fn document_path(&self, locator: &Locator) -> Result<PathBuf, FetchError> {
        let id = locator.id.as_str();
        if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
            return Err(FetchError::InvalidLocator(format!("unsafe document id: '{id}'")));
        }
        Ok(self.root.join(format!("{id}.xml")))
    }
}

impl LibrarySource for FileLibrarySource {
    fn fetch(&self, locator: &Locator) -> Result<String, FetchError> {
        let path = self.document_path(locator)?;
        let file = File::open(&path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                FetchError::NotFound(path.display().to_string())
            } else {
                FetchError::Io(err.to_string())
            }
        })?;
        read_document(file, self.max_document_bytes, |err| FetchError::Io(err.to_string()))
    }
}
