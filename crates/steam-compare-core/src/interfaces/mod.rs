// crates/steam-compare-core/src/interfaces/mod.rs
// ============================================================================
// Module: Steam Compare Interfaces
// Description: Collaborator contracts for document retrieval and tree lookup.
// Purpose: Keep transport and markup-parser details out of the core pipeline.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Two capabilities are consumed by the pipeline but not implemented by it:
//! - [`LibrarySource`] turns a [`Locator`] into raw document text.
//! - [`TaggedNode`] answers "first descendant with tag T" questions over a
//!   parsed document without exposing the parser's own node types.
//!
//! Any failure from a source is fatal for the run; sources never retry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Locator;

// ============================================================================
// SECTION: Library Source
// ============================================================================

/// Default maximum library document size in bytes, shared by every source.
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 16 * 1024 * 1024;

/// Errors emitted by library sources.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),
    /// Remote answered with a non-success status.
    #[error("http status {status} for {url}")]
    Status {
        /// HTTP status code returned by the server.
        status: u16,
        /// Requested URL.
        url: String,
    },
    /// Document bytes were not valid UTF-8.
    #[error("document is not valid utf-8: {0}")]
    Decode(String),
    /// Document exceeded the configured byte limit.
    #[error("document exceeds size limit: {actual_bytes} bytes (max {max_bytes})")]
    TooLarge {
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Observed document size in bytes.
        actual_bytes: usize,
    },
    /// Document does not exist at the resolved location.
    #[error("document not found: {0}")]
    NotFound(String),
    /// Local I/O failure.
    #[error("io failure: {0}")]
    Io(String),
    /// Locator cannot be mapped onto this source (bad URL or unsafe path).
    #[error("invalid locator: {0}")]
    InvalidLocator(String),
}

/// Retrieves raw library document text for a locator.
pub trait LibrarySource {
    /// Fetches the library document addressed by `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the document cannot be retrieved or decoded.
    fn fetch(&self, locator: &Locator) -> Result<String, FetchError>;
}

impl<S: LibrarySource + ?Sized> LibrarySource for &S {
    fn fetch(&self, locator: &Locator) -> Result<String, FetchError> {
        (**self).fetch(locator)
    }
}

impl<S: LibrarySource + ?Sized> LibrarySource for Box<S> {
    fn fetch(&self, locator: &Locator) -> Result<String, FetchError> {
        (**self).fetch(locator)
    }
}

// ============================================================================
// SECTION: Tagged Document
// ============================================================================

/// Minimal lookup capability over a tree of tagged elements.
///
/// # Invariants
/// - Lookups search strict descendants (never the node itself) in document order.
/// - Text is the node's first child text, with CDATA sections included.
pub trait TaggedNode: Sized {
    /// Returns the first descendant element named `tag`.
    fn descendant(&self, tag: &str) -> Option<Self>;

    /// Returns every descendant element named `tag`, in document order.
    fn descendants_named(&self, tag: &str) -> Vec<Self>;

    /// Returns the element's leading text content.
    fn text(&self) -> Option<String>;

    /// Returns the tag name of this element.
    fn tag_name(&self) -> &str;

    /// Returns the text of the first descendant named `tag`, if any.
    fn first_text(&self, tag: &str) -> Option<String> {
        self.descendant(tag).and_then(|node| node.text())
    }
}
