// crates/steam-compare-source/src/lib.rs
// ============================================================================
// Module: Steam Compare Sources
// Description: Library document sources for the comparison pipeline.
// Purpose: Resolve locators into raw library document text.
// Dependencies: steam-compare-core, reqwest, url
// ============================================================================

//! ## Overview
//! Ready-made [`LibrarySource`](steam_compare_core::LibrarySource) implementations:
//! - [`HttpLibrarySource`] fetches documents from the community site (or any
//!   configured base URL) with a blocking HTTP GET.
//! - [`FileLibrarySource`] reads `<id>.xml` documents from a local directory.
//!
//! Invariants:
//! - Documents are capped at a configured byte limit.
//! - Documents must be UTF-8.
//! - Failures are returned, never retried.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;

use steam_compare_core::FetchError;

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod file;
pub mod http;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use file::FileLibrarySource;
pub use http::HttpLibrarySource;
pub use http::HttpSourceOptions;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Reads at most `max_bytes` from `reader` and decodes the result as UTF-8.
///
/// # Errors
///
/// Returns [`FetchError::TooLarge`] past the limit, [`FetchError::Decode`] for
/// invalid UTF-8, and `map_io` for read failures.
pub(crate) fn read_document<R, F>(reader: R, max_bytes: usize, map_io: F) -> Result<String, FetchError>
where
    R: Read,
    F: Fn(std::io::Error) -> FetchError,
{
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::new();
    reader.take(limit).read_to_end(&mut bytes).map_err(map_io)?;
    enforce_max_bytes(bytes.len(), max_bytes)?;
    String::from_utf8(bytes).map_err(|err| FetchError::Decode(err.to_string()))
}

/// Returns an error when a document exceeds the configured size cap.
pub(crate) const fn enforce_max_bytes(actual_bytes: usize, max_bytes: usize) -> Result<(), FetchError> {
    if actual_bytes > max_bytes {
        return Err(FetchError::TooLarge {
            max_bytes,
            actual_bytes,
        });
    }
    Ok(())
}
