// crates/steam-compare-core/src/runtime/comparison.rs
// ============================================================================
// Module: Steam Compare Run Orchestrator
// Description: Owns per-run state and sequences fetch, parse, and report stages.
// Purpose: Replace process-wide caches with explicit state scoped to one run.
// Dependencies: crate::{core, interfaces, runtime}, thiserror
// ============================================================================

//! ## Overview
//! [`LibraryComparison`] is created fresh for every run. Users are processed
//! strictly one at a time: resolve, fetch, parse, register names. The first
//! failure aborts the run; there is no partial-result mode.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Locator;
use crate::core::UserLibrary;
use crate::core::resolve;
use crate::interfaces::FetchError;
use crate::interfaces::LibrarySource;
use crate::runtime::caches::LookupError;
use crate::runtime::caches::NameCaches;
use crate::runtime::comparator::OwnershipIndex;
use crate::runtime::comparator::compare;
use crate::runtime::parser::ParseError;
use crate::runtime::parser::parse_library;
use crate::runtime::ranking::RankedGame;
use crate::runtime::ranking::rank;
use crate::runtime::report::format_report;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Fatal failures for a comparison run.
#[derive(Debug, Error)]
pub enum ComparisonError {
    /// Library document could not be retrieved.
    #[error("failed to fetch library for {user_id}: {source}")]
    Fetch {
        /// Raw identifier supplied for the user.
        user_id: String,
        /// Underlying source error.
        source: FetchError,
    },
    /// Library document could not be parsed.
    #[error("failed to parse library for {user_id}: {source}")]
    Parse {
        /// Raw identifier supplied for the user.
        user_id: String,
        /// Underlying parser error.
        source: ParseError,
    },
    /// A display name was missing while rendering the report.
    #[error("report lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

// ============================================================================
// SECTION: Comparison
// ============================================================================

/// Per-run comparison state: parsed libraries plus name caches.
///
/// # Invariants
/// - Every library in `libraries` has been registered in `caches`.
/// - `libraries` preserves the order users were supplied.
#[derive(Debug, Clone, Default)]
pub struct LibraryComparison {
    /// Name caches populated as libraries are added.
    caches: NameCaches,
    /// Parsed libraries in input order.
    libraries: Vec<UserLibrary>,
}

impl LibraryComparison {
    /// Creates an empty comparison with fresh caches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves, fetches, and parses one user's library.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::Fetch`] or [`ComparisonError::Parse`] tagged
    /// with `user_id`.
    pub fn fetch_user<S>(&mut self, source: &S, user_id: &str) -> Result<&UserLibrary, ComparisonError>
    where
        S: LibrarySource + ?Sized,
    {
        let raw = fetch_document(source, user_id, &resolve(user_id))?;
        self.ingest_user_document(user_id, &raw)
    }

    /// Parses a document fetched for `user_id` and adds the resulting library.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::Parse`] tagged with `user_id`.
    pub fn ingest_user_document(&mut self, user_id: &str, raw: &str) -> Result<&UserLibrary, ComparisonError> {
        self.ingest_document(raw).map_err(|source| ComparisonError::Parse {
            user_id: user_id.to_string(),
            source,
        })
    }

    /// Parses a raw document and adds the resulting library.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the document cannot be parsed.
    pub fn ingest_document(&mut self, raw: &str) -> Result<&UserLibrary, ParseError> {
        let library = parse_library(raw)?;
        Ok(self.add_library(library))
    }

    /// Registers names from `library` and appends it to the run.
    pub fn add_library(&mut self, library: UserLibrary) -> &UserLibrary {
        self.caches.register(&library);
        let index = self.libraries.len();
        self.libraries.push(library);
        &self.libraries[index]
    }

    /// Returns the libraries added so far, in input order.
    #[must_use]
    pub fn libraries(&self) -> &[UserLibrary] {
        &self.libraries
    }

    /// Returns the run's name caches.
    #[must_use]
    pub const fn caches(&self) -> &NameCaches {
        &self.caches
    }

    /// Builds the ownership index over every added library.
    #[must_use]
    pub fn ownership_index(&self) -> OwnershipIndex {
        compare(&self.libraries)
    }

    /// Returns shared games, most-owned first.
    #[must_use]
    pub fn ranked(&self) -> Vec<RankedGame> {
        rank(self.ownership_index())
    }

    /// Renders the final report.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when a ranked id has no cached name.
    pub fn report(&self) -> Result<String, LookupError> {
        format_report(&self.ranked(), &self.caches)
    }
}

// ============================================================================
// SECTION: Fetching
// ============================================================================

/// Fetches the raw document for `locator`, tagging failures with `user_id`.
///
/// # Errors
///
/// Returns [`ComparisonError::Fetch`] when the source fails.
pub fn fetch_document<S>(source: &S, user_id: &str, locator: &Locator) -> Result<String, ComparisonError>
where
    S: LibrarySource + ?Sized,
{
    source.fetch(locator).map_err(|source| ComparisonError::Fetch {
        user_id: user_id.to_string(),
        source,
    })
}
