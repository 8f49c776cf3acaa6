// crates/steam-compare-core/src/core/identifiers.rs
// ============================================================================
// Module: Steam Compare Identifiers
// Description: Opaque identifiers for users and games in library documents.
// Purpose: Keep user and game keys distinct at the type level.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Identifiers are copied verbatim from library documents. They are never
//! normalized; a missing tag yields an empty identifier, which is still a valid
//! key for caches and the ownership index.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// User identifier as reported by a library document (`steamID64`).
///
/// # Invariants
/// - Opaque UTF-8 string; may be empty when the document omits the tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new user identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Game identifier keyed by the document's `appID` tag.
///
/// # Invariants
/// - Opaque UTF-8 string; unique within one library record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Creates a new game identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
