// crates/steam-compare-core/src/core/locator.rs
// ============================================================================
// Module: Steam Compare Locators
// Description: Resolution of raw user identifiers into library request targets.
// Purpose: Pick the numeric-profile or vanity-handle URL form for an identifier.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`resolve`] is pure and total: every string produces a [`Locator`]. Strings
//! made only of ASCII decimal digits address a numeric profile; everything
//! else, including the empty string, is treated as a vanity handle.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Locator Types
// ============================================================================

/// URL form selected for a user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocatorKind {
    /// Numeric 64-bit profile id (`/profiles/<id>/games/`).
    Profile,
    /// Custom vanity handle (`/id/<id>/games`).
    Vanity,
}

impl LocatorKind {
    /// Returns a stable label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Vanity => "vanity",
        }
    }
}

/// Resolved request target for one user's library document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    /// Selected URL form.
    pub kind: LocatorKind,
    /// Raw identifier as supplied by the caller.
    pub id: String,
}

impl Locator {
    /// Public community host used when no base URL is configured.
    pub const DEFAULT_BASE_URL: &'static str = "https://steamcommunity.com";

    /// Query string appended to every library document request.
    pub const QUERY: &'static str = "tab=all&xml=1";

    /// Returns the unescaped path segments below the base URL.
    ///
    /// The profile form ends with an empty segment, which renders as a
    /// trailing `/`.
    #[must_use]
    pub fn path_segments(&self) -> Vec<&str> {
        match self.kind {
            LocatorKind::Profile => vec!["profiles", self.id.as_str(), "games", ""],
            LocatorKind::Vanity => vec!["id", self.id.as_str(), "games"],
        }
    }

    /// Instantiates the library document URL against `base_url`.
    ///
    /// The id is inserted verbatim. Request URLs must percent-encode it; see
    /// `HttpLibrarySource::request_url` in `steam-compare-source`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        format!("{base}/{}?{}", self.path_segments().join("/"), Self::QUERY)
    }

    /// Instantiates the library document URL against the public host.
    #[must_use]
    pub fn default_url(&self) -> String {
        self.url(Self::DEFAULT_BASE_URL)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.id)
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Returns true when `user_id` is non-empty and made only of ASCII digits.
#[must_use]
pub fn is_numeric_id(user_id: &str) -> bool {
    !user_id.is_empty() && user_id.bytes().all(|byte| byte.is_ascii_digit())
}

/// Resolves a raw user identifier into a [`Locator`].
#[must_use]
pub fn resolve(user_id: &str) -> Locator {
    let kind = if is_numeric_id(user_id) { LocatorKind::Profile } else { LocatorKind::Vanity };
    Locator {
        kind,
        id: user_id.to_string(),
    }
}
