// crates/steam-compare-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides the message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings behind stable message keys.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! Every user-facing string the CLI prints comes from a small keyed catalog.
//! All runtime output should be routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `user_id`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"error"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "steam-compare {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("config.load_failed", "Failed to load configuration: {error}"),
    ("source.init_failed", "Failed to initialize library source: {error}"),
    ("compare.fetch_failed", "Failed to fetch library for {user_id}: {error}"),
    ("compare.parse_failed", "Failed to parse library for {user_id}: {error}"),
    ("compare.lookup_failed", "Failed to render report: {error}"),
];

/// Returns the raw catalog entries in declaration order.
#[cfg(test)]
pub(crate) const fn catalog_entries() -> &'static [(&'static str, &'static str)] {
    CATALOG_EN
}

/// Returns the message catalog keyed by message id.
pub(crate) fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    CATALOG_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect())
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog().get(key).copied().unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a catalog message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
