// crates/steam-compare-cli/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Exercises the translation catalog and placeholder substitution.
// Purpose: Ensure CLI user-facing strings route through stable i18n helpers.
// Dependencies: steam-compare-cli i18n module and the `t!` macro.
// ============================================================================

//! ## Overview
//! Validates the steam-compare CLI i18n catalog behavior:
//! - Message arguments capture key/value substitutions.
//! - Translation falls back to keys on misses.
//! - The [`t!`](steam_compare_cli::t) macro formats placeholders correctly.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use steam_compare_cli::i18n::MessageArg;
use steam_compare_cli::i18n::translate;
use steam_compare_cli::t;

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Confirms message arguments capture key/value pairs.
#[test]
fn message_arg_new_captures_key_and_value() {
    let arg = MessageArg::new("user_id", "EpicWolverine");
    assert_eq!(arg.key, "user_id");
    assert_eq!(arg.value, "EpicWolverine");
}

/// Confirms catalog entries resolve and replace placeholders.
#[test]
fn translate_substitutes_placeholders() {
    let args = vec![MessageArg::new("user_id", "bob"), MessageArg::new("error", "document not found: bob")];
    let result = translate("compare.fetch_failed", args);
    assert_eq!(result, "Failed to fetch library for bob: document not found: bob");
}

/// Confirms missing keys fall back to the key string.
#[test]
fn translate_falls_back_to_key() {
    let result = translate("missing.key", Vec::new());
    assert_eq!(result, "missing.key");
}

/// Confirms the t! macro formats named arguments.
#[test]
fn t_macro_formats_message() {
    let rendered = t!("main.version", version = "0.1.0");
    assert_eq!(rendered, "steam-compare 0.1.0");
}
