// crates/steam-compare-core/tests/locator.rs
// ============================================================================
// Module: Locator Resolution Tests
// Description: Unit and property tests for identifier-to-URL resolution.
// Purpose: Ensure numeric ids and vanity handles select the right URL form.
// ============================================================================

//! Locator resolution tests.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use steam_compare_core::LocatorKind;
use steam_compare_core::is_numeric_id;
use steam_compare_core::resolve;

// ============================================================================
// SECTION: Examples
// ============================================================================

#[test]
fn numeric_id_uses_profile_url() {
    let locator = resolve("76561198083108093");
    assert_eq!(locator.kind, LocatorKind::Profile);
    assert_eq!(
        locator.default_url(),
        "https://steamcommunity.com/profiles/76561198083108093/games/?tab=all&xml=1"
    );
}

#[test]
fn handle_uses_vanity_url() {
    let locator = resolve("EpicWolverine");
    assert_eq!(locator.kind, LocatorKind::Vanity);
    assert_eq!(locator.default_url(), "https://steamcommunity.com/id/EpicWolverine/games?tab=all&xml=1");
}

#[test]
fn empty_and_mixed_ids_are_vanity() {
    assert_eq!(resolve("").kind, LocatorKind::Vanity);
    assert_eq!(resolve("123abc").kind, LocatorKind::Vanity);
    assert_eq!(resolve(" 123").kind, LocatorKind::Vanity);
    assert_eq!(resolve("-1").kind, LocatorKind::Vanity);
}

#[test]
fn custom_base_url_drops_trailing_slash() {
    let locator = resolve("42");
    assert_eq!(locator.url("http://127.0.0.1:9000/"), "http://127.0.0.1:9000/profiles/42/games/?tab=all&xml=1");
}

#[test]
fn path_segments_keep_id_as_one_segment() {
    assert_eq!(resolve("42").path_segments(), ["profiles", "42", "games", ""]);
    assert_eq!(resolve("foo#bar").path_segments(), ["id", "foo#bar", "games"]);
}

#[test]
fn display_includes_kind_and_id() {
    assert_eq!(resolve("gaben").to_string(), "vanity:gaben");
    assert_eq!(resolve("7").to_string(), "profile:7");
}

// ============================================================================
// SECTION: Properties
// ============================================================================

proptest! {
    #[test]
    fn digit_strings_resolve_to_profile(id in "[0-9]{1,20}") {
        let locator = resolve(&id);
        prop_assert_eq!(locator.kind, LocatorKind::Profile);
        let expected = format!("/profiles/{id}/games/");
        prop_assert!(locator.default_url().contains(&expected));
    }

    #[test]
    fn non_digit_strings_resolve_to_vanity(id in "[0-9]{0,5}[A-Za-z_-][A-Za-z0-9_-]{0,10}") {
        prop_assert!(!is_numeric_id(&id));
        let locator = resolve(&id);
        prop_assert_eq!(locator.kind, LocatorKind::Vanity);
        let expected = format!("/id/{id}/games?");
        prop_assert!(locator.default_url().contains(&expected));
    }
}
