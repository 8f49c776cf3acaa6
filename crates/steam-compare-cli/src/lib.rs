// crates/steam-compare-cli/src/lib.rs
// ============================================================================
// Module: Steam Compare CLI Library
// Description: Shared helpers for the steam-compare command-line interface.
// Purpose: Provide reusable components (i18n, run log, runner) for the binary and tests.
// Dependencies: steam-compare-core, serde, serde_json
// ============================================================================

//! ## Overview
//! This library houses the CLI's message catalog, the JSON-line run log, and
//! the sequential comparison runner. The binary entry point (`src/main.rs`)
//! only parses arguments, selects a source, and writes output.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;
/// Structured JSON-line run log.
pub mod log;
/// Sequential comparison runner.
pub mod runner;
