// crates/steam-compare-core/src/core/mod.rs
// ============================================================================
// Module: Steam Compare Core Types
// Description: Identifiers, locators, and parsed library records.
// Purpose: Provide the data model shared by parsing, aggregation, and reporting.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types describe what a single run works with: the identifiers pulled
//! from library documents, the request targets derived from raw user input,
//! and the per-user library records produced by the parser.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod identifiers;
pub mod library;
pub mod locator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identifiers::GameId;
pub use identifiers::UserId;
pub use library::GameEntry;
pub use library::UserLibrary;
pub use locator::Locator;
pub use locator::LocatorKind;
pub use locator::is_numeric_id;
pub use locator::resolve;
