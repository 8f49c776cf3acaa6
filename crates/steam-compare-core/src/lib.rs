// crates/steam-compare-core/src/lib.rs
// ============================================================================
// Module: Steam Compare Core Library
// Description: Public API surface for the Steam library comparison core.
// Purpose: Expose core types, collaborator interfaces, and pipeline stages.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Steam Compare reads the public game libraries of several users, finds the
//! games owned by more than one of them, and renders a ranked report. The
//! core is transport-agnostic: documents arrive through [`LibrarySource`] and
//! markup lookups go through [`TaggedNode`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::DEFAULT_MAX_DOCUMENT_BYTES;
pub use interfaces::FetchError;
pub use interfaces::LibrarySource;
pub use interfaces::TaggedNode;
pub use runtime::ComparisonError;
pub use runtime::GameNameCache;
pub use runtime::LibraryComparison;
pub use runtime::LookupError;
pub use runtime::NameCaches;
pub use runtime::OwnershipIndex;
pub use runtime::ParseError;
pub use runtime::RankedGame;
pub use runtime::UserNameCache;
pub use runtime::compare;
pub use runtime::fetch_document;
pub use runtime::format_report;
pub use runtime::parse_library;
pub use runtime::rank;
pub use runtime::remove_single_owners;
pub use runtime::render_name_list;
pub use runtime::sort_by_owner_count_descending;
