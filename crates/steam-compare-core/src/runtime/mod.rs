// crates/steam-compare-core/src/runtime/mod.rs
// ============================================================================
// Module: Steam Compare Runtime
// Description: Parsing, aggregation, ranking, and reporting stages.
// Purpose: Implement the single-pass comparison pipeline.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The pipeline runs fetch, parse, aggregate, filter, sort, then format.
//! Each stage returns an explicit `Result`; nothing is retried.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod caches;
pub mod comparator;
pub mod comparison;
pub mod document;
pub mod parser;
pub mod ranking;
pub mod report;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use caches::GameNameCache;
pub use caches::LookupError;
pub use caches::NameCaches;
pub use caches::UserNameCache;
pub use comparator::OwnershipIndex;
pub use comparator::compare;
pub use comparison::ComparisonError;
pub use comparison::LibraryComparison;
pub use comparison::fetch_document;
pub use document::XmlDocument;
pub use document::XmlNode;
pub use parser::ParseError;
pub use parser::parse_library;
pub use parser::read_library;
pub use ranking::RankedGame;
pub use ranking::rank;
pub use ranking::remove_single_owners;
pub use ranking::sort_by_owner_count_descending;
pub use report::format_report;
pub use report::render_name_list;
