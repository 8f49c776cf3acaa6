// crates/steam-compare-config/src/lib.rs
// ============================================================================
// Module: Steam Compare Config Library
// Description: Configuration model and validation for the comparison tool.
// Purpose: Single source of truth for steam-compare.toml semantics.
// Dependencies: steam-compare-core, serde, toml
// ============================================================================

//! ## Overview
//! `steam-compare-config` defines the TOML configuration read by the
//! `steam-compare` binary. Every value has a default, so an empty file (or no
//! file at all) yields a usable configuration. Loading fails closed on
//! oversized, non-UTF-8, malformed, or out-of-range input.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
