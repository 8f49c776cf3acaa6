// crates/steam-compare-cli/src/runner.rs
// ============================================================================
// Module: Steam Compare Runner
// Description: Drives one comparison run over a library source.
// Purpose: Sequence resolve, fetch, parse, and report with run log events.
// Dependencies: steam-compare-core, crate::log
// ============================================================================

//! ## Overview
//! [`compare_users`] processes user ids strictly in input order. Each user is
//! resolved, fetched, and parsed before the next begins; the first failure
//! aborts the run and is logged as `run.failed`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use steam_compare_core::ComparisonError;
use steam_compare_core::LibraryComparison;
use steam_compare_core::LibrarySource;
use steam_compare_core::fetch_document;
use steam_compare_core::format_report;
use steam_compare_core::resolve;

use crate::log::RunEvent;
use crate::log::RunLogSink;

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Compares the libraries of `user_ids` and returns the rendered report.
///
/// # Errors
///
/// Returns [`ComparisonError`] for the first fetch, parse, or lookup failure.
pub fn compare_users<S, L>(source: &S, user_ids: &[String], log: &L) -> Result<String, ComparisonError>
where
    S: LibrarySource + ?Sized,
    L: RunLogSink + ?Sized,
{
    let result = run_stages(source, user_ids, log);
    if let Err(err) = &result {
        log.record(&RunEvent::RunFailed {
            error: err.to_string(),
        });
    }
    result
}

/// Runs every stage, logging progress as it goes.
fn run_stages<S, L>(source: &S, user_ids: &[String], log: &L) -> Result<String, ComparisonError>
where
    S: LibrarySource + ?Sized,
    L: RunLogSink + ?Sized,
{
    let mut comparison = LibraryComparison::new();
    for user_id in user_ids {
        let locator = resolve(user_id);
        log.record(&RunEvent::FetchStart {
            user_id: user_id.clone(),
            locator: locator.to_string(),
        });
        let raw = fetch_document(source, user_id, &locator)?;
        log.record(&RunEvent::FetchOk {
            user_id: user_id.clone(),
            bytes: raw.len(),
        });
        let library = comparison.ingest_user_document(user_id, &raw)?;
        log.record(&RunEvent::ParseOk {
            user_id: user_id.clone(),
            steam_id: library.user_id().to_string(),
            games: library.game_count(),
        });
    }
    let ranked = comparison.ranked();
    let report = format_report(&ranked, comparison.caches())?;
    log.record(&RunEvent::ReportOk {
        users: comparison.libraries().len(),
        shared_games: ranked.len(),
    });
    Ok(report)
}
