// crates/steam-compare-cli/src/log.rs
// ============================================================================
// Module: Steam Compare Run Log
// Description: Structured run events and JSON-line sinks.
// Purpose: Record each pipeline stage as one JSON object per line.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! [`RunEvent`] values describe pipeline progress: fetch start and finish per
//! user, parse results, the final report, and fatal failures. A
//! [`RunLogSink`] receives them. [`JsonLineSink`] serializes each event as a
//! single JSON line to any [`Write`] target; [`NoopRunLogSink`] drops them.
//! Sinks never fail the run: serialization or write errors are discarded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;
use std::sync::PoisonError;

use serde::Serialize;

// ============================================================================
// SECTION: Events
// ============================================================================

/// One structured run log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event")]
pub enum RunEvent {
    /// A library fetch is about to be issued.
    #[serde(rename = "fetch.start")]
    FetchStart {
        /// Raw identifier supplied for the user.
        user_id: String,
        /// Resolved locator, rendered as `kind:id`.
        locator: String,
    },
    /// A library document was retrieved.
    #[serde(rename = "fetch.ok")]
    FetchOk {
        /// Raw identifier supplied for the user.
        user_id: String,
        /// Document size in bytes.
        bytes: usize,
    },
    /// A library document was parsed.
    #[serde(rename = "parse.ok")]
    ParseOk {
        /// Raw identifier supplied for the user.
        user_id: String,
        /// Canonical 64-bit id reported by the document.
        steam_id: String,
        /// Number of distinct games in the library.
        games: usize,
    },
    /// The report was rendered.
    #[serde(rename = "report.ok")]
    ReportOk {
        /// Number of users compared.
        users: usize,
        /// Number of games owned by more than one user.
        shared_games: usize,
    },
    /// The run aborted.
    #[serde(rename = "run.failed")]
    RunFailed {
        /// Rendered error message.
        error: String,
    },
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Receiver for run events.
pub trait RunLogSink {
    /// Records one event.
    fn record(&self, event: &RunEvent);
}

impl<S: RunLogSink + ?Sized> RunLogSink for &S {
    fn record(&self, event: &RunEvent) {
        (**self).record(event);
    }
}

impl<S: RunLogSink + ?Sized> RunLogSink for Box<S> {
    fn record(&self, event: &RunEvent) {
        (**self).record(event);
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRunLogSink;

impl RunLogSink for NoopRunLogSink {
    fn record(&self, _event: &RunEvent) {}
}

/// Sink that writes each event as one JSON line.
#[derive(Debug)]
pub struct JsonLineSink<W: Write> {
    /// Output target guarded for shared access.
    writer: Mutex<W>,
}

impl<W: Write> JsonLineSink<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> RunLogSink for JsonLineSink<W> {
    fn record(&self, event: &RunEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut writer) = self.writer.lock()
        {
            let _ = writeln!(writer, "{payload}");
            let _ = writer.flush();
        }
    }
}
