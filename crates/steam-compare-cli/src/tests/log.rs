// crates/steam-compare-cli/src/tests/log.rs
// ============================================================================
// Module: Run Log Tests
// Description: Unit tests for run event serialization and sinks.
// Purpose: Pin the JSON-line record shape.
// Dependencies: steam-compare-cli log module, serde_json
// ============================================================================

//! ## Overview
//! Each event must serialize to one JSON object tagged with `event`.

use serde_json::Value;
use serde_json::json;

use crate::log::JsonLineSink;
use crate::log::NoopRunLogSink;
use crate::log::RunEvent;
use crate::log::RunLogSink;

fn lines(sink: JsonLineSink<Vec<u8>>) -> Vec<Value> {
    let bytes = sink.into_inner();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn events_serialize_with_dotted_tags() {
    let sink = JsonLineSink::new(Vec::new());
    sink.record(&RunEvent::FetchStart {
        user_id: "EpicWolverine".to_string(),
        locator: "vanity:EpicWolverine".to_string(),
    });
    sink.record(&RunEvent::FetchOk {
        user_id: "EpicWolverine".to_string(),
        bytes: 512,
    });
    sink.record(&RunEvent::ReportOk {
        users: 2,
        shared_games: 0,
    });
    assert_eq!(
        lines(sink),
        vec![
            json!({"event": "fetch.start", "user_id": "EpicWolverine", "locator": "vanity:EpicWolverine"}),
            json!({"event": "fetch.ok", "user_id": "EpicWolverine", "bytes": 512}),
            json!({"event": "report.ok", "users": 2, "shared_games": 0}),
        ]
    );
}

#[test]
fn failure_event_carries_message() {
    let sink = JsonLineSink::new(Vec::new());
    sink.record(&RunEvent::RunFailed {
        error: "boom".to_string(),
    });
    assert_eq!(lines(sink), vec![json!({"event": "run.failed", "error": "boom"})]);
}

#[test]
fn noop_sink_accepts_events() {
    let sink: Box<dyn RunLogSink> = Box::new(NoopRunLogSink);
    sink.record(&RunEvent::RunFailed {
        error: "ignored".to_string(),
    });
}
