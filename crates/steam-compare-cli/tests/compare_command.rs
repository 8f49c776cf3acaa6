// crates/steam-compare-cli/tests/compare_command.rs
// ============================================================================
// Module: CLI Compare Command Tests
// Description: Integration tests for the steam-compare binary.
// Purpose: Pin stdout, stderr, and exit codes over HTTP and offline sources.
// Dependencies: steam-compare-cli binary, tiny_http, tempfile
// ============================================================================

//! ## Overview
//! Runs the built binary against a local HTTP server (through a config file
//! base URL) and against an offline document directory.

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
#![allow(dead_code, reason = "Common module may have unused helpers.")]

mod common;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::process::Command;
use std::process::Output;
use std::thread;

use serde_json::Value;
use tempfile::TempDir;
use tiny_http::Response;
use tiny_http::Server;

use crate::common::THREE_USER_REPORT;
use crate::common::three_users;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Runs the binary in `cwd` with a clean config environment.
fn run_cli(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_steam-compare"))
        .args(args)
        .current_dir(cwd)
        .env_remove("STEAM_COMPARE_CONFIG")
        .output()
        .expect("run steam-compare")
}

/// Writes every fixture document as `<id>.xml` into a fresh directory.
fn offline_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    for (id, document) in three_users() {
        fs::write(dir.path().join(format!("{id}.xml")), document).expect("write fixture");
    }
    dir
}

/// Serves the fixture documents by request path for `requests` requests.
fn serve_fixtures(requests: usize) -> (String, thread::JoinHandle<Vec<String>>) {
    let server = Server::http("127.0.0.1:0").expect("http server");
    let base_url = format!("http://{}", server.server_addr());
    let handle = thread::spawn(move || {
        let fixtures = three_users();
        let mut paths = Vec::new();
        for _ in 0 .. requests {
            let request = server.recv().expect("request");
            let path = request.url().to_string();
            let body = fixtures.iter().find(|(id, _)| {
                path == format!("/profiles/{id}/games/?tab=all&xml=1") || path == format!("/id/{id}/games?tab=all&xml=1")
            });
            let response = match body {
                Some((_, document)) => Response::from_string(document.clone()),
                None => Response::from_string("missing").with_status_code(404),
            };
            request.respond(response).expect("respond");
            paths.push(path);
        }
        paths
    });
    (base_url, handle)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf-8 stderr")
}

// ============================================================================
// SECTION: Offline Source
// ============================================================================

#[test]
fn offline_run_prints_report_and_succeeds() {
    let docs = offline_dir();
    let cwd = TempDir::new().unwrap();
    let output = run_cli(
        cwd.path(),
        &["--offline-dir", docs.path().to_str().unwrap(), "76561198000000001", "bob", "76561198000000003"],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), format!("{THREE_USER_REPORT}\n"));
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn offline_dir_from_config_file() {
    let docs = offline_dir();
    let cwd = TempDir::new().unwrap();
    let config = format!("[source]\noffline_dir = {:?}\n", docs.path().to_str().unwrap());
    fs::write(cwd.path().join("steam-compare.toml"), config).unwrap();
    let output = run_cli(cwd.path(), &["76561198000000001", "bob"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "Halo: ['Alice', \"O'Neil\"]\nPortal: ['Alice', \"O'Neil\"]\n");
}

#[test]
fn missing_user_fails_with_one_line() {
    let docs = offline_dir();
    let cwd = TempDir::new().unwrap();
    let output = run_cli(cwd.path(), &["--offline-dir", docs.path().to_str().unwrap(), "bob", "ghost"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    let stderr = stderr_of(&output);
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.starts_with("Failed to fetch library for ghost:"), "stderr: {stderr}");
}

#[test]
fn log_json_emits_run_events_on_stderr() {
    let docs = offline_dir();
    let cwd = TempDir::new().unwrap();
    let output =
        run_cli(cwd.path(), &["--log-json", "--offline-dir", docs.path().to_str().unwrap(), "bob", "76561198000000003"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Halo: [\"O'Neil\", 'Carol']\n");
    let events: Vec<String> = stderr_of(&output)
        .lines()
        .map(|line| {
            let record: Value = serde_json::from_str(line).expect("json line");
            record["event"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(events.first().map(String::as_str), Some("fetch.start"));
    assert_eq!(events.last().map(String::as_str), Some("report.ok"));
}

// ============================================================================
// SECTION: HTTP Source
// ============================================================================

#[test]
fn http_run_requests_profile_and_vanity_paths() {
    let (base_url, handle) = serve_fixtures(3);
    let cwd = TempDir::new().unwrap();
    let config_path = cwd.path().join("custom.toml");
    fs::write(&config_path, format!("[source]\nbase_url = \"{base_url}\"\ntimeout_ms = 5000\n")).unwrap();
    let output = run_cli(
        cwd.path(),
        &["--config", config_path.to_str().unwrap(), "76561198000000001", "bob", "76561198000000003"],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), format!("{THREE_USER_REPORT}\n"));
    assert_eq!(
        handle.join().expect("server thread"),
        [
            "/profiles/76561198000000001/games/?tab=all&xml=1",
            "/id/bob/games?tab=all&xml=1",
            "/profiles/76561198000000003/games/?tab=all&xml=1",
        ]
    );
}

#[test]
fn http_error_status_fails_the_run() {
    let (base_url, handle) = serve_fixtures(1);
    let cwd = TempDir::new().unwrap();
    fs::write(cwd.path().join("steam-compare.toml"), format!("[source]\nbase_url = \"{base_url}\"\n")).unwrap();
    let output = run_cli(cwd.path(), &["nobody"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("http status 404"), "stderr: {}", stderr_of(&output));
    handle.join().expect("server thread");
}

// ============================================================================
// SECTION: Argument And Config Errors
// ============================================================================

#[test]
fn no_user_ids_is_a_usage_error() {
    let cwd = TempDir::new().unwrap();
    let output = run_cli(cwd.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn explicit_missing_config_fails() {
    let cwd = TempDir::new().unwrap();
    let output = run_cli(cwd.path(), &["--config", "absent.toml", "bob"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).starts_with("Failed to load configuration:"));
}

#[test]
fn invalid_config_value_fails() {
    let cwd = TempDir::new().unwrap();
    fs::write(cwd.path().join("steam-compare.toml"), "[source]\ntimeout_ms = 5\n").unwrap();
    let output = run_cli(cwd.path(), &["bob"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("source.timeout_ms"));
}

#[test]
fn version_flag_prints_version() {
    let cwd = TempDir::new().unwrap();
    let output = run_cli(cwd.path(), &["--version"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), format!("steam-compare {}\n", env!("CARGO_PKG_VERSION")));
}
