// Copyright (C) 2026  Chromalog Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//! Integration tests for the logger facade and registry lifecycle.
//!
//! The registry is process-wide and tests in this binary run in parallel, so
//! every test uses names unique to itself. `Logger::shutdown` clears the
//! whole registry and therefore lives in its own test binary (shutdown.rs),
//! i.e. its own process.

use chromalog::{
    log_at, log_error, log_info, Level, LevelTokenFormatter, Logger, LogError, PatternFormatter,
    Record, Registry, SourceLocation,
};

#[test]
fn test_distinct_names_register_independently() {
    let alpha = Logger::new("it-alpha").unwrap();
    let beta = Logger::new("it-beta").unwrap();

    let registry = Registry::global();
    assert_eq!(registry.get("it-alpha").unwrap().name(), "it-alpha");
    assert_eq!(registry.get("it-beta").unwrap().name(), "it-beta");

    drop(alpha);
    assert!(registry.get("it-alpha").is_none());
    assert_eq!(registry.get("it-beta").unwrap().name(), "it-beta");
    drop(beta);
}

#[test]
fn test_duplicate_name_fails_deterministically() {
    let _first = Logger::new("it-dup").unwrap();
    let second = Logger::new("it-dup");
    assert!(matches!(second, Err(LogError::DuplicateChannel(name)) if name == "it-dup"));
}

#[test]
fn test_dropped_name_can_be_reused() {
    let logger = Logger::new("it-reuse").unwrap();
    drop(logger);
    assert!(Registry::global().get("it-reuse").is_none());
    Logger::new("it-reuse").expect("name free again after drop");
}

#[test]
fn test_failed_duplicate_does_not_disturb_the_original() {
    let original = Logger::new("it-keep").unwrap();
    let failed = Logger::new("it-keep");
    assert!(failed.is_err());
    // Dropping the failed construction attempt must not deregister the
    // original's entry.
    drop(failed);
    assert!(Registry::global().get("it-keep").is_some());
    drop(original);
    assert!(Registry::global().get("it-keep").is_none());
}

#[test]
fn test_macros_capture_this_file() {
    let logger = Logger::new("it-macros").unwrap();
    log_info!(logger, "starting {} worker(s)", 4);
    log_error!(logger, "connection lost");
    log_at!(logger, Level::Debug, "raw level {}", Level::Debug);

    let name = chromalog::__function_name!();
    assert!(name.ends_with("test_macros_capture_this_file"));
}

#[test]
fn test_channel_handle_logs_without_the_facade() {
    let logger = Logger::new("it-handle").unwrap();
    let handle = logger.handle();
    handle.log(
        Level::Warn,
        "direct via handle",
        SourceLocation::new(file!(), line!(), "integration_tests"),
    );
    handle.flush();
}

// The formatted-line contract from the public formatter surface: channel
// "net", error from net.rs line 42, message "connection lost".
#[test]
fn test_formatted_line_scenario() {
    let formatter = PatternFormatter::new()
        .with_flag('*', Box::new(LevelTokenFormatter))
        .with_pattern("[%H:%M:%S] %^%*%$ %n [%s:%#] %v");
    let record = Record::new(
        Level::Error,
        "net",
        "connection lost",
        SourceLocation::new("net.rs", 42, "net::poll"),
    );
    let line = formatter.format(&record);
    assert!(line.text.contains(" EROR "));
    assert!(line.text.contains("net"));
    assert!(line.text.contains("net.rs:42"));
    assert!(line.text.contains("connection lost"));
}
