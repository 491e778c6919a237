//! Unit tests for the Diagnostics logger registry
//!
//! IMPORTANT: the logger is a process-wide static shared by all tests.
//! Tests that swap it are marked with #[serial] and only assert on entries
//! they produced themselves.

use crate::pool::Diagnostics;
use crate::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn from_source(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}

// ============================================================================
// LOGGER REGISTRY TESTS
// ============================================================================

#[test]
#[serial]
fn test_default_logger_logs_without_panic() {
    Diagnostics::reset_logger();
    Diagnostics::log(LogSeverity::Info, "diag::default", "Test message".to_string());
    Diagnostics::log_detailed(LogSeverity::Error, "diag::default", "Error message".to_string(), file!(), line!());
}

#[test]
#[serial]
fn test_set_custom_logger() {
    let (logger, entries) = TestLogger::new();
    Diagnostics::set_logger(logger);

    Diagnostics::log(LogSeverity::Info, "diag::custom", "Message 1".to_string());
    Diagnostics::log(LogSeverity::Warn, "diag::custom", "Message 2".to_string());

    let captured = from_source(&entries, "diag::custom");
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "Message 1");
    assert!(captured[0].file.is_none());
    assert_eq!(captured[1].severity, LogSeverity::Warn);

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_carries_file_and_line() {
    let (logger, entries) = TestLogger::new();
    Diagnostics::set_logger(logger);

    Diagnostics::log_detailed(LogSeverity::Error, "diag::detailed", "boom".to_string(), "pool.rs", 12);

    let captured = from_source(&entries, "diag::detailed");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].file, Some("pool.rs"));
    assert_eq!(captured[0].line, Some(12));

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_to_default() {
    let (logger, entries) = TestLogger::new();
    Diagnostics::set_logger(logger);
    Diagnostics::reset_logger();

    Diagnostics::log(LogSeverity::Info, "diag::reset", "After reset".to_string());

    // Custom logger should NOT receive this message
    assert!(from_source(&entries, "diag::reset").is_empty());
}

#[test]
#[serial]
fn test_macros_route_through_registry() {
    let (logger, entries) = TestLogger::new();
    Diagnostics::set_logger(logger);

    crate::pool_trace!("diag::macros", "trace {}", 1);
    crate::pool_debug!("diag::macros", "debug {}", 2);
    crate::pool_info!("diag::macros", "info {}", 3);
    crate::pool_warn!("diag::macros", "warn {}", 4);
    crate::pool_error!("diag::macros", "error {}", 5);

    let captured = from_source(&entries, "diag::macros");
    let severities: Vec<LogSeverity> = captured.iter().map(|e| e.severity).collect();
    assert_eq!(severities, vec![
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ]);
    assert_eq!(captured[4].message, "error 5");
    assert!(captured[4].file.is_some());
    assert!(captured[4].line.is_some());
    assert!(captured[3].file.is_none());

    Diagnostics::reset_logger();
}
