//! Unit tests for log.rs
//!
//! Tests LogEntry, LogSeverity, and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "slot_pool::SlotAllocator".to_string(),
        message: "Grew pool from 2 to 3 slots".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_have_fixed_width() {
    let all = [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ];
    for severity in all {
        assert_eq!(severity.label().len(), 5, "{:?}", severity);
    }
    assert_eq!(LogSeverity::Info.label().trim(), "INFO");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_clone() {
    let entry1 = entry(LogSeverity::Warn, Some("pool.rs"), Some(10));
    let entry2 = entry1.clone();

    assert_eq!(entry1.severity, entry2.severity);
    assert_eq!(entry1.source, entry2.source);
    assert_eq!(entry1.message, entry2.message);
    assert_eq!(entry1.file, entry2.file);
    assert_eq!(entry1.line, entry2.line);
}

#[test]
fn test_log_entry_debug() {
    let debug_str = format!("{:?}", entry(LogSeverity::Debug, None, None));
    assert!(debug_str.contains("Debug"));
    assert!(debug_str.contains("slot_pool::SlotAllocator"));
    assert!(debug_str.contains("Grew pool"));
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_format_plain_without_file_line() {
    let line = DefaultLogger::format_plain(&entry(LogSeverity::Debug, None, None));
    assert!(line.contains("[DEBUG]"));
    assert!(line.contains("[slot_pool::SlotAllocator]"));
    assert!(line.ends_with("Grew pool from 2 to 3 slots"));
}

#[test]
fn test_format_plain_with_file_line() {
    let line = DefaultLogger::format_plain(&entry(LogSeverity::Error, Some("slot_allocator.rs"), Some(42)));
    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("(slot_allocator.rs:42)"));
}

#[test]
fn test_format_plain_file_without_line_is_ignored() {
    let line = DefaultLogger::format_plain(&entry(LogSeverity::Error, Some("slot_allocator.rs"), None));
    assert!(!line.contains("slot_allocator.rs"));
}

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    // Just verify it doesn't panic
    logger.log(&entry(LogSeverity::Trace, None, None));
    logger.log(&entry(LogSeverity::Debug, None, None));
    logger.log(&entry(LogSeverity::Info, None, None));
    logger.log(&entry(LogSeverity::Warn, None, None));
    logger.log(&entry(LogSeverity::Error, Some("slot_allocator.rs"), Some(1)));
}
