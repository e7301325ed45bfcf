//! Integration tests for the logging pipeline
//!
//! These tests verify:
//! - The stock printer stages end to end
//! - Filter short-circuiting in the logger facade
//! - Fan-out behaviour when one output fails
//! - File outputs and JSON configuration
//! - Thread safety of a shared logger

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use rust_logforge::outputs::{MultiOutput, StreamOutput, LINE_ENDING};
use rust_logforge::prelude::*;
use rust_logforge::printers::{
    boxed, colorized, located, logfmt, message, prefixed, timestamped, Prefixed,
};
use rust_logforge::{DynOutput, DynPrinter, OutputEvent};
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap()
}

fn loc0() -> SourceLocation {
    SourceLocation::new("src/main.rs", 12, 5).with_function("main")
}

fn event(severity: Severity, message: impl Into<LogMessage>) -> LogEvent {
    LogEvent::at(severity, message, t0(), loc0())
}

fn written(output: &StreamOutput<Vec<u8>>) -> Vec<String> {
    output.with_writer(|buf| {
        String::from_utf8(buf.clone())
            .expect("output is utf-8")
            .lines()
            .map(str::to_string)
            .collect()
    })
}

/// Output recording the lines it receives
#[derive(Clone, Default)]
struct Recording {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Output for Recording {
    fn write(&self, event: &OutputEvent<'_>) -> Result<()> {
        self.lines.lock().extend(event.lines.iter().cloned());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Output that always fails
struct Closed;

impl Output for Closed {
    fn write(&self, _event: &OutputEvent<'_>) -> Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stream closed").into())
    }

    fn name(&self) -> &str {
        "closed"
    }
}

// ============================================================================
// Printer Chain Scenarios
// ============================================================================

#[test]
fn test_prefixed_message_with_uniform_prefixes() {
    let prefixes = SeverityMap::new()
        .with(Severity::Info, "[INFO]: ")
        .with(Severity::Error, "[ERRO]: ");
    let printer = message() >> Prefixed::new(prefixes);

    assert_eq!(printer.print(&event(Severity::Info, "hello")), vec!["[INFO]: hello"]);
}

#[test]
fn test_prefixed_message_with_default_prefixes_is_padded() {
    let printer = message() >> prefixed();
    assert_eq!(printer.print(&event(Severity::Info, "hello")), vec!["[INFO]:    hello"]);
}

#[test]
fn test_boxed_message() {
    let printer = message() >> boxed();
    assert_eq!(
        printer.print(&event(Severity::Info, "hello")),
        vec!["┌─────┐", "│hello│", "└─────┘"]
    );
}

#[test]
fn test_message_splits_line_breaks() {
    assert_eq!(
        message().print(&event(Severity::Info, "line1\nline2")),
        vec!["line1", "line2"]
    );
}

#[test]
fn test_logfmt_line() {
    assert_eq!(
        logfmt().print(&event(Severity::Warning, "disk full")),
        vec!["level=warning message=disk full time=2025-01-08T10:30:45+0000"]
    );
}

#[test]
fn test_full_chain_reads_outside_in() {
    let printer = message() >> prefixed() >> boxed() >> timestamped() >> located();
    let lines = printer.print(&event(Severity::Warning, "low memory"));

    assert_eq!(
        lines,
        vec![
            "Location: src/main.rs(12,5): main",
            "Time: 08.01.2025 10:30:45",
            "┌─────────────────────┐",
            "│[WARNING]: low memory│",
            "└─────────────────────┘",
        ]
    );
}

#[test]
fn test_header_stages_prepend_onto_empty_body() {
    let printer = message() >> boxed() >> timestamped() >> located();
    let lines = printer.print(&event(Severity::Info, ""));

    assert_eq!(
        lines,
        vec!["Location: src/main.rs(12,5): main", "Time: 08.01.2025 10:30:45"]
    );
}

#[test]
fn test_colorized_outermost_wraps_every_line() {
    let printer = message() >> boxed() >> colorized();
    let lines = printer.print(&event(Severity::Error, "x"));

    assert_eq!(lines.len(), 3);
    assert!(lines
        .iter()
        .all(|line| line.starts_with("\x1B[38;5;196m") && line.ends_with("\x1B[0m")));
}

#[test]
fn test_static_and_dynamic_chains_agree() {
    let fixed = message() >> prefixed() >> boxed();
    let dynamic: DynPrinter = message()
        .into_dyn()
        .with(prefixed())
        .into_dyn()
        .with(boxed())
        .into_dyn();

    let e = event(Severity::Fatal, "one\ntwo three");
    assert_eq!(fixed.print(&e), dynamic.print(&e));
}

// ============================================================================
// Logger Facade Tests
// ============================================================================

#[test]
fn test_rejected_events_have_no_effect() {
    let logger = Logger::new(
        ThresholdFilter::new(Severity::Warning),
        message() >> boxed(),
        StreamOutput::new(Vec::new()),
    );

    logger.log(event(Severity::Info, "quiet")).unwrap();
    logger.log(event(Severity::Debug, "quieter")).unwrap();
    assert!(written(logger.output()).is_empty());

    logger.log(event(Severity::Error, "loud")).unwrap();
    assert_eq!(written(logger.output()), vec!["┌────┐", "│loud│", "└────┘"]);
    assert_eq!(logger.metrics().filtered_count(), 2);
    assert_eq!(logger.metrics().total_logged(), 1);
}

#[test]
fn test_debug_only_filter_by_build_mode() {
    let release = Logger::new(
        DebugOnlyFilter::with_build_mode(Severity::Trace, false),
        message(),
        StreamOutput::new(Vec::new()),
    );
    release.fatal("never").unwrap();
    assert!(written(release.output()).is_empty());

    let debug = Logger::new(
        DebugOnlyFilter::with_build_mode(Severity::Info, true),
        message(),
        StreamOutput::new(Vec::new()),
    );
    debug.debug("below").unwrap();
    debug.info("shown").unwrap();
    assert_eq!(written(debug.output()), vec!["shown"]);
}

#[test]
fn test_output_receives_origin_event() {
    struct SeverityTagged(Arc<Mutex<Vec<(Severity, usize)>>>);

    impl Output for SeverityTagged {
        fn write(&self, event: &OutputEvent<'_>) -> Result<()> {
            self.0.lock().push((event.origin.severity(), event.lines.len()));
            Ok(())
        }

        fn name(&self) -> &str {
            "tagged"
        }
    }

    let seen = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::new(
        ThresholdFilter::default(),
        message() >> boxed(),
        SeverityTagged(Arc::clone(&seen)),
    );

    logger.warning("a\nb").unwrap();
    assert_eq!(*seen.lock(), vec![(Severity::Warning, 4)]);
}

#[test]
fn test_error_message_rendering() {
    let logger = Logger::new(
        ThresholdFilter::default(),
        message(),
        StreamOutput::new(Vec::new()),
    );

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    logger.log_error(Severity::Error, io).unwrap();

    assert_eq!(written(logger.output()), vec!["Error: config.toml missing"]);
}

// ============================================================================
// Fan-out Tests
// ============================================================================

#[test]
fn test_fan_out_continues_after_failure() {
    let recording = Recording::default();
    let outputs: Vec<DynOutput> = vec![Box::new(Closed), Box::new(recording.clone())];
    let logger = Logger::new(ThresholdFilter::default(), message(), MultiOutput::new(outputs));

    let err = logger.info("hello").unwrap_err();

    assert_eq!(*recording.lines.lock(), vec!["hello"]);
    match err {
        LoggerError::FanOut { failures, attempted } => {
            assert_eq!(attempted, 2);
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].index, 0);
            assert_eq!(failures[0].output, "closed");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(logger.metrics().failed_writes(), 1);
}

#[test]
fn test_fan_out_skips_absent_outputs() {
    let first = Recording::default();
    let second = Recording::default();
    let multi = MultiOutput::from_optional([
        None,
        Some(Box::new(first.clone()) as DynOutput),
        None,
        Some(Box::new(second.clone()) as DynOutput),
    ]);
    assert_eq!(multi.len(), 2);

    let logger = Logger::new(ThresholdFilter::default(), message(), multi);
    logger.info("both").unwrap();

    assert_eq!(*first.lines.lock(), vec!["both"]);
    assert_eq!(*second.lines.lock(), vec!["both"]);
}

// ============================================================================
// File Output & Configuration Tests
// ============================================================================

#[test]
fn test_file_output_line_terminators() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("boxed.log");

    let logger = Logger::new(
        ThresholdFilter::default(),
        message() >> boxed(),
        StreamOutput::append_to_file(&log_file).expect("Failed to open log file"),
    );
    logger.log(event(Severity::Info, "hi")).unwrap();
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(
        content,
        ["┌──┐", "│hi│", "└──┘"]
            .iter()
            .map(|line| format!("{line}{LINE_ENDING}"))
            .collect::<String>()
    );
}

#[test]
fn test_file_output_appends_across_loggers() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("append.log");

    for text in ["first", "second"] {
        let logger = Logger::builder()
            .output(StreamOutput::append_to_file(&log_file).expect("Failed to open log file"))
            .build();
        logger.info(text).unwrap();
        logger.flush().expect("Failed to flush");
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().collect::<Vec<_>>(), vec!["first", "second"]);
}

#[test]
fn test_json_config_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("configured.log");
    let json = format!(
        r#"{{
            "filter": {{ "kind": "threshold", "min_severity": "info" }},
            "printer": {{
                "base": {{ "kind": "message" }},
                "stages": [
                    {{ "stage": "prefix", "prefixes": {{ "info": "I ", "error": "E " }} }},
                    {{ "stage": "timestamp", "format": {{ "Custom": "%H:%M:%S" }}, "prefix": "@" }}
                ]
            }},
            "outputs": [ {{ "type": "file", "path": {} }} ]
        }}"#,
        serde_json::to_string(&log_file).unwrap()
    );

    let logger = LoggerConfig::from_json(&json)
        .expect("Failed to parse config")
        .build()
        .expect("Failed to build logger");

    logger.log(event(Severity::Debug, "hidden")).unwrap();
    logger.log(event(Severity::Error, "shown")).unwrap();
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().collect::<Vec<_>>(), vec!["@10:30:45", "E shown"]);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[test]
fn test_concurrent_logging_keeps_events_contiguous() {
    let logger = Arc::new(Logger::new(
        ThresholdFilter::default(),
        message() >> boxed(),
        StreamOutput::new(Vec::new()),
    ));

    let mut handles = vec![];
    for thread_id in 0..4 {
        let logger = Arc::clone(&logger);
        let handle = thread::spawn(move || {
            for i in 0..50 {
                logger
                    .info(format!("thread {} message {:02}", thread_id, i))
                    .unwrap();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let lines = written(logger.output());
    assert_eq!(lines.len(), 4 * 50 * 3);
    for chunk in lines.chunks(3) {
        assert!(chunk[0].starts_with('┌'), "{:?}", chunk);
        assert!(chunk[1].starts_with("│thread "), "{:?}", chunk);
        assert!(chunk[2].starts_with('└'), "{:?}", chunk);
    }
    assert_eq!(logger.metrics().total_logged(), 200);
}
