//! Integration tests for the logging facade
//!
//! These tests verify:
//! - Level gating and lazy formatting of the context macros
//! - Source rewriting end to end, through scoped loggers and real sinks
//! - Swapping the default logger
//! - Error propagation from failing handlers
//! - Thread safety of a shared decorated logger

mod common;

use common::{source_count, CaptureHandler, DEFAULT_LOGGER_LOCK};
use rust_source_logger::prelude::*;
use rust_source_logger::{
    debug_contextf, debugf, error_contextf, errorf, info_contextf, infof, warnf,
};
use std::fmt;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Display value that counts how often it is formatted
struct Counting<'a>(&'a AtomicUsize);

impl fmt::Display for Counting<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fetch_add(1, Ordering::SeqCst);
        write!(f, "5")
    }
}

fn install_capture(level: LogLevel) -> CaptureHandler {
    let capture = CaptureHandler::new(level);
    set_default_logger(Logger::new(SourceHandler::new(capture.clone())));
    capture
}

#[test]
fn test_disabled_context_call_never_formats() {
    let _guard = DEFAULT_LOGGER_LOCK.lock();
    let capture = install_capture(LogLevel::Info);
    let calls = AtomicUsize::new(0);
    let ctx = Context::background();

    debug_contextf!(&ctx, "x={}", Counting(&calls));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(capture.records().is_empty());
}

#[test]
fn test_context_free_call_formats_eagerly() {
    let _guard = DEFAULT_LOGGER_LOCK.lock();
    let capture = install_capture(LogLevel::Info);
    let calls = AtomicUsize::new(0);

    debugf!("x={}", Counting(&calls));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(capture.records().is_empty());
}

#[test]
fn test_info_record_carries_message_and_source() {
    let _guard = DEFAULT_LOGGER_LOCK.lock();
    let capture = install_capture(LogLevel::Debug);

    let line = line!() + 1;
    infof!("user {} login id {}", "alice", 7);

    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level(), LogLevel::Info);
    assert_eq!(records[0].message(), "user alice login id 7");

    assert_eq!(source_count(&records[0]), 1);
    let source = records[0].attr(SOURCE_KEY).unwrap().value.to_string();
    assert_eq!(source, format!("{}:{}", file!(), line));
    assert!(source.ends_with(&format!("integration_tests.rs:{}", line)));
}

#[test]
fn test_enabled_context_call_formats_once() {
    let _guard = DEFAULT_LOGGER_LOCK.lock();
    let capture = install_capture(LogLevel::Debug);
    let calls = AtomicUsize::new(0);
    let ctx = Context::background().with_tracing(TracingContext::new("trace", "span"));

    info_contextf!(&ctx, "x={}", Counting(&calls));
    error_contextf!(&ctx, "failed with {}", 500);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let records = capture.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].message(), "x=5");
    assert_eq!(records[1].level(), LogLevel::Error);
}

#[test]
fn test_set_default_logger_routes_to_new_logger_only() {
    let _guard = DEFAULT_LOGGER_LOCK.lock();
    let old = install_capture(LogLevel::Debug);

    warnf!("before swap");
    let new = install_capture(LogLevel::Debug);
    warnf!("after swap {}", 1);
    errorf!("after swap {}", 2);

    let old_records = old.records();
    assert_eq!(old_records.len(), 1);
    assert_eq!(old_records[0].message(), "before swap");

    let messages: Vec<String> = new.records().iter().map(|r| r.message().to_string()).collect();
    assert_eq!(messages, ["after swap 1", "after swap 2"]);
}

#[test]
fn test_scoped_logger_keeps_single_source() {
    let capture = CaptureHandler::new(LogLevel::Trace);
    let logger = Logger::new(SourceHandler::new(capture.clone()))
        .with(vec![Attr::new("service", "api")])
        .with_group("request")
        .with(vec![Attr::new("request_id", 42)])
        .with_group("db");

    let line = line!() + 1;
    logger.info("query done").unwrap();

    let records = capture.records();
    assert_eq!(records.len(), 1);
    assert_eq!(source_count(&records[0]), 1);
    assert_eq!(
        records[0].attr(SOURCE_KEY).unwrap().value.to_string(),
        format!("{}:{}", file!(), line)
    );

    let keys: Vec<&str> = records[0].attrs().iter().map(|a| a.key.as_str()).collect();
    assert_eq!(keys, ["service", "request_id", SOURCE_KEY]);
}

#[test]
fn test_json_output_has_one_string_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("source.jsonl");
    let file = fs::File::create(&log_file).expect("Failed to create log file");

    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .add_source(true)
        .writer(file)
        .build();

    let line = line!() + 1;
    logger.debug("hello").expect("write succeeds");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(parsed["level"], "DEBUG");
    assert_eq!(parsed["msg"], "hello");
    assert_eq!(parsed["source"], format!("{}:{}", file!(), line));
    assert_eq!(lines[0].matches("\"source\"").count(), 1);
}

#[test]
fn test_text_output_without_decoration() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("plain.log");
    let file = fs::File::create(&log_file).expect("Failed to create log file");

    let logger = Logger::builder()
        .output_format(OutputFormat::Text)
        .decorate_source(false)
        .writer(file)
        .build()
        .with(vec![Attr::new("component", "auth")]);

    logger.info("User login\nERROR fake").unwrap();
    logger.debug("dropped").unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1, "Log should be a single line, not multiple");
    assert!(lines[0].contains("level=INFO"));
    assert!(lines[0].ends_with("component=auth"));
    assert!(!lines[0].contains("source="));
}

#[test]
fn test_handler_error_propagates() {
    struct FailingHandler {
        attempts: Arc<AtomicUsize>,
    }

    impl Handler for FailingHandler {
        fn enabled(&self, _ctx: &Context, _level: LogLevel) -> bool {
            true
        }

        fn handle(&self, _ctx: &Context, _record: &Record) -> rust_source_logger::Result<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(LoggerError::other("Simulated failure"))
        }

        fn with_attrs(&self, _attrs: Vec<Attr>) -> Arc<dyn Handler> {
            Arc::new(FailingHandler {
                attempts: Arc::clone(&self.attempts),
            })
        }

        fn with_group(&self, _name: &str) -> Arc<dyn Handler> {
            Arc::new(FailingHandler {
                attempts: Arc::clone(&self.attempts),
            })
        }
    }

    let attempts = Arc::new(AtomicUsize::new(0));
    let logger = Logger::new(SourceHandler::new(FailingHandler {
        attempts: Arc::clone(&attempts),
    }))
    .with_group("g");

    let err = logger.error("will fail").unwrap_err();
    assert_eq!(err.to_string(), "Simulated failure");
    // no retry
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_logging_through_shared_decorator() {
    let capture = CaptureHandler::new(LogLevel::Trace);
    let logger = Logger::new(SourceHandler::new(capture.clone()));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = logger.clone();
            std::thread::spawn(move || {
                for i in 0..50 {
                    logger
                        .log_attrs(
                            &Context::background(),
                            LogLevel::Info,
                            format!("thread {} message {}", t, i),
                            vec![Attr::new(SOURCE_KEY, "upstream")],
                        )
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let records = capture.records();
    assert_eq!(records.len(), 400);
    for record in &records {
        let rewritten = record
            .attrs()
            .iter()
            .filter(|a| a.key == SOURCE_KEY && a.value.to_string().contains("integration_tests.rs:"))
            .count();
        assert_eq!(rewritten, 1);
        assert!(!record.attrs().iter().any(|a| a.value.to_string() == "upstream"));
    }
}

#[test]
fn test_record_without_location_is_untouched() {
    let capture = CaptureHandler::new(LogLevel::Trace);
    let logger = Logger::new(SourceHandler::new(capture.clone()));

    let record = Record::new(LogLevel::Warn, "replayed").add_attr(Attr::new("k", "v"));
    logger.log_record(&Context::background(), &record).unwrap();

    assert_eq!(capture.records(), vec![record]);
}
