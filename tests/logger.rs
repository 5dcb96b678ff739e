//! Tests for the logger, its builder and the durable file output.

use paku::output::{FileOutput, LogRecord};
use paku::{FileRecord, Level, Logger, Output};
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Collects rendered records in memory.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<LogRecord>>>);

impl Output for Capture {
    fn write(&self, record: &LogRecord) -> Result<(), paku::Error> {
        self.0.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn flush(&self) -> Result<(), paku::Error> {
        Ok(())
    }
}

impl Capture {
    fn messages(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }
}

#[test]
fn builder_default() {
    let logger = Logger::builder().build();
    assert_eq!(logger.min_level(), Level::Info);
    assert_eq!(logger.output_count(), 0);
}

#[test]
fn builder_multiple_outputs() {
    let logger = Logger::builder()
        .level(Level::Trace)
        .terminal()
        .colors(false)
        .done()
        .file("/tmp/paku-test")
        .prefix("run")
        .done()
        .build();
    assert_eq!(logger.min_level(), Level::Trace);
    assert_eq!(logger.output_count(), 2);
}

#[test]
fn level_filtering_skips_print() {
    let capture = Capture::default();
    let logger = Logger::builder()
        .level(Level::Warn)
        .output(capture.clone())
        .build();

    logger.info("SCOPE", "dropped");
    logger.error("SCOPE", "kept");
    logger.print("SCOPE", "always shown");
    logger.raw("  /tmp/a");

    assert_eq!(capture.messages(), ["kept", "always shown", "  /tmp/a"]);
}

#[test]
fn file_output_appends_dated_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder().file(&log_dir).done().build();
    assert!(!log_dir.exists());

    logger.info("ZIP", "one");
    logger.raw("two");

    let path = FileOutput::new(&log_dir).current_path();
    assert!(path.file_name().unwrap().to_string_lossy().starts_with("paku_"));

    let content = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[INFO] ZIP  one"), "{}", lines[0]);
    assert_eq!(lines[1], "two");
}

#[test]
fn file_output_custom_format() {
    let tmp_dir = TempDir::new().unwrap();
    let output = FileOutput::new(tmp_dir.path())
        .prefix("audit")
        .timestamp_format("T");

    output
        .write(&LogRecord {
            level: Level::Warn,
            scope: "DELETE".to_string(),
            message: "stopped".to_string(),
            raw: false,
        })
        .unwrap();

    let content = fs::read_to_string(output.current_path()).unwrap();
    assert_eq!(content, "T [WARN] DELETE  stopped\n");
}

#[test]
fn disposal_result_summary() {
    let capture = Capture::default();
    let logger = Logger::builder().output(capture.clone()).build();

    let mut result = paku::DisposalResult::new();
    result.record_removed(FileRecord::from_path("/data/a.log").unwrap().with_len(2048));
    result.record_created(FileRecord::from_path("/data/paku.zip").unwrap());
    result.log(&logger);

    assert_eq!(
        capture.messages(),
        [
            "Removed 1 file(s), freed 2.00 KB",
            "  - /data/a.log",
            "Created 1 file(s)",
            "  + /data/paku.zip",
        ]
    );
}
