//! Durable log: one plain-text file per day under `<target>/logs/`.

use super::{LogRecord, Output};
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// File output configuration.
#[derive(Debug, Clone)]
pub struct FileOutput {
    /// Directory the daily files are written to (created on first write).
    base_dir: PathBuf,
    /// Leading part of every file name, `{prefix}_{YYYY-MM-DD}.log`.
    prefix: String,
    /// Timestamp format (strftime) for each line.
    timestamp_format: String,
}

impl FileOutput {
    /// Creates a file output writing into `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            prefix: "paku".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        }
    }

    /// Sets the file name prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the timestamp format.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Path of today's log file. The date in the name is what makes the log roll over.
    #[must_use]
    pub fn current_path(&self) -> PathBuf {
        let day = Local::now().format("%Y-%m-%d");
        self.base_dir.join(format!("{}_{day}.log", self.prefix))
    }

    fn format_content(&self, record: &LogRecord) -> String {
        if record.raw {
            return record.message.clone();
        }
        let timestamp = Local::now().format(&self.timestamp_format);
        format!(
            "{timestamp} [{}] {}  {}",
            record.level.tag(),
            record.scope,
            record.message
        )
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir)?;
        }

        // Single write per line so concurrent appenders never interleave mid-line
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.current_path())?;

        let mut content = self.format_content(record);
        content.push('\n');
        file.write_all(content.as_bytes())?;

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
