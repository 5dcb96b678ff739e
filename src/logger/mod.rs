//! The builder hides output construction behind a stepwise API, and the resulting
//! Logger fans out each record to all configured outputs.

mod builder;

pub use builder::{FileBuilder, LoggerBuilder, TerminalBuilder};

use crate::level::Level;
use crate::output::{LogRecord, Output};

/// Immutable after build, so it can be shared from a `OnceLock` without locking.
#[derive(Default)]
pub struct Logger {
    min_level: Level,
    outputs: Vec<Box<dyn Output>>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Core dispatch: filters by severity, then fans out to all configured outputs.
    pub fn log(&self, level: Level, scope: &str, msg: &str) {
        if level < self.min_level {
            return;
        }
        self.dispatch(&LogRecord {
            level,
            scope: scope.to_string(),
            message: msg.to_string(),
            raw: false,
        });
    }

    pub fn trace(&self, scope: &str, msg: &str) {
        self.log(Level::Trace, scope, msg);
    }

    pub fn debug(&self, scope: &str, msg: &str) {
        self.log(Level::Debug, scope, msg);
    }

    pub fn info(&self, scope: &str, msg: &str) {
        self.log(Level::Info, scope, msg);
    }

    pub fn warn(&self, scope: &str, msg: &str) {
        self.log(Level::Warn, scope, msg);
    }

    pub fn error(&self, scope: &str, msg: &str) {
        self.log(Level::Error, scope, msg);
    }

    /// Command output (previews, run summaries) bypasses level filtering.
    pub fn print(&self, scope: &str, msg: &str) {
        self.dispatch(&LogRecord {
            level: Level::Info,
            scope: scope.to_string(),
            message: msg.to_string(),
            raw: false,
        });
    }

    /// Unprefixed continuation line, e.g. one path of a file listing.
    pub fn raw(&self, msg: &str) {
        self.dispatch(&LogRecord {
            level: Level::Info,
            scope: String::new(),
            message: msg.to_string(),
            raw: true,
        });
    }

    fn dispatch(&self, record: &LogRecord) {
        for output in &self.outputs {
            // A broken sink must never abort a half-done disposal
            let _ = output.write(record);
        }
    }

    /// # Errors
    /// Returns the first I/O error encountered across all outputs.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}
