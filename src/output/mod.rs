//! Log backends. The terminal is always there for the user; the file backend is the
//! opt-in durable log kept next to the directory being cleaned.

mod file;
mod terminal;

pub use file::FileOutput;
pub use terminal::TerminalOutput;

use crate::level::Level;

/// Carries all data a backend needs to render one log line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub scope: String,
    pub message: String,
    /// Continuation lines (file listings) skip the `[LEVEL] SCOPE` prefix.
    pub raw: bool,
}

/// `Send + Sync` so the process-wide internal logger can live in a `OnceLock`.
pub trait Output: Send + Sync {
    /// Renders the record in the backend's own format.
    ///
    /// # Errors
    /// I/O errors from the underlying sink (stdout/stderr, file).
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
