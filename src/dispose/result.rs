//! Outcome of one disposal call, built up file by file.
//!
//! `removed` only ever holds files that are gone from disk when the result is returned;
//! `created` may be non-empty on failure (a partially filled archive is kept).

use crate::Error;
use crate::logger::Logger;
use crate::record::FileRecord;

#[derive(Debug, Default)]
pub struct DisposalResult {
    error: Option<Error>,
    removed: Vec<FileRecord>,
    created: Vec<FileRecord>,
}

impl DisposalResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A result that failed before any side effect.
    #[must_use]
    pub fn failed(error: Error) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// True iff no error was recorded.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Removed files in processing order.
    #[must_use]
    pub fn removed_files(&self) -> &[FileRecord] {
        &self.removed
    }

    #[must_use]
    pub fn created_files(&self) -> &[FileRecord] {
        &self.created
    }

    /// Records the error that stopped processing. The first one wins; later ones
    /// (e.g. finalizing an archive after a failed entry) are consequences of it.
    pub fn fail(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Call only after the file is confirmed gone.
    pub fn record_removed(&mut self, file: FileRecord) {
        self.removed.push(file);
    }

    pub fn record_created(&mut self, file: FileRecord) {
        self.created.push(file);
    }

    /// Splits into `(error, removed, created)` for strategies that re-wrap a delegate's result.
    #[must_use]
    pub fn into_parts(self) -> (Option<Error>, Vec<FileRecord>, Vec<FileRecord>) {
        (self.error, self.removed, self.created)
    }

    #[must_use]
    pub const fn from_parts(
        error: Option<Error>,
        removed: Vec<FileRecord>,
        created: Vec<FileRecord>,
    ) -> Self {
        Self {
            error,
            removed,
            created,
        }
    }

    /// Sum of the recorded lengths of removed files.
    #[must_use]
    pub fn bytes_removed(&self) -> u64 {
        self.removed.iter().map(FileRecord::len).sum()
    }

    /// Run summary for the user.
    pub fn log(&self, logger: &Logger) {
        if !self.removed.is_empty() {
            logger.print(
                "RESULT",
                &format!(
                    "Removed {} file(s), freed {}",
                    self.removed.len(),
                    format_size(self.bytes_removed())
                ),
            );
            for file in &self.removed {
                logger.raw(&format!("  - {}", file.path().display()));
            }
        }

        if !self.created.is_empty() {
            logger.print("RESULT", &format!("Created {} file(s)", self.created.len()));
            for file in &self.created {
                logger.raw(&format!("  + {}", file.path().display()));
            }
        }

        match &self.error {
            Some(err) => logger.error("RESULT", &err.to_string()),
            None if self.removed.is_empty() && self.created.is_empty() => {
                logger.debug("RESULT", "No files processed");
            }
            None => {}
        }
    }
}

/// Human-readable byte count for run summaries.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;

    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64;
    match bytes {
        b if b >= GIB => format!("{:.2} GB", value / GIB as f64),
        b if b >= MIB => format!("{:.2} MB", value / MIB as f64),
        b if b >= KIB => format!("{:.2} KB", value / KIB as f64),
        b => format!("{b} B"),
    }
}
