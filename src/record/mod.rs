//! A candidate file as a plain value. Filters and tests work on these without touching the
//! file system; disposal re-resolves the real file through [`FileRecord::path`] when it acts.

use crate::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Identity is the full path. Name and directory are derived once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: PathBuf,
    name: String,
    directory: PathBuf,
    len: u64,
    created: SystemTime,
    modified: SystemTime,
}

impl FileRecord {
    /// Builds a record from a path alone. Length is 0 and both timestamps are the Unix epoch
    /// until set with the `with_*` methods.
    ///
    /// # Errors
    /// `InvalidPath` when the path lacks a file name or a parent directory component.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .map(ToString::to_string);
        let directory = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf);

        match (name, directory) {
            (Some(name), Some(directory)) => Ok(Self {
                path,
                name,
                directory,
                len: 0,
                created: SystemTime::UNIX_EPOCH,
                modified: SystemTime::UNIX_EPOCH,
            }),
            _ => Err(Error::InvalidPath(format!(
                "{} is not a full file name",
                path.display()
            ))),
        }
    }

    /// Snapshot of a live file: length and both timestamps are copied from its metadata.
    /// Platforms without a birth time report the modification time as creation time.
    ///
    /// # Errors
    /// `InvalidPath` for malformed paths, `Io` when the metadata can't be read.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let record = Self::from_path(path)?;
        let meta = fs::metadata(&record.path)?;
        let modified = meta.modified()?;
        let created = meta.created().unwrap_or(modified);
        Ok(record
            .with_len(meta.len())
            .with_created(created)
            .with_modified(modified))
    }

    #[must_use]
    pub const fn with_len(mut self, len: u64) -> Self {
        self.len = len;
        self
    }

    #[must_use]
    pub const fn with_created(mut self, created: SystemTime) -> Self {
        self.created = created;
        self
    }

    #[must_use]
    pub const fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = modified;
        self
    }

    /// Full path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directory.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn created(&self) -> SystemTime {
        self.created
    }

    #[must_use]
    pub const fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Checks the backing store now, not at construction time.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn splits_name_and_directory() {
        let record = FileRecord::from_path("/var/log/app.log").unwrap();
        assert_eq!(record.name(), "app.log");
        assert_eq!(record.directory(), Path::new("/var/log"));
        assert_eq!(record.path(), Path::new("/var/log/app.log"));
    }

    #[test]
    fn bare_name_is_rejected() {
        let err = FileRecord::from_path("app.log").unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)));
    }

    #[test]
    fn root_is_rejected() {
        assert!(FileRecord::from_path("/").is_err());
    }

    #[test]
    fn synthetic_attributes() {
        let t = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let record = FileRecord::from_path("/tmp/a.txt")
            .unwrap()
            .with_len(42)
            .with_created(t)
            .with_modified(t);
        assert_eq!(record.len(), 42);
        assert_eq!(record.created(), t);
        assert_eq!(record.modified(), t);
        assert!(!record.exists());
    }
}
