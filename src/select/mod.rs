//! Selection strategies pick candidate files from one directory level by name.

mod pattern;
mod regex;

pub use self::pattern::PatternSelection;
pub use self::regex::RegexSelection;

use crate::Error;
use crate::internal;
use crate::record::FileRecord;
use std::fs;
use std::path::Path;

pub trait SelectionStrategy: Send + Sync {
    /// Non-recursive scan of `dir`; order is whatever the file system enumerates.
    ///
    /// # Errors
    /// `Selection` when `dir` is missing or unreadable, `Parse`/`Regex` for a bad pattern.
    fn select(&self, dir: &Path, pattern: &str) -> Result<Vec<FileRecord>, Error>;
}

/// Shared directory walk: regular files whose name satisfies `accept`.
fn scan(dir: &Path, accept: impl Fn(&str) -> bool) -> Result<Vec<FileRecord>, Error> {
    if !dir.is_dir() {
        return Err(Error::Selection {
            path: dir.to_path_buf(),
            reason: "directory does not exist".to_string(),
        });
    }

    let unreadable = |e: std::io::Error| Error::Selection {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !accept(name) {
            continue;
        }
        match FileRecord::from_file(&path) {
            Ok(record) => {
                internal::trace("SELECT", &format!("Selected: {}", path.display()));
                files.push(record);
            }
            // Vanished between enumeration and stat; nothing to dispose of
            Err(e) => internal::debug("SELECT", &format!("Skipping {}: {e}", path.display())),
        }
    }

    internal::debug(
        "SELECT",
        &format!("Selected {} files in {}", files.len(), dir.display()),
    );
    Ok(files)
}
