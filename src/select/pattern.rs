use super::{SelectionStrategy, scan};
use crate::Error;
use crate::record::FileRecord;
use glob::Pattern;
use std::path::Path;

/// Shell-style glob (`*.txt`, `app-??.log`) matched against file names.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternSelection;

impl SelectionStrategy for PatternSelection {
    fn select(&self, dir: &Path, pattern: &str) -> Result<Vec<FileRecord>, Error> {
        let glob = Pattern::new(pattern)
            .map_err(|e| Error::Parse(format!("invalid glob pattern '{pattern}': {e}")))?;
        scan(dir, |name| glob.matches(name))
    }
}
