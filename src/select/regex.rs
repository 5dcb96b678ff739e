use super::{SelectionStrategy, scan};
use crate::Error;
use crate::record::FileRecord;
use regex::Regex;
use std::path::Path;

/// Regular expression searched for anywhere in the file name; anchor it to match whole names.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexSelection;

impl SelectionStrategy for RegexSelection {
    fn select(&self, dir: &Path, pattern: &str) -> Result<Vec<FileRecord>, Error> {
        let re = Regex::new(pattern)?;
        scan(dir, |name| re.is_match(name))
    }
}
