use super::FilterStrategy;
use crate::Error;
use crate::record::FileRecord;

/// Hands every selected file to disposal. Parameters are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllFilter;

impl FilterStrategy for AllFilter {
    fn filter(&self, files: Vec<FileRecord>, _params: &str) -> Result<Vec<FileRecord>, Error> {
        Ok(files)
    }
}
