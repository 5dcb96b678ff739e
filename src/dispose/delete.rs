use super::{DisposalResult, DisposalStrategy};
use crate::Error;
use crate::internal;
use crate::record::FileRecord;
use std::fs;
use std::path::Path;

/// Deletes each file. Parameters are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeleteDisposal;

impl DisposalStrategy for DeleteDisposal {
    fn dispose(&self, _dir: &Path, files: &[FileRecord], _params: &str) -> DisposalResult {
        let mut result = DisposalResult::new();

        for file in files {
            if !file.exists() {
                result.fail(Error::FileNotFound(file.path().to_path_buf()));
                break;
            }
            if let Err(e) = fs::remove_file(file.path()) {
                result.fail(e.into());
                break;
            }
            internal::debug("DELETE", &format!("Deleted: {}", file.path().display()));
            result.record_removed(file.clone());
        }

        result
    }
}
