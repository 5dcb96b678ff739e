use super::{DisposalResult, DisposalStrategy};
use crate::internal;
use crate::record::FileRecord;
use std::path::Path;

/// Dry run: lists what a destructive disposal would receive. Touches nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreviewDisposal;

impl DisposalStrategy for PreviewDisposal {
    fn dispose(&self, dir: &Path, files: &[FileRecord], _params: &str) -> DisposalResult {
        let header = format!("{} file(s) in {} would be disposed", files.len(), dir.display());

        if let Some(logger) = internal::logger() {
            logger.print("PREVIEW", &header);
            for file in files {
                logger.raw(&format!("  {}", file.path().display()));
            }
        } else {
            println!("{header}");
            for file in files {
                println!("  {}", file.path().display());
            }
        }

        DisposalResult::new()
    }
}
