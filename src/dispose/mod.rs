//! Disposal strategies: the destructive last stage.
//!
//! Every strategy walks its input in order and stops at the first failure. Work already done
//! (deleted files, archive entries) is never rolled back; it is reported through
//! [`DisposalResult`] instead.

mod archive;
mod delete;
mod encrypt;
mod preview;
mod result;
mod upload;

pub use archive::{ZipDisposal, archive_name};
pub use delete::DeleteDisposal;
pub use encrypt::{EncryptDisposal, EncryptParams};
pub use preview::PreviewDisposal;
pub use result::{DisposalResult, format_size};
pub use upload::UploadDisposal;

use crate::record::FileRecord;
use std::path::Path;

/// Default prefix for generated archives.
pub const DEFAULT_PREFIX: &str = "paku";

pub trait DisposalStrategy: Send + Sync {
    /// Disposes of `files` (which live in `dir`). Never panics and never returns early without
    /// a result: failures are recorded on the returned value.
    fn dispose(&self, dir: &Path, files: &[FileRecord], params: &str) -> DisposalResult;
}
