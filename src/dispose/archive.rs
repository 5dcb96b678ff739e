//! Zip archive disposal: every file becomes an entry of one new archive and is then deleted.

use super::{DEFAULT_PREFIX, DisposalResult, DisposalStrategy};
use crate::Error;
use crate::internal;
use crate::record::FileRecord;
use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// `{prefix}_{yyyyMMdd_HH-mm-ss-ffffff}.zip`: fixed width, so names sort by creation time.
#[must_use]
pub fn archive_name(prefix: &str, now: DateTime<Local>) -> String {
    format!("{prefix}_{}.zip", now.format("%Y%m%d_%H-%M-%S-%6f"))
}

/// Parameter string is the archive name prefix; empty means `paku`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipDisposal;

impl ZipDisposal {
    /// Archives `files` into a new zip in `dir`.
    ///
    /// Stops at the first missing file or I/O failure. The archive is still finalized and
    /// listed in `created` so the entries already moved into it stay readable.
    #[must_use]
    pub fn archive(dir: &Path, files: &[FileRecord], prefix: &str) -> DisposalResult {
        let mut result = DisposalResult::new();
        let archive_path = dir.join(archive_name(prefix, Local::now()));

        // create_new: never clobber an archive from an earlier run
        let container = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&archive_path)
        {
            Ok(file) => file,
            Err(e) => {
                internal::error(
                    "ZIP",
                    &format!("Cannot create {}: {e}", archive_path.display()),
                );
                result.fail(e.into());
                return result;
            }
        };
        internal::debug("ZIP", &format!("Archiving into {}", archive_path.display()));

        let mut zip = ZipWriter::new(container);
        for file in files {
            if !file.exists() {
                result.fail(Error::FileNotFound(file.path().to_path_buf()));
                break;
            }
            if let Err(e) = add_entry(&mut zip, file) {
                result.fail(e);
                break;
            }
            if let Err(e) = fs::remove_file(file.path()) {
                result.fail(e.into());
                break;
            }
            internal::trace("ZIP", &format!("Archived: {}", file.name()));
            result.record_removed(file.clone());
        }

        if let Err(e) = zip.finish() {
            result.fail(e.into());
        }

        match FileRecord::from_file(&archive_path) {
            Ok(record) => result.record_created(record),
            Err(e) => internal::warn(
                "ZIP",
                &format!("Cannot stat {}: {e}", archive_path.display()),
            ),
        }

        if let Some(err) = result.error() {
            internal::warn(
                "ZIP",
                &format!(
                    "Stopped after {} of {} files: {err}",
                    result.removed_files().len(),
                    files.len()
                ),
            );
        }

        result
    }
}

fn add_entry<W: Write + Seek>(zip: &mut ZipWriter<W>, file: &FileRecord) -> Result<(), Error> {
    let mut source = File::open(file.path())?;
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(file.len() > u64::from(u32::MAX));
    zip.start_file(file.name(), options)?;
    io::copy(&mut source, zip)?;
    Ok(())
}

impl DisposalStrategy for ZipDisposal {
    fn dispose(&self, dir: &Path, files: &[FileRecord], params: &str) -> DisposalResult {
        let prefix = match params.trim() {
            "" => DEFAULT_PREFIX,
            prefix => prefix,
        };
        Self::archive(dir, files, prefix)
    }
}
