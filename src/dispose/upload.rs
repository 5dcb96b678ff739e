//! Remote-upload disposal: copy every file to object storage, then delete the local copies.

use super::{DisposalResult, DisposalStrategy};
use crate::Error;
use crate::internal;
use crate::record::FileRecord;
use crate::remote::{AzureBlobStore, ObjectStore, UploadConfig};
use std::fs;
use std::path::{Path, PathBuf};

type Connector = fn(&UploadConfig) -> Result<Box<dyn ObjectStore>, Error>;

fn connect_azure(config: &UploadConfig) -> Result<Box<dyn ObjectStore>, Error> {
    Ok(Box::new(AzureBlobStore::connect(config)?))
}

/// Parameter string is the path to the JSON upload configuration.
///
/// Deletion only starts once every upload has succeeded; a failed upload leaves all local
/// files in place.
pub struct UploadDisposal {
    connect: Connector,
}

impl Default for UploadDisposal {
    fn default() -> Self {
        Self {
            connect: connect_azure,
        }
    }
}

impl UploadDisposal {
    /// Uses `connect` instead of the Azure backend.
    #[must_use]
    pub const fn with_connector(connect: Connector) -> Self {
        Self { connect }
    }

    /// Uploads to an already connected store.
    #[must_use]
    pub fn dispose_with(
        store: &dyn ObjectStore,
        container: &str,
        files: &[FileRecord],
    ) -> DisposalResult {
        let mut result = DisposalResult::new();

        for file in files {
            if let Err(e) = store.upload(container, file.path(), file.name()) {
                internal::error("UPLOAD", &format!("{}: {e}", file.name()));
                result.fail(e);
                return result;
            }
            internal::debug("UPLOAD", &format!("Uploaded: {}", file.name()));
        }

        for file in files {
            if !file.exists() {
                continue;
            }
            if let Err(e) = fs::remove_file(file.path()) {
                result.fail(e.into());
                break;
            }
            result.record_removed(file.clone());
        }

        result
    }
}

impl DisposalStrategy for UploadDisposal {
    fn dispose(&self, _dir: &Path, files: &[FileRecord], params: &str) -> DisposalResult {
        let config_path = PathBuf::from(shellexpand::tilde(params.trim()).into_owned());
        let connected = UploadConfig::load(&config_path)
            .and_then(|config| (self.connect)(&config).map(|store| (config, store)));

        match connected {
            Ok((config, store)) => Self::dispose_with(store.as_ref(), &config.container, files),
            Err(e) => {
                internal::error("UPLOAD", &e.to_string());
                DisposalResult::failed(e)
            }
        }
    }
}
