//! Encrypt-archive disposal: zip everything, encrypt the zip, keep only the ciphertext.

use super::{DEFAULT_PREFIX, DisposalResult, DisposalStrategy, ZipDisposal};
use crate::Error;
use crate::crypto::{AgeEncryptor, Encryptor};
use crate::internal;
use crate::record::FileRecord;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Parsed `publicKeyPath[|prefix]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptParams {
    pub key_path: PathBuf,
    pub prefix: String,
}

impl EncryptParams {
    /// # Errors
    /// `Parse` on an empty key path or more than one `|`.
    ///
    /// # Examples
    /// ```
    /// use paku::dispose::EncryptParams;
    ///
    /// let params = EncryptParams::parse("/keys/backup.pub|nightly").unwrap();
    /// assert_eq!(params.prefix, "nightly");
    /// assert_eq!(EncryptParams::parse("/keys/backup.pub").unwrap().prefix, "paku");
    /// ```
    pub fn parse(params: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = params.split('|').map(str::trim).collect();
        let (key, prefix) = match parts.as_slice() {
            [key] => (*key, DEFAULT_PREFIX),
            [key, ""] => (*key, DEFAULT_PREFIX),
            [key, prefix] => (*key, *prefix),
            _ => {
                return Err(Error::Parse(format!(
                    "invalid encrypt parameters '{params}': expected <public key path>[|<prefix>]"
                )));
            }
        };
        if key.is_empty() {
            return Err(Error::Parse(
                "encrypt parameters need a public key path".to_string(),
            ));
        }

        Ok(Self {
            key_path: PathBuf::from(shellexpand::tilde(key).into_owned()),
            prefix: prefix.to_string(),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EncryptDisposal;

impl EncryptDisposal {
    /// Archives `files` under `prefix`, then replaces the archive with its encrypted form.
    ///
    /// An archive failure is returned as-is minus the created archive. If encryption itself
    /// fails the plain archive is kept and reported as created, so nothing already moved into it
    /// is lost.
    #[must_use]
    pub fn dispose_with(
        dir: &Path,
        files: &[FileRecord],
        prefix: &str,
        encryptor: &dyn Encryptor,
    ) -> DisposalResult {
        let (error, removed, created) = ZipDisposal::archive(dir, files, prefix).into_parts();
        if let Some(err) = error {
            return DisposalResult::from_parts(Some(err), removed, Vec::new());
        }

        let Some(archive) = created.into_iter().next() else {
            return DisposalResult::from_parts(
                Some(Error::Encrypt("archive step produced no file".to_string())),
                removed,
                Vec::new(),
            );
        };

        let mut result = DisposalResult::from_parts(None, removed, Vec::new());
        let target = dir.join(format!("{}{}", archive.name(), encryptor.suffix()));

        if let Err(e) = write_encrypted(archive.path(), &target, encryptor) {
            internal::error("ENCRYPT", &format!("{}: {e}", archive.name()));
            result.fail(e);
            result.record_created(archive);
            return result;
        }

        let encrypted = match FileRecord::from_file(&target) {
            Ok(record) => record,
            Err(e) => {
                result.fail(e);
                result.record_created(archive);
                return result;
            }
        };

        if let Err(e) = fs::remove_file(archive.path()) {
            result.fail(e.into());
            result.record_created(archive);
        }
        internal::debug("ENCRYPT", &format!("Encrypted into {}", encrypted.name()));
        result.record_created(encrypted);
        result
    }
}

fn write_encrypted(source: &Path, target: &Path, encryptor: &dyn Encryptor) -> Result<(), Error> {
    let plaintext = fs::read(source)?;
    let ciphertext = encryptor.encrypt(&plaintext)?;
    let mut out = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)?;
    out.write_all(&ciphertext)?;
    out.flush()?;
    Ok(())
}

impl DisposalStrategy for EncryptDisposal {
    fn dispose(&self, dir: &Path, files: &[FileRecord], params: &str) -> DisposalResult {
        // Key problems must surface before anything is archived and deleted.
        let loaded = EncryptParams::parse(params)
            .and_then(|p| AgeEncryptor::load(&p.key_path).map(|enc| (p.prefix, enc)));

        match loaded {
            Ok((prefix, encryptor)) => Self::dispose_with(dir, files, &prefix, &encryptor),
            Err(e) => {
                internal::error("ENCRYPT", &e.to_string());
                DisposalResult::failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_separators_is_a_parse_error() {
        let err = EncryptParams::parse("a|b|c").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Parse);
    }

    #[test]
    fn empty_key_is_a_parse_error() {
        assert!(EncryptParams::parse("|prefix").is_err());
        assert!(EncryptParams::parse("").is_err());
    }

    #[test]
    fn blank_prefix_falls_back() {
        let params = EncryptParams::parse("key.pub| ").unwrap();
        assert_eq!(params.key_path, PathBuf::from("key.pub"));
        assert_eq!(params.prefix, DEFAULT_PREFIX);
    }
}
