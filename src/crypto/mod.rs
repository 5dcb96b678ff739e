//! Public-key encryption used by the encrypt-archive disposal.

use crate::Error;
use age::x25519::Recipient;
use std::fs;
use std::path::Path;

/// Opaque "encrypt these bytes for the key holder" capability.
pub trait Encryptor {
    /// # Errors
    /// `Encrypt` when the primitive fails.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, Error>;

    /// Suffix appended to the encrypted file's name.
    fn suffix(&self) -> &str;
}

/// X25519 recipient in `age` format (`age1…`).
#[derive(Clone)]
pub struct AgeEncryptor {
    recipient: Recipient,
}

impl AgeEncryptor {
    /// Reads a public key file: the first line that is neither blank nor a `#` comment.
    /// This is the layout `age-keygen -y` writes.
    ///
    /// # Errors
    /// `Config` when the file is unreadable or holds no valid recipient.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read public key {}: {e}", path.display()))
        })?;

        let line = content
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty() && !l.starts_with('#'))
            .ok_or_else(|| Error::Config(format!("{} holds no public key", path.display())))?;

        Self::from_key(line)
    }

    /// # Errors
    /// `Config` when `key` is not an `age1…` recipient.
    pub fn from_key(key: &str) -> Result<Self, Error> {
        let recipient = key
            .parse::<Recipient>()
            .map_err(|e| Error::Config(format!("invalid public key: {e}")))?;
        Ok(Self { recipient })
    }
}

impl Encryptor for AgeEncryptor {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
        age::encrypt(&self.recipient, plaintext).map_err(|e| Error::Encrypt(e.to_string()))
    }

    fn suffix(&self) -> &str {
        ".age"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use age::x25519::Identity;

    #[test]
    fn encrypts_for_the_key_holder() {
        let identity = Identity::generate();
        let encryptor = AgeEncryptor::from_key(&identity.to_public().to_string()).unwrap();

        let ciphertext = encryptor.encrypt(b"old logs").unwrap();
        assert_ne!(ciphertext.as_slice(), b"old logs");

        let plaintext = age::decrypt(&identity, &ciphertext).unwrap();
        assert_eq!(plaintext, b"old logs");
    }

    #[test]
    fn rejects_garbage_key() {
        let err = AgeEncryptor::from_key("not-a-key").err().unwrap();
        assert_eq!(err.kind(), crate::ErrorKind::Config);
    }
}
