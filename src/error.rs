//! Unified error type for all paku operations.

use std::fmt;
use std::path::PathBuf;

/// The four failure classes a pipeline run can end in.
///
/// Variants of [`Error`] are fine-grained for messages; callers that only need to decide
/// "abort before touching anything" vs. "report partial progress" match on this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed rule string or regular expression.
    Parse,
    /// Missing or unreadable target directory.
    Selection,
    /// Unknown or duplicate alias, malformed config file or disposal payload.
    Config,
    /// File vanished or I/O failed while deleting, archiving, encrypting or uploading.
    Disposal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Parse => "parse error",
            Self::Selection => "selection error",
            Self::Config => "config error",
            Self::Disposal => "disposal error",
        })
    }
}

/// Error type for paku operations.
#[derive(Debug)]
pub enum Error {
    /// Rule string did not match its grammar.
    Parse(String),
    /// Selection regex failed to compile.
    Regex(regex::Error),
    /// Target directory missing or unreadable.
    Selection { path: PathBuf, reason: String },
    /// Generic configuration problem (bad parameter string, bad key file, ...).
    Config(String),
    /// Two strategies of the same kind registered under one alias.
    DuplicateAlias { kind: &'static str, alias: String },
    /// No strategy of this kind is registered under the alias.
    UnknownAlias { kind: &'static str, alias: String },
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Disposal payload (JSON) could not be parsed.
    Payload(serde_json::Error),
    /// A file expected on disk is gone.
    FileNotFound(PathBuf),
    /// Path has no usable directory or file name component.
    InvalidPath(String),
    /// I/O error.
    Io(std::io::Error),
    /// Zip container error.
    Archive(zip::result::ZipError),
    /// Encryption step failed.
    Encrypt(String),
    /// Remote upload failed.
    Upload(String),
}

impl Error {
    /// Collapses the variant into one of the four pipeline failure classes.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) | Self::Regex(_) => ErrorKind::Parse,
            Self::Selection { .. } => ErrorKind::Selection,
            Self::Config(_)
            | Self::DuplicateAlias { .. }
            | Self::UnknownAlias { .. }
            | Self::ConfigParse(_)
            | Self::ConfigDirNotFound
            | Self::Payload(_)
            | Self::InvalidPath(_) => ErrorKind::Config,
            Self::FileNotFound(_)
            | Self::Io(_)
            | Self::Archive(_)
            | Self::Encrypt(_)
            | Self::Upload(_) => ErrorKind::Disposal,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(s) => write!(f, "parse error: {s}"),
            Self::Regex(e) => write!(f, "invalid regex: {e}"),
            Self::Selection { path, reason } => {
                write!(f, "cannot select from {}: {reason}", path.display())
            }
            Self::Config(s) => write!(f, "config error: {s}"),
            Self::DuplicateAlias { kind, alias } => {
                write!(f, "duplicate {kind} strategy alias: {alias}")
            }
            Self::UnknownAlias { kind, alias } => {
                write!(f, "{alias} is not a valid {kind} strategy")
            }
            Self::ConfigParse(e) => write!(f, "config parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Payload(e) => write!(f, "invalid configuration payload: {e}"),
            Self::FileNotFound(p) => write!(f, "file {} does not exist", p.display()),
            Self::InvalidPath(s) => write!(f, "invalid path: {s}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Archive(e) => write!(f, "archive error: {e}"),
            Self::Encrypt(s) => write!(f, "encryption failed: {s}"),
            Self::Upload(s) => write!(f, "upload failed: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Regex(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Payload(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Archive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Self::Regex(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Payload(e)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Self::Archive(e)
    }
}
