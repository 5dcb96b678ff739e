//! TOML configuration loading.
//!
//! The config file only supplies defaults: log level and outputs, plus fallback strategy
//! triples for the CLI. A missing file is not an error.

mod structs;

pub use structs::{DefaultsConfig, FileConfig, GeneralConfig, TerminalConfig};

use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    pub file: FileConfig,
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Loads `paku.toml` from the platform config directory. A platform without one
    /// gets the defaults, same as a missing file.
    ///
    /// # Errors
    /// Fails if the file exists but can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_located(Self::get_config_path())
    }

    fn load_located(path: Result<PathBuf, crate::Error>) -> Result<Self, crate::Error> {
        match path {
            Ok(path) => Self::load_from(&path),
            Err(crate::Error::ConfigDirNotFound) => {
                internal::debug("CONFIG", "No config directory, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// `~/.config/paku/paku.toml` on Linux, the platform equivalent elsewhere.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("paku").join("paku.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown level strings fall back to Info rather than failing the run.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Info)
    }

    /// Default target directory with `~` expanded, if one is configured.
    #[must_use]
    pub fn default_dir(&self) -> Option<PathBuf> {
        self.defaults
            .dir
            .as_deref()
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_dir_gives_defaults() {
        let config = Config::load_located(Err(crate::Error::ConfigDirNotFound)).unwrap();
        assert_eq!(config.file.prefix, "paku");
        assert!(config.defaults.dispose.is_none());
    }

    #[test]
    fn other_location_errors_still_fail() {
        let err = Config::load_located(Err(crate::Error::Config("boom".to_string())));
        assert!(err.is_err());
    }
}
