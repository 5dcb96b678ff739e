//! Serde schema for `paku.toml`. Every section defaults so an empty file is valid.

use serde::Deserialize;

/// Settings that apply to every output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Terminal output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub enabled: bool,
    pub colors: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
        }
    }
}

/// Durable log kept inside the directory being cleaned.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Turned on by `--log` even when false here.
    pub enabled: bool,
    /// Subdirectory of the target directory holding the log files.
    pub dir_name: String,
    /// Log file name prefix, `{prefix}_{YYYY-MM-DD}.log`.
    pub prefix: String,
    /// strftime format of the timestamp at the start of each line.
    pub timestamp_format: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir_name: "logs".to_string(),
            prefix: "paku".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        }
    }
}

/// Fallback `alias=params` triples used when the matching CLI flag is absent.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DefaultsConfig {
    pub select: Option<String>,
    pub filter: Option<String>,
    pub dispose: Option<String>,
    /// Target directory; `~` is expanded.
    pub dir: Option<String>,
}
