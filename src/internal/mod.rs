//! Paku's own diagnostic logger.
//!
//! Library modules log through the free functions here. Until `init` runs every call is a
//! no-op, so the strategies stay silent when used as a library or from tests.

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use std::path::Path;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs the process logger. Only the first call takes effect.
///
/// `log_dir` enables the durable file log; callers must only pass a directory whose parent
/// (the cleanup target) is known to exist.
pub fn init(config: &Config, log_dir: Option<&Path>) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(config, log_dir));
    if !was_init {
        debug("INTERNAL", &format!("Log level: {}", config.general.level));
        if let Some(dir) = log_dir {
            debug("INTERNAL", &format!("Durable log: {}", dir.display()));
        }
    }
}

fn build_internal_logger(config: &Config, log_dir: Option<&Path>) -> Logger {
    let mut builder = Logger::builder().level(config.parse_level());

    if config.terminal.enabled {
        builder = builder.terminal().colors(config.terminal.colors).done();
    }

    if let Some(dir) = log_dir {
        builder = builder
            .file(dir)
            .prefix(&config.file.prefix)
            .timestamp_format(&config.file.timestamp_format)
            .done();
    }

    builder.build()
}

/// The installed logger, for command output that must bypass level filtering.
pub fn logger() -> Option<&'static Logger> {
    INTERNAL_LOGGER.get()
}

fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, scope, msg);
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::FileOutput;
    use std::fs;

    #[test]
    fn file_settings_reach_the_durable_log() {
        let tmp = tempfile::tempdir().unwrap();
        let log_dir = tmp.path().join("logs");
        let mut config = Config::default();
        config.terminal.enabled = false;
        config.file.prefix = "nightly".to_string();
        config.file.timestamp_format = "T".to_string();

        let logger = build_internal_logger(&config, Some(log_dir.as_path()));
        assert_eq!(logger.output_count(), 1);
        logger.warn("ZIP", "stopped early");

        let path = FileOutput::new(&log_dir).prefix("nightly").current_path();
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "T [WARN] ZIP  stopped early\n");
    }

    #[test]
    fn no_log_dir_means_no_file_output() {
        let config = Config::default();
        let logger = build_internal_logger(&config, None);
        assert_eq!(logger.output_count(), 1);
    }
}
