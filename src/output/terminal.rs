//! Colored `[LEVEL] SCOPE  message` lines on stdout, warnings and errors on stderr.

use super::{LogRecord, Output};
use crate::level::Level;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

/// Width the scope column is padded to so messages line up.
const SCOPE_WIDTH: usize = 8;

#[derive(Debug, Clone)]
pub struct TerminalOutput {
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors_enabled: true,
        }
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    const fn level_color(level: Level) -> &'static str {
        match level {
            Level::Trace | Level::Debug => "\x1b[35m",
            Level::Info => "\x1b[36m",
            Level::Warn => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    /// Rendering is split out from `write` so it can be tested without capturing stdout.
    #[must_use]
    pub fn format_record(&self, record: &LogRecord) -> String {
        let tag = format!("[{}]", record.level.tag());
        let scope = format!("{:<SCOPE_WIDTH$}", record.scope);

        if self.colors_enabled {
            let color = Self::level_color(record.level);
            format!("{color}{tag}{RESET} {DIM}{scope}{RESET}  {}", record.message)
        } else {
            format!("{tag} {scope}  {}", record.message)
        }
    }
}

impl Output for TerminalOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        if record.raw {
            writeln!(io::stdout(), "{}", record.message)?;
            return Ok(());
        }

        let formatted = self.format_record(record);

        // Warn and Error go to stderr, others to stdout
        if record.level >= Level::Warn {
            writeln!(io::stderr(), "{formatted}")?;
        } else {
            writeln!(io::stdout(), "{formatted}")?;
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(level: Level) -> LogRecord {
        LogRecord {
            level,
            scope: "ZIP".to_string(),
            message: "archived 3 files".to_string(),
            raw: false,
        }
    }

    #[test]
    fn plain_format_pads_scope() {
        let out = TerminalOutput::new().colors(false);
        assert_eq!(
            out.format_record(&record(Level::Info)),
            "[INFO] ZIP       archived 3 files"
        );
    }

    #[test]
    fn colored_format_wraps_tag() {
        let out = TerminalOutput::new();
        let line = out.format_record(&record(Level::Error));
        assert!(line.starts_with("\x1b[31m[ERROR]\x1b[0m"));
        assert!(line.ends_with("archived 3 files"));
    }
}
