//! `paku` binary: a thin wrapper over [`paku::cli::run`].
//!
//! Usage:
//!   paku -s pattern=*.log -f age=mdate>7d -p zip=old-logs [-d DIR] [-l]

use std::process::ExitCode;

fn main() -> ExitCode {
    paku::cli::run()
}
