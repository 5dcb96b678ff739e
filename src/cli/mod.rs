//! Command-line front end.
//!
//! Flags take `alias=params` triples; anything missing falls back to `[defaults]` in
//! `paku.toml`. Nothing is logged or touched until the target directory is known to exist.

use crate::Error;
use crate::config::Config;
use crate::internal;
use crate::pipeline::Pipeline;
use crate::registry::StrategyRegistry;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

const SUCCESS: u8 = 0;
/// Disposal failed or the target directory is missing.
const FAILURE: u8 = 1;
/// Usage and configuration errors.
const USAGE_ERROR: u8 = 2;

/// paku - select, filter and dispose of files in a directory.
#[derive(Debug, Parser)]
#[command(
    name = "paku",
    version,
    about = "Select, filter and dispose of files in a directory"
)]
pub struct Cli {
    /// Selection strategy, e.g. pattern=*.log
    #[arg(short, long, value_name = "ALIAS=PARAMS")]
    pub select: Option<String>,

    /// Filter strategy, e.g. age=cdate>7d
    #[arg(short, long, value_name = "ALIAS=PARAMS")]
    pub filter: Option<String>,

    /// Disposal strategy, e.g. zip=backup
    #[arg(short = 'p', long, value_name = "ALIAS=PARAMS")]
    pub dispose: Option<String>,

    /// Target directory (default: current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Also log to <dir>/logs
    #[arg(short, long)]
    pub log: bool,
}

/// Splits `alias=params`. A bare `alias` has empty params.
///
/// # Errors
/// `Parse` when the alias part is empty.
///
/// # Examples
/// ```
/// use paku::cli::parse_triple;
///
/// assert_eq!(parse_triple("age=cdate>8h").unwrap(), ("age", "cdate>8h"));
/// assert_eq!(parse_triple("regex=^a=b$").unwrap(), ("regex", "^a=b$"));
/// assert_eq!(parse_triple("delete").unwrap(), ("delete", ""));
/// ```
pub fn parse_triple(arg: &str) -> Result<(&str, &str), Error> {
    let (alias, params) = arg.split_once('=').unwrap_or((arg, ""));
    let alias = alias.trim();
    if alias.is_empty() {
        return Err(Error::Parse(format!("'{arg}' has no strategy alias")));
    }
    Ok((alias, params))
}

fn parse_triples<'a>(args: [&'a str; 3]) -> Result<[(&'a str, &'a str); 3], Error> {
    let [select, filter, dispose] = args;
    Ok([parse_triple(select)?, parse_triple(filter)?, parse_triple(dispose)?])
}

/// Parses the process arguments and runs one pipeline.
#[must_use]
pub fn run() -> ExitCode {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::from(USAGE_ERROR);
        }
    };

    ExitCode::from(run_with(std::env::args_os(), &config))
}

/// Runs one pipeline from `args` (program name first) and returns the process exit status:
/// 0 when the disposal succeeded, 1 when it failed or the directory is missing, 2 for usage
/// and configuration errors.
#[must_use]
pub fn run_with<I, T>(args: I, config: &Config) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let registry = match StrategyRegistry::builtin() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            return USAGE_ERROR;
        }
    };

    let mut command = Cli::command().after_help(registry.help_text());
    let parsed = command
        .clone()
        .try_get_matches_from(args)
        .and_then(|matches| Cli::from_arg_matches(&matches));
    let cli = match parsed {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { USAGE_ERROR } else { SUCCESS };
        }
    };

    let select = cli.select.or_else(|| config.defaults.select.clone());
    let filter = cli.filter.or_else(|| config.defaults.filter.clone());
    let dispose = cli.dispose.or_else(|| config.defaults.dispose.clone());

    let (Some(select), Some(filter), Some(dispose)) = (select, filter, dispose) else {
        println!("Missing required option: --select, --filter and --dispose are all needed.\n");
        println!("{}", command.render_help());
        return USAGE_ERROR;
    };

    let triples = match parse_triples([select.as_str(), filter.as_str(), dispose.as_str()]) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            return USAGE_ERROR;
        }
    };
    let [select, filter, dispose] = triples;

    let pipeline = match Pipeline::from_aliases(&registry, select.0, filter.0, dispose.0) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            return USAGE_ERROR;
        }
    };

    let dir = match cli.dir.or_else(|| config.default_dir()) {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: cannot determine current directory: {e}");
                return FAILURE;
            }
        },
    };

    // The durable log lives inside the target, so it must not be set up for a missing one
    if !dir.is_dir() {
        eprintln!("Error: directory {} does not exist", dir.display());
        return FAILURE;
    }

    let log_dir = (cli.log || config.file.enabled).then(|| dir.join(&config.file.dir_name));
    internal::init(config, log_dir.as_deref());
    internal::debug(
        "CLI",
        &format!("{} -> {} -> {} in {}", select.0, filter.0, dispose.0, dir.display()),
    );

    let code = match pipeline.execute(&dir, select.1, filter.1, dispose.1) {
        Ok(result) => {
            if let Some(logger) = internal::logger() {
                result.log(logger);
            }
            if result.succeeded() { SUCCESS } else { FAILURE }
        }
        Err(e) => {
            internal::error("CLI", &e.to_string());
            FAILURE
        }
    };

    if let Some(logger) = internal::logger()
        && let Err(e) = logger.flush()
    {
        eprintln!("Error flushing log: {e}");
    }
    code
}
