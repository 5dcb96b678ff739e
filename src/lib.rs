#![forbid(unsafe_code)]

//! `paku` - rule-driven file retention.
//!
//! A run is three pluggable stages over one directory:
//! - **selection** picks candidate files by name (`pattern`, `regex`)
//! - **filtering** narrows them to the files to get rid of (`all`, `age`, `cap`)
//! - **disposal** acts on what's left (`delete`, `zip`, `encrypt`, `azure`, `preview`)
//!
//! # Example
//!
//! ```no_run
//! use paku::{Pipeline, StrategyRegistry};
//! use std::path::Path;
//!
//! let registry = StrategyRegistry::builtin().unwrap();
//! let pipeline = Pipeline::from_aliases(&registry, "pattern", "age", "zip").unwrap();
//! let result = pipeline
//!     .execute(Path::new("/var/log/myapp"), "*.log", "mdate>7d", "old-logs")
//!     .unwrap();
//! assert!(result.succeeded());
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `paku` binary and [`cli`] module

mod error;

pub mod config;
pub mod crypto;
pub mod dispose;
pub mod filter;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod registry;
pub mod remote;
pub mod rules;
pub mod select;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use dispose::{DisposalResult, DisposalStrategy};
pub use error::{Error, ErrorKind};
pub use filter::FilterStrategy;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use output::{FileOutput, Output, TerminalOutput};
pub use pipeline::Pipeline;
pub use record::FileRecord;
pub use registry::{Registry, StrategyRegistry};
pub use select::SelectionStrategy;
