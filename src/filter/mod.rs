//! Filter strategies narrow a selection down to the files that should be disposed of.
//!
//! The returned list is the disposal candidates, not the survivors. Filters never touch
//! the file system, so they run the same on synthetic records as on live ones.

mod age;
mod all;
mod cap;

pub use self::age::AgeFilter;
pub use self::all::AllFilter;
pub use self::cap::CapFilter;

use crate::Error;
use crate::record::FileRecord;

pub trait FilterStrategy: Send + Sync {
    /// Returns the subset of `files` that should be handed to disposal.
    ///
    /// # Errors
    /// `Parse` when `params` is not a valid rule string for this filter.
    fn filter(&self, files: Vec<FileRecord>, params: &str) -> Result<Vec<FileRecord>, Error>;
}
