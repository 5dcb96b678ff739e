//! Select, then filter, then dispose.

use crate::Error;
use crate::dispose::{DisposalResult, DisposalStrategy};
use crate::filter::FilterStrategy;
use crate::internal;
use crate::registry::StrategyRegistry;
use crate::select::SelectionStrategy;
use std::path::Path;

/// One configured run. Strategies are resolved up front so unknown aliases fail before any
/// file is touched.
pub struct Pipeline {
    selection: Box<dyn SelectionStrategy>,
    filter: Box<dyn FilterStrategy>,
    disposal: Box<dyn DisposalStrategy>,
}

impl Pipeline {
    #[must_use]
    pub fn new(
        selection: Box<dyn SelectionStrategy>,
        filter: Box<dyn FilterStrategy>,
        disposal: Box<dyn DisposalStrategy>,
    ) -> Self {
        Self {
            selection,
            filter,
            disposal,
        }
    }

    /// # Errors
    /// `UnknownAlias` for the first alias not found in its table.
    pub fn from_aliases(
        registry: &StrategyRegistry,
        selection: &str,
        filter: &str,
        disposal: &str,
    ) -> Result<Self, Error> {
        Ok(Self::new(
            registry.selection.resolve(selection)?,
            registry.filter.resolve(filter)?,
            registry.disposal.resolve(disposal)?,
        ))
    }

    /// Runs the three stages against `dir`.
    ///
    /// # Errors
    /// Only a missing `dir`, checked before anything else. Failures inside the stages are
    /// returned as a failed [`DisposalResult`].
    pub fn execute(
        &self,
        dir: &Path,
        select_params: &str,
        filter_params: &str,
        dispose_params: &str,
    ) -> Result<DisposalResult, Error> {
        if !dir.is_dir() {
            return Err(Error::Selection {
                path: dir.to_path_buf(),
                reason: "directory does not exist".to_string(),
            });
        }

        let selected = match self.selection.select(dir, select_params) {
            Ok(files) => files,
            Err(e) => return Ok(stage_failed("select", e)),
        };

        let candidates = match self.filter.filter(selected, filter_params) {
            Ok(files) => files,
            Err(e) => return Ok(stage_failed("filter", e)),
        };
        internal::info(
            "PIPELINE",
            &format!("{} file(s) to dispose of in {}", candidates.len(), dir.display()),
        );

        Ok(self.disposal.dispose(dir, &candidates, dispose_params))
    }
}

fn stage_failed(stage: &str, error: Error) -> DisposalResult {
    internal::error("PIPELINE", &format!("{stage} failed: {error}"));
    DisposalResult::failed(error)
}
