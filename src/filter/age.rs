//! Age threshold filter (`cdate>8h`, `mdate<=30m`).

use super::FilterStrategy;
use crate::Error;
use crate::internal;
use crate::record::FileRecord;
use crate::rules::{AgeRule, DateField};
use std::time::SystemTime;

#[derive(Debug, Default, Clone, Copy)]
pub struct AgeFilter;

impl AgeFilter {
    /// Same as [`FilterStrategy::filter`] with an explicit clock, so callers and tests
    /// can pin "now".
    #[must_use]
    pub fn filter_at(files: Vec<FileRecord>, rule: &AgeRule, now: SystemTime) -> Vec<FileRecord> {
        files
            .into_iter()
            .filter(|file| matches(file, rule, now))
            .collect()
    }
}

/// Decision for one record.
///
/// Future-dated files never match. An age of exactly zero is decided by the operator alone
/// (`=`, `>=`, `<=` match, `<` and `>` don't) so clock resolution can't flip the outcome.
/// A non-zero age never satisfies `=`: only the strict `<`/`>` halves of `<=`/`>=` apply.
fn matches(file: &FileRecord, rule: &AgeRule, now: SystemTime) -> bool {
    let stamp = match rule.field {
        DateField::Created => file.created(),
        DateField::Modified => file.modified(),
    };

    let Ok(age) = now.duration_since(stamp) else {
        internal::trace("FILTER", &format!("Skipping future-dated {}", file.name()));
        return false;
    };

    if age.is_zero() {
        return rule.comparator.accepts_zero();
    }

    #[allow(clippy::cast_precision_loss)]
    let threshold = rule.threshold_secs() as f64;
    let age_secs = age.as_secs_f64();

    (age_secs > threshold && rule.comparator.accepts_older())
        || (age_secs < threshold && rule.comparator.accepts_younger())
}

impl FilterStrategy for AgeFilter {
    fn filter(&self, files: Vec<FileRecord>, params: &str) -> Result<Vec<FileRecord>, Error> {
        let rule: AgeRule = params.parse()?;
        let total = files.len();
        let kept = Self::filter_at(files, &rule, SystemTime::now());
        internal::debug(
            "FILTER",
            &format!("age '{params}' matched {} of {total} files", kept.len()),
        );
        Ok(kept)
    }
}
