//! Rank cap filter (`5 cdate desc`): the first N files of the ordering are spared,
//! everything past the cap is returned.

use super::FilterStrategy;
use crate::Error;
use crate::internal;
use crate::record::FileRecord;
use crate::rules::{CapRule, SortField, SortOrder};
use std::cmp::Ordering;

#[derive(Debug, Default, Clone, Copy)]
pub struct CapFilter;

impl CapFilter {
    /// Stable-sorts by the rule's field and order, then skips the first `count`.
    /// Equal keys keep their input order in both directions. Names compare case-insensitively,
    /// with byte order breaking ties between names that differ only in case.
    #[must_use]
    pub fn apply(mut files: Vec<FileRecord>, rule: &CapRule) -> Vec<FileRecord> {
        let compare = |a: &FileRecord, b: &FileRecord| -> Ordering {
            match rule.field {
                SortField::Created => a.created().cmp(&b.created()),
                SortField::Modified => a.modified().cmp(&b.modified()),
                SortField::Name => compare_names(a.name(), b.name()),
            }
        };

        match rule.order {
            SortOrder::Asc => files.sort_by(compare),
            SortOrder::Desc => files.sort_by(|a, b| compare(b, a)),
        }

        files.into_iter().skip(rule.count).collect()
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

impl FilterStrategy for CapFilter {
    fn filter(&self, files: Vec<FileRecord>, params: &str) -> Result<Vec<FileRecord>, Error> {
        let rule: CapRule = params.parse()?;
        let total = files.len();
        let beyond = Self::apply(files, &rule);
        internal::debug(
            "FILTER",
            &format!(
                "cap '{params}' spared {} of {total} files",
                total - beyond.len()
            ),
        );
        Ok(beyond)
    }
}
