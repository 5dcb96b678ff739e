//! Alias tables mapping the names used on the command line to strategy constructors.
//!
//! Tables are plain arrays compiled into the binary. Duplicates are rejected when a table is
//! built, so a bad table fails at startup rather than on some later lookup.

use crate::Error;
use crate::dispose::{
    DeleteDisposal, DisposalStrategy, EncryptDisposal, PreviewDisposal, UploadDisposal,
    ZipDisposal,
};
use crate::filter::{AgeFilter, AllFilter, CapFilter, FilterStrategy};
use crate::select::{PatternSelection, RegexSelection, SelectionStrategy};
use std::collections::HashMap;
use std::fmt::Write as _;

/// One registered implementation.
pub struct Entry<T: ?Sized> {
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub build: fn() -> Box<T>,
}

// Manual impls: a derive would require `T: Clone`.
impl<T: ?Sized> Clone for Entry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Entry<T> {}

/// Alias lookup for one strategy kind.
pub struct Registry<T: ?Sized> {
    kind: &'static str,
    entries: Vec<Entry<T>>,
    index: HashMap<String, usize>,
}

impl<T: ?Sized> Registry<T> {
    /// Aliases are matched case-insensitively.
    ///
    /// # Errors
    /// `DuplicateAlias` if any alias appears twice.
    pub fn from_entries(kind: &'static str, entries: &[Entry<T>]) -> Result<Self, Error> {
        let mut index = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            for alias in entry.aliases {
                let key = alias.to_ascii_lowercase();
                if index.insert(key.clone(), i).is_some() {
                    return Err(Error::DuplicateAlias { kind, alias: key });
                }
            }
        }

        Ok(Self {
            kind,
            entries: entries.to_vec(),
            index,
        })
    }

    /// Builds a fresh strategy for `alias`.
    ///
    /// # Errors
    /// `UnknownAlias` when nothing is registered under it.
    pub fn resolve(&self, alias: &str) -> Result<Box<T>, Error> {
        self.index
            .get(&alias.trim().to_ascii_lowercase())
            .map(|&i| (self.entries[i].build)())
            .ok_or_else(|| Error::UnknownAlias {
                kind: self.kind,
                alias: alias.to_string(),
            })
    }

    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.index.contains_key(&alias.trim().to_ascii_lowercase())
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Registration order.
    pub fn aliases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().flat_map(|e| e.aliases.iter().copied())
    }

    /// One `  - alias[, alias]: description` line per entry.
    #[must_use]
    pub fn help_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let _ = writeln!(out, "  - {}: {}", entry.aliases.join(", "), entry.description);
        }
        out
    }
}

const SELECTIONS: &[Entry<dyn SelectionStrategy>] = &[
    Entry {
        aliases: &["pattern"],
        description: "shell-style glob on the file name, e.g. pattern=*.log",
        build: || Box::new(PatternSelection),
    },
    Entry {
        aliases: &["regex"],
        description: "regular expression searched in the file name, e.g. regex=^app-\\d+",
        build: || Box::new(RegexSelection),
    },
];

const FILTERS: &[Entry<dyn FilterStrategy>] = &[
    Entry {
        aliases: &["all"],
        description: "keeps every selected file",
        build: || Box::new(AllFilter),
    },
    Entry {
        aliases: &["age"],
        description: "created/modified age threshold, e.g. age=cdate>8h or age=mdate<=30m",
        build: || Box::new(AgeFilter),
    },
    Entry {
        aliases: &["cap"],
        description: "spares the first N by name/cdate/mdate, e.g. cap=5 mdate desc",
        build: || Box::new(CapFilter),
    },
];

const DISPOSALS: &[Entry<dyn DisposalStrategy>] = &[
    Entry {
        aliases: &["delete"],
        description: "deletes the files",
        build: || Box::new(DeleteDisposal),
    },
    Entry {
        aliases: &["zip"],
        description: "moves the files into a new zip archive, e.g. zip=backup",
        build: || Box::new(ZipDisposal),
    },
    Entry {
        aliases: &["encrypt"],
        description: "zips, then encrypts for an age public key, e.g. encrypt=~/key.pub|backup",
        build: || Box::new(EncryptDisposal),
    },
    Entry {
        aliases: &["azure"],
        description: "uploads to Azure Blob Storage, then deletes, e.g. azure=~/azure.json",
        build: || Box::new(UploadDisposal::default()),
    },
    Entry {
        aliases: &["preview"],
        description: "lists the files that would be disposed of",
        build: || Box::new(PreviewDisposal),
    },
];

/// The three built-in tables.
pub struct StrategyRegistry {
    pub selection: Registry<dyn SelectionStrategy>,
    pub filter: Registry<dyn FilterStrategy>,
    pub disposal: Registry<dyn DisposalStrategy>,
}

impl StrategyRegistry {
    /// # Errors
    /// `DuplicateAlias` if a built-in table is inconsistent.
    pub fn builtin() -> Result<Self, Error> {
        Ok(Self {
            selection: Registry::from_entries("selection", SELECTIONS)?,
            filter: Registry::from_entries("filter", FILTERS)?,
            disposal: Registry::from_entries("disposal", DISPOSALS)?,
        })
    }

    /// Alias listing for `--help`.
    #[must_use]
    pub fn help_text(&self) -> String {
        format!(
            "Selection strategies (-s):\n{}\nFilter strategies (-f):\n{}\nDisposal strategies (-p):\n{}",
            self.selection.help_text(),
            self.filter.help_text(),
            self.disposal.help_text()
        )
    }
}
