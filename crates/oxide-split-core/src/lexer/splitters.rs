//! The table of delimiters the raw splitter recognizes.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::dialect::{Dialect, GenericDialect};

static GENERIC_TABLE: LazyLock<SplitterTable> =
    LazyLock::new(|| SplitterTable::from_dialect(&GenericDialect::new()));

/// An immutable set of delimiter strings with an O(1) membership test.
#[derive(Debug, Clone)]
pub struct SplitterTable {
    /// Entries in dialect order, without duplicates.
    entries: Vec<&'static str>,
    lookup: HashSet<&'static str>,
    /// Longest entry, in bytes.
    max_len: usize,
}

impl SplitterTable {
    /// Builds the table for a dialect.
    ///
    /// Empty entries and repeated entries are dropped.
    #[must_use]
    pub fn from_dialect<D: Dialect + ?Sized>(dialect: &D) -> Self {
        let mut entries = Vec::new();
        let mut lookup = HashSet::new();
        for &splitter in dialect.splitters() {
            if !splitter.is_empty() && lookup.insert(splitter) {
                entries.push(splitter);
            }
        }
        let max_len = entries.iter().map(|s| s.len()).max().unwrap_or(0);

        Self {
            entries,
            lookup,
            max_len,
        }
    }

    /// Returns the shared table of the generic dialect.
    #[must_use]
    pub fn generic() -> &'static Self {
        &GENERIC_TABLE
    }

    /// Returns the number of bytes probed at each scan position.
    #[must_use]
    pub const fn max_token_length(&self) -> usize {
        self.max_len
    }

    /// Returns true if `candidate` is exactly one of the delimiters.
    #[must_use]
    pub fn is_delimiter(&self, candidate: &str) -> bool {
        self.lookup.contains(candidate)
    }

    /// Returns the delimiters in dialect order.
    #[must_use]
    pub fn entries(&self) -> &[&'static str] {
        &self.entries
    }
}
