//! Canonicalization configuration
//!
//! A [`CanonConfig`] is fixed once per signing or verification context and
//! passed by reference to every canonicalization call.

use lesscanon_algorithms::SortConfig;
use lesscanon_api::Secrecy;

/// How the column scope is reordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnSortMode {
    /// Transpose, sort the columns as records with the bitonic network, transpose back
    ///
    /// Constant time in the matrix contents.
    TransposeBitonic,
    /// Comparison sort on column handles; only for columns that are already public
    Quicksort,
}

/// What to do when two keys compare fully equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TiePolicy {
    /// Fail with `DuplicateKey`
    Reject,
    /// Order equal keys by their original index
    ByIndex,
}

/// Settings for the row and column canonicalizers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonConfig {
    /// Column reordering strategy
    pub column_mode: ColumnSortMode,
    /// Policy for equal rows
    pub row_ties: TiePolicy,
    /// Policy for equal columns
    pub column_ties: TiePolicy,
    /// Sorter used for per-row multiset keys
    pub sorter: SortConfig,
}

impl CanonConfig {
    /// Settings for matrices derived from secret data
    pub fn secret(q: usize) -> Self {
        Self {
            column_mode: ColumnSortMode::TransposeBitonic,
            row_ties: TiePolicy::Reject,
            column_ties: TiePolicy::ByIndex,
            sorter: SortConfig::detect(q, Secrecy::Secret),
        }
    }

    /// Settings for public verification data
    pub fn public(q: usize) -> Self {
        Self {
            column_mode: ColumnSortMode::Quicksort,
            sorter: SortConfig::detect(q, Secrecy::Public),
            ..Self::secret(q)
        }
    }

    /// Replace the column mode
    pub fn with_column_mode(mut self, mode: ColumnSortMode) -> Self {
        self.column_mode = mode;
        self
    }

    /// Replace the row tie policy
    pub fn with_row_ties(mut self, ties: TiePolicy) -> Self {
        self.row_ties = ties;
        self
    }

    /// Replace the column tie policy
    pub fn with_column_ties(mut self, ties: TiePolicy) -> Self {
        self.column_ties = ties;
        self
    }

    /// Replace the sorter configuration
    pub fn with_sorter(mut self, sorter: SortConfig) -> Self {
        self.sorter = sorter;
        self
    }
}

impl Default for CanonConfig {
    fn default() -> Self {
        Self::secret(lesscanon_params::pqc::less::LESS_Q)
    }
}
