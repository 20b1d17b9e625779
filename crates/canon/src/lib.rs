//! Row and column canonicalization of information-set matrices
//!
//! Builds on the sorting kernel in `lesscanon-algorithms`:
//!
//! - [`sort_rows`] orders populated rows lexicographically and reports the
//!   row permutation
//! - [`sort_columns`] orders a column scope either with a constant-time
//!   record network ([`ColumnSortMode::TransposeBitonic`]) or with a
//!   comparison sort for public data ([`ColumnSortMode::Quicksort`]); both
//!   modes produce identical output
//! - [`canonical_form`] combines them into a form that is invariant under
//!   row and column permutations of the input
//!
//! Log events use the `lesscanon::canon` target and only carry shapes and
//! modes, never matrix contents.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cols;
pub mod config;
pub mod error;
pub mod form;
pub mod matrix;
pub mod rows;


pub use cols::{
    col_bitonic_sort_transpose, col_bitonic_sort_transpose_with_probe, col_quicksort, sort_columns,
    MAX_COLUMN_SCOPE,
};
pub use config::{CanonConfig, ColumnSortMode, TiePolicy};
pub use error::{CanonResult, Error, Result, ResultExt};
pub use form::{canonical_form, canonicalize, compare_canonical, row_multiset_keys, CanonicalForm};
pub use matrix::InfoSetMatrix;
pub use rows::{sort_rows, sort_rows_by_keys};
