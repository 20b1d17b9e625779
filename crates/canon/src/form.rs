//! Canonical form of an information-set matrix
//!
//! Two pipelines are provided:
//!
//! - [`canonicalize`]: rows in lexicographic order, then the column scope in
//!   lexicographic order. Invariant under row permutations of the input.
//! - [`canonical_form`]: rows ordered by their sorted entries (a key that
//!   ignores column order), then every column in lexicographic order. When
//!   the row keys are pairwise distinct the result is invariant under any
//!   combination of row and column permutations, which is what the
//!   equivalence test relies on.
//!
//! Both report the permutations linking input and output: for every `i`
//! and every `t` in scope, `out[i][t] == in[rows[i]][cols[t]]`.

use lesscanon_algorithms::Sorter;
use lesscanon_api::error::{validate, Result, ResultExt};
use lesscanon_api::{ElementSorter, FqElem, Permutation};
use lesscanon_internal::constant_time::ct_eq;
use tracing::debug;
use zeroize::Zeroizing;

use crate::cols::sort_columns;
use crate::config::CanonConfig;
use crate::matrix::InfoSetMatrix;
use crate::rows::{sort_rows, sort_rows_by_keys};

const LOG_TARGET: &str = "lesscanon::canon";

/// Row and column permutations produced by a canonicalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalForm {
    /// Position `i` holds the original index of the row now at `i`
    pub row_permutation: Permutation,
    /// Position `t` holds the original index of the column now at `t`
    pub column_permutation: Permutation,
}

impl CanonicalForm {
    /// Rebuild the canonical matrix from the original one
    pub fn apply(&self, original: &InfoSetMatrix) -> Result<InfoSetMatrix> {
        let mut out = original.clone();
        out.permute_rows(&self.row_permutation)?;
        out.permute_columns(&self.column_permutation)?;
        Ok(out)
    }
}

/// Sort the entries of each of the first `n` rows with `sorter`
pub fn row_multiset_keys<S: ElementSorter>(
    matrix: &InfoSetMatrix,
    n: usize,
    sorter: &S,
) -> Result<Vec<Zeroizing<Vec<FqElem>>>> {
    validate::max_capacity("row_multiset_keys", n, matrix.rows())?;
    debug!(target: LOG_TARGET, rows = n, width = matrix.cols(), sorter = sorter.name(), "row multiset keys");

    (0..n)
        .map(|i| {
            let mut key = Zeroizing::new(vec![0u8; matrix.cols()]);
            sorter.sort_into(&mut key, matrix.row(i))?;
            Ok(key)
        })
        .collect()
}

/// Lexicographic rows, then lexicographic columns over the first `z`
pub fn canonicalize(
    matrix: &mut InfoSetMatrix,
    n: usize,
    z: usize,
    config: &CanonConfig,
) -> Result<CanonicalForm> {
    debug!(
        target: LOG_TARGET,
        rows = n,
        scope = z,
        mode = ?config.column_mode,
        "lexicographic canonicalization"
    );
    let row_permutation = sort_rows(matrix, n, config.row_ties).with_context("canonicalize")?;
    let column_permutation =
        sort_columns(matrix, z, config.column_mode, config.column_ties).with_context("canonicalize")?;
    Ok(CanonicalForm {
        row_permutation,
        column_permutation,
    })
}

/// Rows by multiset key, then all columns lexicographically
///
/// Fails with `DuplicateKey` under [`crate::TiePolicy::Reject`] when two
/// rows share a multiset key, even if their contents differ. Under
/// [`crate::TiePolicy::ByIndex`] such rows are ordered by their contents and
/// the form depends on the input column order.
pub fn canonical_form(
    matrix: &mut InfoSetMatrix,
    n: usize,
    config: &CanonConfig,
) -> Result<CanonicalForm> {
    let z = matrix.cols();
    debug!(
        target: LOG_TARGET,
        rows = n,
        scope = z,
        mode = ?config.column_mode,
        "multiset canonicalization"
    );
    let sorter = Sorter::new(config.sorter)?;
    let keys = row_multiset_keys(matrix, n, &sorter).with_context("canonical_form")?;
    let keys: Vec<&[FqElem]> = keys.iter().map(|k| k.as_slice()).collect();
    let row_permutation =
        sort_rows_by_keys(matrix, n, &keys, config.row_ties).with_context("canonical_form")?;
    let column_permutation =
        sort_columns(matrix, z, config.column_mode, config.column_ties).with_context("canonical_form")?;
    Ok(CanonicalForm {
        row_permutation,
        column_permutation,
    })
}

/// True when both matrices reduce to the same canonical form
///
/// Matrices of different shape are never equivalent. The final comparison
/// runs in constant time over the canonical matrices.
pub fn compare_canonical(
    a: &InfoSetMatrix,
    b: &InfoSetMatrix,
    n: usize,
    config: &CanonConfig,
) -> Result<bool> {
    if (a.rows(), a.cols(), a.q()) != (b.rows(), b.cols(), b.q()) {
        return Ok(false);
    }
    let mut ca = a.clone();
    let mut cb = b.clone();
    canonical_form(&mut ca, n, config)?;
    canonical_form(&mut cb, n, config)?;
    Ok(ct_eq(ca.as_slice(), cb.as_slice()))
}
