//! Row canonicalizer
//!
//! Reorders the populated rows of an information-set matrix into ascending
//! lexicographic order. Each row is represented by a single handle carrying
//! its sort key and original index, so the permutation is read straight off
//! the sorted handles and cannot drift from the row order.

use core::cmp::Ordering;

use lesscanon_algorithms::compare_rows;
use lesscanon_api::error::{validate, Error, Result};
use lesscanon_api::{FqElem, Permutation};
use tracing::debug;

use crate::config::TiePolicy;
use crate::matrix::InfoSetMatrix;

const LOG_TARGET: &str = "lesscanon::canon";

/// A row reference used while sorting
#[derive(Debug, Clone, Copy)]
struct RowHandle<'a> {
    key: &'a [FqElem],
    tiebreak: &'a [FqElem],
    index: usize,
}

impl RowHandle<'_> {
    fn cmp_key(&self, other: &Self) -> Ordering {
        compare_rows(self.key, other.key).then_with(|| compare_rows(self.tiebreak, other.tiebreak))
    }
}

/// Sort the first `n` rows of `matrix` ascending in place
///
/// Returns a permutation over all `matrix.rows()` positions: position `i`
/// holds the original index of the row now at `i`. Rows past `n` keep their
/// place. Fails with `CapacityExceeded` when `n` exceeds the row capacity,
/// and with `DuplicateKey` on equal rows under [`TiePolicy::Reject`].
pub fn sort_rows(matrix: &mut InfoSetMatrix, n: usize, ties: TiePolicy) -> Result<Permutation> {
    validate::max_capacity("sort_rows", n, matrix.rows())?;
    debug!(target: LOG_TARGET, rows = n, capacity = matrix.rows(), "row canonicalization");

    let order = {
        let handles = (0..n)
            .map(|i| RowHandle {
                key: matrix.row(i),
                tiebreak: &[],
                index: i,
            })
            .collect();
        sorted_order(handles, ties, "sort_rows")?
    };
    apply_order(matrix, order)
}

/// Sort the first `n` rows by caller-supplied keys, using the rows themselves as secondary key
///
/// `keys[i]` belongs to row `i`. Under [`TiePolicy::Reject`] any two equal
/// keys are rejected, even when the rows behind them differ. Under
/// [`TiePolicy::ByIndex`] rows with equal keys are ordered by their
/// contents; when the keys are column-order independent that secondary
/// order is not, so the result is no longer invariant under column
/// permutations of the input.
pub fn sort_rows_by_keys<K: AsRef<[FqElem]>>(
    matrix: &mut InfoSetMatrix,
    n: usize,
    keys: &[K],
    ties: TiePolicy,
) -> Result<Permutation> {
    validate::max_capacity("sort_rows_by_keys", n, matrix.rows())?;
    validate::length("sort_rows_by_keys", keys.len(), n)?;
    debug!(target: LOG_TARGET, rows = n, capacity = matrix.rows(), "keyed row canonicalization");

    let order = {
        let handles = keys
            .iter()
            .enumerate()
            .map(|(i, key)| RowHandle {
                key: key.as_ref(),
                tiebreak: matrix.row(i),
                index: i,
            })
            .collect();
        sorted_order(handles, ties, "sort_rows_by_keys")?
    };
    apply_order(matrix, order)
}

fn sorted_order(mut handles: Vec<RowHandle<'_>>, ties: TiePolicy, context: &'static str) -> Result<Vec<usize>> {
    handles.sort_unstable_by(|a, b| a.cmp_key(b).then(a.index.cmp(&b.index)));

    if ties == TiePolicy::Reject
        && handles
            .windows(2)
            .any(|w| compare_rows(w[0].key, w[1].key) == Ordering::Equal)
    {
        return Err(Error::DuplicateKey { context });
    }
    Ok(handles.into_iter().map(|h| h.index).collect())
}

fn apply_order(matrix: &mut InfoSetMatrix, mut order: Vec<usize>) -> Result<Permutation> {
    order.extend(order.len()..matrix.rows());
    let perm = Permutation::from_vec(order)?;
    matrix.permute_rows(&perm)?;
    Ok(perm)
}
