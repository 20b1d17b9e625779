//! Column canonicalizer
//!
//! Reorders the first `z` columns of an information-set matrix into
//! ascending lexicographic order (top row most significant). Two modes share
//! one contract and agree bit-for-bit, permutation included:
//!
//! - transpose-and-bitonic: each column becomes a fixed-width record
//!   `[flag | column entries | original index]` and the record table is
//!   sorted by the bitonic network. Padding records carry flag `1` and so
//!   always sort after the real ones. Execution is independent of the
//!   matrix contents.
//! - quicksort: a comparison sort on `(column, original index)` handles.
//!   Data-dependent; only for columns that are already public.
//!
//! The trailing original index makes every record distinct, which is what
//! lets the two modes agree on the permutation when columns are equal.

use core::cmp::Ordering;

use lesscanon_algorithms::sort::bitonic::padded_len;
use lesscanon_algorithms::{compare_rows, sort_records, NoProbe};
use lesscanon_api::error::{validate, Error, Result};
use lesscanon_api::{FqElem, Permutation, Probe};
use lesscanon_internal::constant_time::ct_any_adjacent_equal;
use lesscanon_params::utils::sort::{RECORD_INDEX_BYTES, RECORD_PAD, RECORD_REAL};
use lesscanon_params::FQ_SENTINEL;
use tracing::debug;
use zeroize::Zeroizing;

use crate::config::{ColumnSortMode, TiePolicy};
use crate::matrix::InfoSetMatrix;

const LOG_TARGET: &str = "lesscanon::canon";

/// Largest scope whose column indices fit the record index field
pub const MAX_COLUMN_SCOPE: usize = 1 << (8 * RECORD_INDEX_BYTES);

/// Sort the first `z` columns of `matrix` with the given mode
///
/// Returns the column permutation: position `t` holds the original index of
/// the column now at `t`. Columns past `z` are untouched.
pub fn sort_columns(
    matrix: &mut InfoSetMatrix,
    z: usize,
    mode: ColumnSortMode,
    ties: TiePolicy,
) -> Result<Permutation> {
    match mode {
        ColumnSortMode::TransposeBitonic => col_bitonic_sort_transpose(matrix, z, ties),
        ColumnSortMode::Quicksort => col_quicksort(matrix, z, ties),
    }
}

/// Constant-time column sort: transpose, bitonic-sort column records, transpose back
pub fn col_bitonic_sort_transpose(
    matrix: &mut InfoSetMatrix,
    z: usize,
    ties: TiePolicy,
) -> Result<Permutation> {
    col_bitonic_sort_transpose_with_probe(matrix, z, ties, &mut NoProbe)
}

/// As [`col_bitonic_sort_transpose`], reporting every record compare-exchange to `probe`
pub fn col_bitonic_sort_transpose_with_probe<P: Probe>(
    matrix: &mut InfoSetMatrix,
    z: usize,
    ties: TiePolicy,
    probe: &mut P,
) -> Result<Permutation> {
    const CONTEXT: &str = "col_bitonic_sort_transpose";
    validate::max_capacity(CONTEXT, z, matrix.cols())?;
    validate::max_capacity(CONTEXT, z, MAX_COLUMN_SCOPE)?;

    let rows = matrix.rows();
    let width = 1 + rows + RECORD_INDEX_BYTES;
    let count = padded_len(z);
    debug!(target: LOG_TARGET, scope = z, rows, records = count, width, "bitonic column canonicalization");

    let mut transposed = Zeroizing::new(vec![0u8; z * rows]);
    matrix.transpose_block(z, &mut transposed)?;

    let mut table = Zeroizing::new(vec![FQ_SENTINEL; count * width]);
    for (c, record) in table.chunks_exact_mut(width).enumerate() {
        if c < z {
            record[0] = RECORD_REAL;
            record[1..1 + rows].copy_from_slice(&transposed[c * rows..(c + 1) * rows]);
        } else {
            record[0] = RECORD_PAD;
        }
        record[1 + rows..].copy_from_slice(&(c as u16).to_be_bytes());
    }

    sort_records(&mut table, width, probe)?;

    if ties == TiePolicy::Reject && bool::from(ct_any_adjacent_equal(&table, width, z, 1..1 + rows)) {
        return Err(Error::DuplicateKey { context: CONTEXT });
    }

    let mut order = Vec::with_capacity(z);
    for (t, record) in table.chunks_exact(width).take(z).enumerate() {
        transposed[t * rows..(t + 1) * rows].copy_from_slice(&record[1..1 + rows]);
        order.push(usize::from(u16::from_be_bytes([record[1 + rows], record[2 + rows]])));
    }
    matrix.write_columns_from_transposed(z, &transposed)?;
    Permutation::from_vec(order)
}

/// Data-dependent column sort on `(column, original index)` handles
pub fn col_quicksort(matrix: &mut InfoSetMatrix, z: usize, ties: TiePolicy) -> Result<Permutation> {
    validate::max_capacity("col_quicksort", z, matrix.cols())?;
    debug!(target: LOG_TARGET, scope = z, rows = matrix.rows(), "quicksort column canonicalization");

    let mut handles: Vec<(Vec<FqElem>, usize)> = (0..z).map(|c| (matrix.column(c), c)).collect();
    handles.sort_unstable_by(|a, b| compare_rows(&a.0, &b.0).then(a.1.cmp(&b.1)));

    if ties == TiePolicy::Reject
        && handles
            .windows(2)
            .any(|w| compare_rows(&w[0].0, &w[1].0) == Ordering::Equal)
    {
        return Err(Error::DuplicateKey { context: "col_quicksort" });
    }

    let perm = Permutation::from_vec(handles.into_iter().map(|(_, c)| c).collect())?;
    matrix.permute_columns(&perm)?;
    Ok(perm)
}
