//! Information-set matrix
//!
//! A fixed-capacity grid of field elements stored row-major. The row and
//! column capacity are set at construction and never change; every entry is
//! kept in `[0, q)` by the public mutators.

use core::fmt;

use lesscanon_api::error::{validate, Result};
use lesscanon_api::{FqElem, Permutation};
use lesscanon_params::LessParamSet;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-capacity matrix of field elements
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct InfoSetMatrix {
    rows: usize,
    cols: usize,
    q: usize,
    values: Vec<FqElem>,
}

impl InfoSetMatrix {
    /// A zero matrix with `rows x cols` capacity over a field of size `q`
    pub fn new(rows: usize, cols: usize, q: usize) -> Result<Self> {
        validate::field_size("InfoSetMatrix::new", q)?;
        Ok(Self {
            rows,
            cols,
            q,
            values: vec![0; rows * cols],
        })
    }

    /// A zero `K x (N - K)` matrix for a parameter set
    pub fn for_params(params: &LessParamSet) -> Result<Self> {
        Self::new(params.k, params.is_cols(), params.q)
    }

    /// Build from rows of equal width; every value must lie in `[0, q)`
    pub fn from_rows<R: AsRef<[FqElem]>>(q: usize, rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut matrix = Self::new(rows.len(), cols, q)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            validate::length("InfoSetMatrix::from_rows", row.len(), cols)?;
            validate::element_range("InfoSetMatrix::from_rows", row, q)?;
            matrix.row_mut(i).copy_from_slice(row);
        }
        Ok(matrix)
    }

    /// Row capacity
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column capacity
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Field size
    pub fn q(&self) -> usize {
        self.q
    }

    /// Row-major view of all entries
    pub fn as_slice(&self) -> &[FqElem] {
        &self.values
    }

    /// Borrow row `i`
    pub fn row(&self, i: usize) -> &[FqElem] {
        &self.values[i * self.cols..(i + 1) * self.cols]
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [FqElem] {
        &mut self.values[i * self.cols..(i + 1) * self.cols]
    }

    /// Copy out column `c`
    pub fn column(&self, c: usize) -> Vec<FqElem> {
        (0..self.rows).map(|r| self.get(r, c)).collect()
    }

    /// Entry at row `r`, column `c`
    pub fn get(&self, r: usize, c: usize) -> FqElem {
        self.values[r * self.cols + c]
    }

    /// Set an entry, rejecting values outside the field
    pub fn set(&mut self, r: usize, c: usize, value: FqElem) -> Result<()> {
        validate::parameter(usize::from(value) < self.q, "InfoSetMatrix::set", "element outside field range")?;
        self.values[r * self.cols + c] = value;
        Ok(())
    }

    /// All rows as owned vectors
    pub fn to_rows(&self) -> Vec<Vec<FqElem>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Swap two rows in place
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let cols = self.cols;
        let (head, tail) = self.values.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Write the first `z` columns into `out` as contiguous rows
    ///
    /// `out` must hold `z * rows` entries; afterwards `out[c * rows + r]` is
    /// the entry at row `r`, column `c`.
    pub fn transpose_block(&self, z: usize, out: &mut [FqElem]) -> Result<()> {
        validate::max_capacity("InfoSetMatrix::transpose_block", z, self.cols)?;
        validate::length("InfoSetMatrix::transpose_block", out.len(), z * self.rows)?;
        for r in 0..self.rows {
            let row = self.row(r);
            for c in 0..z {
                out[c * self.rows + r] = row[c];
            }
        }
        Ok(())
    }

    /// Inverse of [`InfoSetMatrix::transpose_block`]: overwrite the first `z` columns
    pub fn write_columns_from_transposed(&mut self, z: usize, src: &[FqElem]) -> Result<()> {
        validate::max_capacity("InfoSetMatrix::write_columns_from_transposed", z, self.cols)?;
        validate::length("InfoSetMatrix::write_columns_from_transposed", src.len(), z * self.rows)?;
        let rows = self.rows;
        for r in 0..rows {
            let row = self.row_mut(r);
            for c in 0..z {
                row[c] = src[c * rows + r];
            }
        }
        Ok(())
    }

    /// Reorder rows so that new row `i` is old row `perm[i]`
    pub fn permute_rows(&mut self, perm: &Permutation) -> Result<()> {
        validate::length("InfoSetMatrix::permute_rows", perm.len(), self.rows)?;
        let mut permuted = vec![0u8; self.values.len()];
        for (i, &src) in perm.iter().enumerate() {
            permuted[i * self.cols..(i + 1) * self.cols].copy_from_slice(self.row(src));
        }
        self.values.zeroize();
        self.values = permuted;
        Ok(())
    }

    /// Reorder the first `perm.len()` columns so that new column `t` is old column `perm[t]`
    pub fn permute_columns(&mut self, perm: &Permutation) -> Result<()> {
        let z = perm.len();
        validate::max_capacity("InfoSetMatrix::permute_columns", z, self.cols)?;
        let mut scratch = vec![0u8; z];
        for r in 0..self.rows {
            let row = self.row_mut(r);
            for (t, &src) in perm.iter().enumerate() {
                scratch[t] = row[src];
            }
            row[..z].copy_from_slice(&scratch);
        }
        scratch.zeroize();
        Ok(())
    }
}

// Entries may be secret; only the shape is printed.
impl fmt::Debug for InfoSetMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoSetMatrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("q", &self.q)
            .finish_non_exhaustive()
    }
}
