//! Core value types shared across the lesscanon crates
//!
//! Field elements are plain bytes; permutations are owned index vectors that
//! are zeroed on drop since they encode the secret transformation between two
//! code representatives.

use core::ops::Deref;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};

/// A field element value in `[0, q)`, with `q <= 256`
pub type FqElem = u8;

/// Whether the content being sorted must stay hidden from timing observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Secrecy {
    /// Only data-independent algorithms may touch the array
    #[default]
    Secret,
    /// The array is already public; data-dependent algorithms are allowed
    Public,
}

impl Secrecy {
    /// True when only constant-time algorithms may be selected
    pub fn is_secret(self) -> bool {
        matches!(self, Secrecy::Secret)
    }
}

/// A bijection recorded as original-index-per-position
///
/// Position `i` holds the original index of the item that now sits at `i`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// The identity permutation on `n` positions
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
        }
    }

    /// Build a permutation from an index vector, rejecting anything that is not a bijection
    pub fn from_vec(indices: Vec<usize>) -> Result<Self> {
        let perm = Self { indices };
        validate::parameter(perm.is_valid(), "Permutation::from_vec", "indices are not a bijection")?;
        Ok(perm)
    }

    /// Build without checking; callers inside the workspace construct these from sorted handles
    pub(crate) fn from_vec_unchecked(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True for the empty permutation
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// View as a slice of original indices
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Every index in `[0, len)` appears exactly once
    pub fn is_valid(&self) -> bool {
        let n = self.indices.len();
        let mut seen = vec![false; n];
        for &i in &self.indices {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    /// The inverse mapping: position of each original index
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0usize; self.indices.len()];
        for (pos, &orig) in self.indices.iter().enumerate() {
            inv[orig] = pos;
        }
        Self::from_vec_unchecked(inv)
    }

    /// Apply to a sequence: `out[i] = items[self[i]]`
    pub fn apply<T: Clone>(&self, items: &[T]) -> Result<Vec<T>> {
        validate::length("Permutation::apply", items.len(), self.indices.len())?;
        Ok(self.indices.iter().map(|&i| items[i].clone()).collect())
    }

    /// Compose: first apply `self`, then `next`
    pub fn then(&self, next: &Permutation) -> Result<Self> {
        validate::length("Permutation::then", next.len(), self.len())?;
        Ok(Self::from_vec_unchecked(
            next.indices.iter().map(|&i| self.indices[i]).collect(),
        ))
    }
}

impl Deref for Permutation {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.indices
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = Error;

    fn try_from(indices: Vec<usize>) -> Result<Self> {
        Self::from_vec(indices)
    }
}

// Permutations link secret representatives; keep them out of logs.
impl core::fmt::Debug for Permutation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Permutation(len={})", self.indices.len())
    }
}
