//! Constants for the LESS code-equivalence signature scheme
//!
//! Each parameter set fixes the field size `q`, the code length `N` and the
//! code dimension `K`. Canonicalization runs on the non-identity part of a
//! systematic generator matrix, a `K x (N - K)` information-set matrix.

/// LESS field size (all parameter sets)
pub const LESS_Q: usize = 127;

/// Common trait for LESS parameter sets
pub trait LessParams: Send + Sync + 'static {
    /// Algorithm name
    const NAME: &'static str;

    /// Field size; elements live in `[0, Q)`
    const Q: usize = LESS_Q;
    /// Code length
    const N: usize;
    /// Code dimension (row capacity of the information-set matrix)
    const K: usize;
    /// Column capacity of the information-set matrix
    const IS_COLS: usize = Self::N - Self::K;
}

/// A parameter set as a runtime value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessParamSet {
    /// Parameter set name
    pub name: &'static str,
    /// Field size
    pub q: usize,
    /// Code length
    pub n: usize,
    /// Code dimension
    pub k: usize,
}

impl LessParamSet {
    /// Column capacity of the information-set matrix
    pub const fn is_cols(&self) -> usize {
        self.n - self.k
    }

    /// Runtime view of a compile-time parameter set
    pub const fn of<P: LessParams>() -> Self {
        Self {
            name: P::NAME,
            q: P::Q,
            n: P::N,
            k: P::K,
        }
    }
}

/// LESS-1 (NIST category 1)
pub struct Less1;

impl LessParams for Less1 {
    const NAME: &'static str = "LESS-1";
    const N: usize = 252;
    const K: usize = 126;
}

/// LESS-3 (NIST category 3)
pub struct Less3;

impl LessParams for Less3 {
    const NAME: &'static str = "LESS-3";
    const N: usize = 400;
    const K: usize = 200;
}

/// LESS-5 (NIST category 5)
pub struct Less5;

impl LessParams for Less5 {
    const NAME: &'static str = "LESS-5";
    const N: usize = 548;
    const K: usize = 274;
}

/// LESS-1 parameters
pub const LESS1: LessParamSet = LessParamSet::of::<Less1>();
/// LESS-3 parameters
pub const LESS3: LessParamSet = LessParamSet::of::<Less3>();
/// LESS-5 parameters
pub const LESS5: LessParamSet = LessParamSet::of::<Less5>();
