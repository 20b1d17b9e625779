//! # lesscanon
//!
//! Canonical forms of linear-code representatives for code-equivalence
//! signatures, built on sorting routines whose execution shape does not
//! depend on the data being sorted.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! lesscanon = "0.1"
//! ```
//!
//! ## Features
//!
//! - `canon` (default): row/column canonicalization of information-set matrices
//! - `simd` (default): packed-lane sorting network, selected at runtime when available
//! - `serde`: serialization of permutations and configuration enums
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`lesscanon-api`]: error type and shared value types
//! - [`lesscanon-internal`]: constant-time building blocks
//! - [`lesscanon-params`]: LESS parameter sets
//! - [`lesscanon-algorithms`]: comparators, sorting networks, counting sort, dispatcher
//! - [`lesscanon-canon`]: row and column canonicalizers

// Core re-exports (always available)
pub use lesscanon_algorithms as algorithms;
pub use lesscanon_api as api;
pub use lesscanon_internal as internal;
pub use lesscanon_params as params;

// Feature-gated re-exports
#[cfg(feature = "canon")]
pub use lesscanon_canon as canon;

/// Common imports for lesscanon users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core types and traits
    pub use crate::api::{ElementSorter, FqElem, Permutation, Probe, Secrecy};

    // Sorting entry points
    pub use crate::algorithms::{Algorithm, Backend, Capability, SortConfig, Sorter};

    // Parameter sets
    pub use crate::params::{LessParamSet, LessParams, LESS1, LESS3, LESS5};

    #[cfg(feature = "canon")]
    pub use crate::canon::{
        canonical_form, compare_canonical, sort_columns, sort_rows, CanonConfig, CanonicalForm,
        ColumnSortMode, InfoSetMatrix, TiePolicy,
    };
}
