//! Public API traits and types for the lesscanon library
//!
//! This crate provides the public API surface shared by every lesscanon crate:
//! the error type, the field-element and permutation types, and the sorter
//! trait implemented by the algorithm backends.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{ElementSorter, Probe};
