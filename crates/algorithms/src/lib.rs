//! Sorting primitives with constant-time implementations
//!
//! This crate provides the sorting kernel used to compute canonical forms of
//! linear codes: a bitonic sorting network whose execution shape depends only
//! on the array length, a packed-lane variant of the same network, a counting
//! sort for public arrays, and a dispatcher that picks among them from a
//! configuration fixed at startup.
//!
//! # Security Features
//!
//! - Compare-exchange steps are branch-free conditional swaps
//! - Algorithm selection never looks at element values
//! - Scratch buffers holding secret data are zeroized on drop
//! - Every size precondition is checked and reported as a typed error

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Sorting primitives
pub mod sort;
pub use sort::{
    bitonic_sort, compare_rows, counting_sort, counting_sort_by_key, fq_cmp, sort_records,
    sorting_network, Algorithm, Backend, Capability, SortConfig, Sorter,
};
pub use sort::probe::{CountingProbe, NoProbe, Probe, TraceProbe};
