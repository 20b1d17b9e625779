//! Sorting primitives for canonical forms
//!
//! - [`compare`]: element and row comparators (branching, public data)
//! - [`bitonic`]: constant-time bitonic network, scalar and record variants
//! - [`counting`]: linear-time counting sort (public data only)
//! - [`network`]: packed-lane bitonic network and capability detection
//! - [`dispatch`]: single entry point choosing among the above by configuration
//! - [`probe`]: compare-exchange instrumentation

pub mod bitonic;
pub mod compare;
pub mod counting;
pub mod dispatch;
pub mod network;
pub mod probe;


pub use bitonic::{bitonic_sort, bitonic_sort_with_probe, sort_records};
pub use compare::{compare_rows, fq_cmp};
pub use counting::{counting_sort, counting_sort_by_key};
pub use dispatch::{Algorithm, Backend, SortConfig, Sorter};
pub use network::{sorting_network, Capability};
pub use probe::{CountingProbe, NoProbe, TraceProbe};
