//! Traits implemented by the sorting backends

pub mod probe;
pub mod sort;

pub use probe::Probe;
pub use sort::ElementSorter;
