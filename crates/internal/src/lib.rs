//! Internal utilities for the lesscanon library
//!
//! Constant-time building blocks shared by the sorting networks. Nothing in
//! this crate branches on the values it is given.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod lanes;

pub use constant_time::{
    ct_any_adjacent_equal, ct_compare_exchange, ct_compare_exchange_records, ct_eq, ct_lex_gt,
    ct_swap_slices,
};
