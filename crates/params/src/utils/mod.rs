//! Constant values shared by the sorting kernel

pub mod sort;
