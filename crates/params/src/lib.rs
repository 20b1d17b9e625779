//! Constant values for lesscanon
//!
//! Parameter sets of the code-equivalence signature scheme and the constants
//! the sorting kernel derives from them.

#![no_std]

pub mod pqc;
pub mod utils;

pub use pqc::less::{LessParamSet, LessParams, Less1, Less3, Less5, LESS1, LESS3, LESS5};
pub use utils::sort::FQ_SENTINEL;
