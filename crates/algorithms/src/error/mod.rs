//! Error handling for sorting primitives
//!
//! The sorting crate shares the API error type so that failures surface to
//! the calling signature operation unchanged.

pub use lesscanon_api::error::{validate, Error, ResultExt, Result};
