//! Error handling for canonicalization
//!
//! Shares the error type of the sorting layer; [`ResultExt::with_context`]
//! re-labels a failure with the canonicalization step that surfaced it.

pub use lesscanon_api::error::{validate, Error, Result, ResultExt};

/// Result alias for canonicalization operations
pub type CanonResult<T> = Result<T>;
