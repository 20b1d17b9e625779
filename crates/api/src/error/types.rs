//! Error type definitions for sorting and canonicalization

use thiserror::Error;

/// Primary error type for sorting and canonicalization
///
/// Every variant carries a static `context` naming the operation that
/// rejected its input. None of the variants carry element values, so an
/// error never reveals the content of a secret array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Array length unsupported by the selected algorithm
    #[error("{context}: unsupported size {size}")]
    InvalidSize {
        context: &'static str,
        size: usize,
    },

    /// Row or column count exceeds the fixed capacity
    #[error("{context}: capacity exceeded (capacity {capacity}, requested {requested})")]
    CapacityExceeded {
        context: &'static str,
        capacity: usize,
        requested: usize,
    },

    /// Two rows or two columns compare fully equal
    #[error("{context}: duplicate key breaks strict ordering")]
    DuplicateKey {
        context: &'static str,
    },

    /// Buffer length mismatch
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for sorting and canonicalization
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidSize { size, .. } => Self::InvalidSize { context, size },
            Self::CapacityExceeded {
                capacity,
                requested,
                ..
            } => Self::CapacityExceeded {
                context,
                capacity,
                requested,
            },
            Self::DuplicateKey { .. } => Self::DuplicateKey { context },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// The context attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidSize { context, .. }
            | Self::CapacityExceeded { context, .. }
            | Self::DuplicateKey { context }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. } => context,
        }
    }
}
