//! Validation utilities for sorter and canonicalizer preconditions
//!
//! Every public sorting primitive calls into these before touching its
//! buffers, so a bad size becomes a typed error instead of a panic.

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, message));
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a power of two (0 and 1 are accepted as trivially sorted)
#[inline(always)]
pub fn power_of_two(context: &'static str, size: usize) -> Result<()> {
    if size > 1 && !size.is_power_of_two() {
        return Err(Error::InvalidSize { context, size });
    }
    Ok(())
}

/// Validate that a requested count fits a fixed capacity
#[inline(always)]
pub fn max_capacity(context: &'static str, requested: usize, capacity: usize) -> Result<()> {
    if requested > capacity {
        return Err(Error::CapacityExceeded {
            context,
            capacity,
            requested,
        });
    }
    Ok(())
}

/// Validate that every element lies in `[0, q)`
///
/// Only used on construction paths: the scan accumulates a flag over the whole
/// slice instead of returning at the first offending element.
#[inline(always)]
pub fn element_range(context: &'static str, values: &[u8], q: usize) -> Result<()> {
    let out_of_range = values
        .iter()
        .fold(false, |acc, &v| acc | (usize::from(v) >= q));
    if out_of_range {
        return Err(Error::param(context, "element outside field range"));
    }
    Ok(())
}

/// Validate a field size usable with byte-valued elements
#[inline(always)]
pub fn field_size(context: &'static str, q: usize) -> Result<()> {
    parameter(q >= 2 && q <= 256, context, "field size must lie in [2, 256]")
}
