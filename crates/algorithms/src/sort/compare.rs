//! Total orders over field elements and rows
//!
//! These comparators branch on their inputs. They order public data and drive
//! the quicksort-class paths; the constant-time networks use
//! `lesscanon_internal::ct_lex_gt` instead.

use core::cmp::Ordering;

use lesscanon_api::FqElem;

/// Numeric order over field-element values
#[inline]
pub fn fq_cmp(a: &FqElem, b: &FqElem) -> Ordering {
    a.cmp(b)
}

/// Lexicographic order over two rows of equal width
///
/// Returns the order of the first differing pair, or `Equal` when every
/// position matches across the full width.
pub fn compare_rows(a: &[FqElem], b: &[FqElem]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        match fq_cmp(x, y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
