//! Constant-time operations to prevent timing attacks
//!
//! Every function here executes the same instruction sequence for every
//! input of a given length. Comparisons produce a `subtle::Choice` and data
//! only moves through conditional selects, never through branches.

use core::ops::Range;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the input values.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Compare-exchange positions `i < j` of `data` towards the given direction
///
/// After the call `data[i] <= data[j]` when `ascending`, `data[i] >= data[j]`
/// otherwise. The direction comes from the network schedule, not the data.
#[inline]
pub fn ct_compare_exchange(data: &mut [u8], i: usize, j: usize, ascending: bool) {
    debug_assert!(i < j && j < data.len());
    let a = data[i];
    let b = data[j];
    let asc = Choice::from(ascending as u8);
    let swap = (asc & a.ct_gt(&b)) | (!asc & b.ct_gt(&a));
    let (head, tail) = data.split_at_mut(j);
    u8::conditional_swap(&mut head[i], &mut tail[0], swap);
}

/// Lexicographic "greater than" over two equal-width byte strings
///
/// Scans every position; the first differing byte decides.
pub fn ct_lex_gt(a: &[u8], b: &[u8]) -> Choice {
    debug_assert_eq!(a.len(), b.len());
    let mut gt = Choice::from(0);
    let mut undecided = Choice::from(1);
    for (x, y) in a.iter().zip(b.iter()) {
        gt |= undecided & x.ct_gt(y);
        undecided &= x.ct_eq(y);
    }
    gt
}

/// Swap two equal-width byte strings when `choice` is set
pub fn ct_swap_slices(a: &mut [u8], b: &mut [u8], choice: Choice) {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        u8::conditional_swap(x, y, choice);
    }
}

/// Compare-exchange two fixed-width records `i < j` stored back to back in `table`
pub fn ct_compare_exchange_records(
    table: &mut [u8],
    width: usize,
    i: usize,
    j: usize,
    ascending: bool,
) {
    debug_assert!(i < j);
    let (head, tail) = table.split_at_mut(j * width);
    let a = &mut head[i * width..(i + 1) * width];
    let b = &mut tail[..width];
    let asc = Choice::from(ascending as u8);
    let swap = (asc & ct_lex_gt(a, b)) | (!asc & ct_lex_gt(b, a));
    ct_swap_slices(a, b, swap);
}

/// OR together the key equality of every adjacent record pair in a table
///
/// Only the bytes in `key` of each record are compared. No early exit: the
/// result only says whether some pair matched, not which one.
pub fn ct_any_adjacent_equal(table: &[u8], width: usize, count: usize, key: Range<usize>) -> Choice {
    debug_assert!(key.end <= width);
    let mut any = Choice::from(0);
    for r in 1..count {
        let prev = &table[(r - 1) * width..r * width];
        let cur = &table[r * width..(r + 1) * width];
        any |= prev[key.clone()].ct_eq(&cur[key.clone()]);
    }
    any
}
