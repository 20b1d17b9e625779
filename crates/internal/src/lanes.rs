//! Packed byte lanes: eight field elements per 64-bit word
//!
//! The vectorized sorting network loads eight compare-exchange operands into
//! one word and resolves all eight comparisons with a fixed sequence of
//! word-wide arithmetic. Bytes never interact across lane boundaries.

/// Number of byte lanes in one word
pub const LANES: usize = 8;

const HIGH: u64 = 0x8080_8080_8080_8080;
const LOW: u64 = !HIGH;

/// Pack up to eight bytes into a word, lane 0 in the least significant byte
///
/// Missing lanes are zero.
#[inline]
pub fn pack(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= LANES);
    let mut buf = [0u8; LANES];
    buf[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

/// Unpack the first `out.len()` lanes of a word
#[inline]
pub fn unpack(word: u64, out: &mut [u8]) {
    debug_assert!(out.len() <= LANES);
    let buf = word.to_le_bytes();
    out.copy_from_slice(&buf[..out.len()]);
}

/// Per-lane `a >= b` as a mask: 0xFF where true, 0x00 where false
#[inline]
pub fn ge_mask(a: u64, b: u64) -> u64 {
    // low seven bits: (0x80 | a_lo) - b_lo never borrows out of its lane
    let low_ge = (a | HIGH).wrapping_sub(b & LOW);
    let diff = a ^ b;
    // where the top bits differ, a's top bit decides
    let ge = ((diff & a) | (!diff & low_ge)) & HIGH;
    (ge >> 7).wrapping_mul(0xFF)
}

/// Per-lane minimum and maximum
#[inline]
pub fn minmax(a: u64, b: u64) -> (u64, u64) {
    let m = ge_mask(a, b);
    let lo = (b & m) | (a & !m);
    let hi = (a & m) | (b & !m);
    (lo, hi)
}

/// Per-lane compare-exchange with a per-lane direction mask
///
/// `descending` holds 0xFF in lanes that sort high-to-low. Returns the new
/// `(first, second)` operands.
#[inline]
pub fn compare_exchange(a: u64, b: u64, descending: u64) -> (u64, u64) {
    let (lo, hi) = minmax(a, b);
    let first = (lo & !descending) | (hi & descending);
    let second = (hi & !descending) | (lo & descending);
    (first, second)
}
