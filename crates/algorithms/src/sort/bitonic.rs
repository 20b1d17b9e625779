//! Bitonic sorting network
//!
//! A non-recursive bitonic sort over power-of-two lengths. The schedule of
//! compare-exchange steps is a function of the length alone; every step
//! runs a branch-free conditional swap, so the work performed is identical
//! for every input of a given length.

use lesscanon_api::error::{validate, Result};
use lesscanon_api::{FqElem, Probe};
use lesscanon_internal::constant_time::{ct_compare_exchange, ct_compare_exchange_records};
use tracing::trace;

use super::probe::NoProbe;

const LOG_TARGET: &str = "lesscanon::sort";

/// One compare-exchange of the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Lower position
    pub i: usize,
    /// Upper position
    pub j: usize,
    /// Direction: after the step `data[i] <= data[j]` when true
    pub ascending: bool,
}

/// The `(block, distance)` pairs of the network, in execution order
///
/// `block` is the size of the bitonic sequences being merged and `distance`
/// the gap between compared positions.
pub fn stages(n: usize) -> impl Iterator<Item = (usize, usize)> {
    let log = if n > 1 { n.trailing_zeros() } else { 0 };
    (1..=log).flat_map(|s| {
        let block = 1usize << s;
        (0..s).rev().map(move |t| (block, 1usize << t))
    })
}

/// Every compare-exchange of the network for length `n`, in execution order
///
/// `n` must be a power of two (or 0/1, which yield no steps).
pub fn schedule(n: usize) -> impl Iterator<Item = Step> {
    stages(n).flat_map(move |(block, distance)| {
        (0..n)
            .filter(move |&i| i & distance == 0)
            .map(move |i| Step {
                i,
                j: i | distance,
                ascending: i & block == 0,
            })
    })
}

/// Number of compare-exchanges the network performs on length `n`
pub fn compare_exchange_count(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    let log = n.trailing_zeros() as usize;
    (n / 2) * log * (log + 1) / 2
}

/// Smallest length the network accepts that holds `n` elements
pub fn padded_len(n: usize) -> usize {
    if n <= 1 {
        n
    } else {
        n.next_power_of_two()
    }
}

/// Sort `data` ascending in constant time
///
/// Fails with `InvalidSize` unless the length is a power of two (0 and 1 are accepted).
pub fn bitonic_sort(data: &mut [FqElem]) -> Result<()> {
    bitonic_sort_with_probe(data, &mut NoProbe)
}

/// Sort `data` ascending in constant time, reporting every compare-exchange to `probe`
pub fn bitonic_sort_with_probe<P: Probe>(data: &mut [FqElem], probe: &mut P) -> Result<()> {
    let n = data.len();
    validate::power_of_two("bitonic_sort", n)?;
    trace!(target: LOG_TARGET, len = n, steps = compare_exchange_count(n), "bitonic sort");

    for step in schedule(n) {
        probe.on_compare_exchange(step.i, step.j);
        ct_compare_exchange(data, step.i, step.j, step.ascending);
    }
    Ok(())
}

/// Sort a table of fixed-width byte records lexicographically in constant time
///
/// `table` holds `count` records of `width` bytes back to back; `count` must
/// be a power of two. Whole records move together, so any suffix bytes (such
/// as an original index) travel with their key.
pub fn sort_records<P: Probe>(table: &mut [u8], width: usize, probe: &mut P) -> Result<()> {
    validate::parameter(width > 0, "sort_records", "record width must be non-zero")?;
    let count = table.len() / width;
    validate::length("sort_records", table.len(), count * width)?;
    validate::power_of_two("sort_records", count)?;
    trace!(target: LOG_TARGET, records = count, width, "bitonic record sort");

    for step in schedule(count) {
        probe.on_compare_exchange(step.i, step.j);
        ct_compare_exchange_records(table, width, step.i, step.j, step.ascending);
    }
    Ok(())
}
