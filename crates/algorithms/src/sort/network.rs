//! Vectorized bitonic network over packed byte lanes
//!
//! Executes the same schedule as [`super::bitonic`] but resolves eight
//! compare-exchanges per word operation. Lanes of a stage are gathered in
//! schedule order, so the output and the probe trace are bit-identical to
//! the scalar network.

use lesscanon_api::error::{validate, Result};
use lesscanon_api::{FqElem, Probe};
use lesscanon_internal::lanes::{self, LANES};
use tracing::trace;

use super::bitonic::{compare_exchange_count, stages};
use super::probe::NoProbe;

const LOG_TARGET: &str = "lesscanon::sort";

/// Hardware capability relevant to the sorting backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Only the scalar network is available
    Scalar,
    /// 64-bit words are native; the packed-lane network is available
    Vectorized,
}

impl Capability {
    /// Probe the target once; callers cache the answer in their configuration
    pub fn detect() -> Self {
        if cfg!(all(feature = "simd", target_pointer_width = "64")) {
            Capability::Vectorized
        } else {
            Capability::Scalar
        }
    }
}

/// Sort `data` ascending with the packed-lane network
///
/// Same contract as [`super::bitonic::bitonic_sort`].
pub fn sorting_network(data: &mut [FqElem]) -> Result<()> {
    sorting_network_with_probe(data, &mut NoProbe)
}

/// Sort with the packed-lane network, reporting every compare-exchange to `probe`
pub fn sorting_network_with_probe<P: Probe>(data: &mut [FqElem], probe: &mut P) -> Result<()> {
    let n = data.len();
    validate::power_of_two("sorting_network", n)?;
    trace!(target: LOG_TARGET, len = n, steps = compare_exchange_count(n), "packed-lane sort");

    let mut lo_idx = [0usize; LANES];
    let mut hi_idx = [0usize; LANES];
    let mut lo = [0u8; LANES];
    let mut hi = [0u8; LANES];
    let mut desc = [0u8; LANES];

    for (block, distance) in stages(n) {
        let mut filled = 0;
        for i in (0..n).filter(|&i| i & distance == 0) {
            let j = i | distance;
            probe.on_compare_exchange(i, j);
            lo_idx[filled] = i;
            hi_idx[filled] = j;
            lo[filled] = data[i];
            hi[filled] = data[j];
            desc[filled] = if i & block == 0 { 0x00 } else { 0xFF };
            filled += 1;

            if filled == LANES {
                exchange_lanes(data, &lo_idx, &hi_idx, &lo, &hi, &desc);
                filled = 0;
            }
        }
        if filled > 0 {
            // n < 16: a stage has fewer than eight pairs
            exchange_lanes(
                data,
                &lo_idx[..filled],
                &hi_idx[..filled],
                &lo[..filled],
                &hi[..filled],
                &desc[..filled],
            );
        }
    }
    Ok(())
}

fn exchange_lanes(
    data: &mut [FqElem],
    lo_idx: &[usize],
    hi_idx: &[usize],
    lo: &[u8],
    hi: &[u8],
    desc: &[u8],
) {
    let (first, second) =
        lanes::compare_exchange(lanes::pack(lo), lanes::pack(hi), lanes::pack(desc));

    let width = lo.len();
    let mut out_lo = [0u8; LANES];
    let mut out_hi = [0u8; LANES];
    lanes::unpack(first, &mut out_lo[..width]);
    lanes::unpack(second, &mut out_hi[..width]);

    for lane in 0..width {
        data[lo_idx[lane]] = out_lo[lane];
        data[hi_idx[lane]] = out_hi[lane];
    }
}
