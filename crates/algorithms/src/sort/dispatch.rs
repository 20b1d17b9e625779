//! Sort dispatcher
//!
//! A single entry point that copies an input array into a caller-provided
//! output buffer and sorts it. The algorithm is chosen from the
//! configuration fixed at construction and from the array length, never
//! from the values, so marking an array secret keeps the whole call
//! data-independent.
//!
//! Padding policy for secret arrays whose length is not a power of two: the
//! array is copied into a scratch buffer extended with [`FQ_SENTINEL`],
//! sorted, and the first `len` values are copied out. The sentinel is the
//! largest byte value, so the retained prefix is exactly the sorted input.

use lesscanon_api::error::{validate, Result};
use lesscanon_api::{ElementSorter, FqElem, Probe, Secrecy};
use lesscanon_params::FQ_SENTINEL;
use tracing::debug;
use zeroize::Zeroizing;

use super::bitonic::{bitonic_sort_with_probe, padded_len};
use super::counting::counting_sort;
use super::network::{sorting_network_with_probe, Capability};
use super::probe::NoProbe;

const LOG_TARGET: &str = "lesscanon::sort";

/// Which constant-time network backs the secret path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Scalar bitonic network
    Scalar,
    /// Packed-lane bitonic network
    Vectorized,
}

impl From<Capability> for Backend {
    fn from(cap: Capability) -> Self {
        match cap {
            Capability::Scalar => Backend::Scalar,
            Capability::Vectorized => Backend::Vectorized,
        }
    }
}

/// The algorithm a given call runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Data-dependent counting sort (public arrays only)
    Counting,
    /// Scalar bitonic network
    Bitonic,
    /// Packed-lane bitonic network
    Network,
}

impl Algorithm {
    /// Stable name for logs
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Counting => "counting",
            Algorithm::Bitonic => "bitonic",
            Algorithm::Network => "network",
        }
    }

    /// True when the algorithm's execution shape is independent of the data
    pub fn is_constant_time(self) -> bool {
        !matches!(self, Algorithm::Counting)
    }
}

/// Dispatcher configuration, fixed once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    /// Field size; public arrays are counting-sorted over `[0, q)`
    pub q: usize,
    /// Whether arrays handed to this sorter are secret
    pub secrecy: Secrecy,
    /// Network used for secret arrays
    pub backend: Backend,
}

impl SortConfig {
    /// Configuration with the backend chosen from the detected capability
    pub fn detect(q: usize, secrecy: Secrecy) -> Self {
        Self {
            q,
            secrecy,
            backend: Capability::detect().into(),
        }
    }

    /// Configuration pinned to the scalar network
    pub fn scalar(q: usize, secrecy: Secrecy) -> Self {
        Self {
            q,
            secrecy,
            backend: Backend::Scalar,
        }
    }

    /// Override the backend
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Override the secrecy flag
    pub fn with_secrecy(mut self, secrecy: Secrecy) -> Self {
        self.secrecy = secrecy;
        self
    }
}

/// Copies and sorts field-element arrays according to a fixed [`SortConfig`]
#[derive(Debug, Clone, Copy)]
pub struct Sorter {
    config: SortConfig,
}

impl Sorter {
    /// Build a sorter; rejects field sizes that do not fit a byte
    pub fn new(config: SortConfig) -> Result<Self> {
        validate::field_size("Sorter::new", config.q)?;
        debug!(
            target: LOG_TARGET,
            q = config.q,
            secrecy = ?config.secrecy,
            backend = ?config.backend,
            "sorter configured"
        );
        Ok(Self { config })
    }

    /// The configuration this sorter was built with
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// The algorithm used for every array handed to this sorter
    pub fn algorithm(&self) -> Algorithm {
        match (self.config.secrecy, self.config.backend) {
            (Secrecy::Public, _) => Algorithm::Counting,
            (Secrecy::Secret, Backend::Scalar) => Algorithm::Bitonic,
            (Secrecy::Secret, Backend::Vectorized) => Algorithm::Network,
        }
    }

    /// Copy `input` into `out` and sort `out` ascending
    pub fn sort(&self, out: &mut [FqElem], input: &[FqElem]) -> Result<()> {
        self.sort_with_probe(out, input, &mut NoProbe)
    }

    /// As [`Sorter::sort`], reporting network compare-exchanges to `probe`
    ///
    /// Positions reported by the probe refer to the padded scratch array.
    pub fn sort_with_probe<P: Probe>(
        &self,
        out: &mut [FqElem],
        input: &[FqElem],
        probe: &mut P,
    ) -> Result<()> {
        validate::length("Sorter::sort", out.len(), input.len())?;
        let len = input.len();
        let algorithm = self.algorithm();

        match algorithm {
            Algorithm::Counting => {
                debug!(target: LOG_TARGET, len, algorithm = algorithm.name(), "dispatch");
                out.copy_from_slice(input);
                counting_sort(out, self.config.q)
            }
            Algorithm::Bitonic | Algorithm::Network => {
                let padded = padded_len(len);
                debug!(target: LOG_TARGET, len, padded, algorithm = algorithm.name(), "dispatch");

                if padded == len {
                    out.copy_from_slice(input);
                    return run_network(algorithm, out, probe);
                }

                let mut scratch = Zeroizing::new(vec![FQ_SENTINEL; padded]);
                scratch[..len].copy_from_slice(input);
                run_network(algorithm, &mut scratch, probe)?;
                out.copy_from_slice(&scratch[..len]);
                Ok(())
            }
        }
    }
}

fn run_network<P: Probe>(algorithm: Algorithm, data: &mut [FqElem], probe: &mut P) -> Result<()> {
    match algorithm {
        Algorithm::Network => sorting_network_with_probe(data, probe),
        _ => bitonic_sort_with_probe(data, probe),
    }
}

impl ElementSorter for Sorter {
    fn name(&self) -> &'static str {
        self.algorithm().name()
    }

    fn sort_into(&self, out: &mut [FqElem], input: &[FqElem]) -> Result<()> {
        self.sort(out, input)
    }
}
