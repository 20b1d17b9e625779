//! Compare-exchange probes
//!
//! Used to check that a network's execution shape does not depend on the
//! data: two inputs of the same length must produce the same trace.

pub use lesscanon_api::Probe;

/// A probe that records nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProbe;

impl Probe for NoProbe {
    #[inline(always)]
    fn on_compare_exchange(&mut self, _i: usize, _j: usize) {}
}

/// Counts compare-exchange operations
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingProbe {
    /// Number of compare-exchanges observed
    pub count: usize,
}

impl Probe for CountingProbe {
    #[inline(always)]
    fn on_compare_exchange(&mut self, _i: usize, _j: usize) {
        self.count += 1;
    }
}

/// Records the full sequence of compared position pairs
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TraceProbe {
    /// Position pairs in execution order
    pub pairs: Vec<(usize, usize)>,
}

impl Probe for TraceProbe {
    fn on_compare_exchange(&mut self, i: usize, j: usize) {
        self.pairs.push((i, j));
    }
}
