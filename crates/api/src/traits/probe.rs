//! Instrumentation hook for compare-exchange networks

/// Observer notified of every compare-exchange a sorting network performs
///
/// A probe sees only the pair of positions, never the values or whether a
/// swap happened, so recording the trace cannot leak the data being sorted.
/// Probes must not influence the sort result.
pub trait Probe {
    /// Called once per compare-exchange between positions `i < j`
    fn on_compare_exchange(&mut self, i: usize, j: usize);
}

/// Forward through mutable references so callers can lend a probe
impl<P: Probe + ?Sized> Probe for &mut P {
    #[inline(always)]
    fn on_compare_exchange(&mut self, i: usize, j: usize) {
        (**self).on_compare_exchange(i, j)
    }
}
