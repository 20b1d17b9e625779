//! Sorting trait shared by the dispatcher and its backends

use crate::{FqElem, Result};

/// A sorter for arrays of field elements
pub trait ElementSorter {
    /// Returns the name of this sorting strategy
    fn name(&self) -> &'static str;

    /// Sort `input` ascending into `out`; both slices must have equal length
    fn sort_into(&self, out: &mut [FqElem], input: &[FqElem]) -> Result<()>;

    /// Sort a slice in place
    fn sort_in_place(&self, data: &mut [FqElem]) -> Result<()> {
        let input = data.to_vec();
        self.sort_into(data, &input)
    }
}
