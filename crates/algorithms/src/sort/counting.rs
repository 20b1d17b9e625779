//! Counting sort over a bounded alphabet
//!
//! Linear time, stable. Both the histogram and the placement index memory by
//! element value, so the access pattern depends on the data: only use this
//! on arrays whose content is public.

use lesscanon_api::error::{validate, Result};
use lesscanon_api::FqElem;
use tracing::trace;

const LOG_TARGET: &str = "lesscanon::sort";

/// Stable counting sort of `items` by a key in `[0, alphabet)`
///
/// Returns the sorted items; equal keys keep their original relative order.
pub fn counting_sort_by_key<T, F>(items: &[T], alphabet: usize, key: F) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> usize,
{
    validate::parameter(alphabet > 0, "counting_sort", "alphabet must be non-empty")?;
    trace!(target: LOG_TARGET, len = items.len(), alphabet, "counting sort");

    let mut histogram = vec![0usize; alphabet];
    for item in items {
        let k = key(item);
        validate::parameter(k < alphabet, "counting_sort", "key outside alphabet")?;
        histogram[k] += 1;
    }

    // prefix sums: histogram[k] becomes one past the last slot for key k
    for k in 1..alphabet {
        histogram[k] += histogram[k - 1];
    }

    // walk backwards, decrementing cursors, so equal keys stay in order
    let mut slots: Vec<Option<T>> = vec![None; items.len()];
    for item in items.iter().rev() {
        let k = key(item);
        histogram[k] -= 1;
        slots[histogram[k]] = Some(item.clone());
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Sort byte-valued field elements in place, all values must lie in `[0, q)`
pub fn counting_sort(data: &mut [FqElem], q: usize) -> Result<()> {
    validate::field_size("counting_sort", q)?;
    validate::element_range("counting_sort", data, q)?;

    let mut histogram = [0usize; 256];
    for &v in data.iter() {
        histogram[usize::from(v)] += 1;
    }

    let mut pos = 0;
    for (value, &count) in histogram.iter().enumerate().take(q) {
        data[pos..pos + count].fill(value as FqElem);
        pos += count;
    }
    Ok(())
}
