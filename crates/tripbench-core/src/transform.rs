//! The sort-and-filter transform whose cost is measured.

/// Sort `values` ascending and keep only those strictly greater than `threshold`.
///
/// Every strategy runs exactly this function; the input is copied so each
/// measurement pays for its own allocation and sort.
#[must_use]
pub fn process_data(values: &[i64], threshold: i64) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let cut = sorted.partition_point(|&v| v <= threshold);
    sorted.split_off(cut)
}
