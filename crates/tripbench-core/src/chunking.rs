//! Partitioning a split into per-worker chunks.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::error::BenchError;

/// Per-chunk transform outputs keyed by worker index.
pub type ChunkResults = BTreeMap<usize, Vec<i64>>;

/// Split `0..len` into `workers` contiguous ranges of `len / workers` records.
///
/// The last range absorbs the remainder. When `len < workers` every range but
/// the last is empty.
pub fn plan_chunks(len: usize, workers: usize) -> Result<Vec<Range<usize>>, BenchError> {
    if workers == 0 {
        return Err(BenchError::Config("worker count must be at least 1".into()));
    }
    let chunk_size = len / workers;
    Ok((0..workers)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i == workers - 1 {
                len
            } else {
                (i + 1) * chunk_size
            };
            start..end
        })
        .collect())
}

/// Concatenate chunk outputs in worker order and sort the result.
#[must_use]
pub fn merge_chunk_results(results: &ChunkResults) -> Vec<i64> {
    let mut merged: Vec<i64> = results.values().flatten().copied().collect();
    merged.sort_unstable();
    merged
}
