//! Benchmark options.

use crate::constants::DEFAULT_THRESHOLD;

/// Options shared by every strategy in a run.
#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// Values must exceed this to survive the filter.
    pub threshold: i64,
    /// Number of worker processes (0 = one per logical core).
    pub workers: usize,
    /// Cross-check strategy outputs against the sequential result.
    pub verify: bool,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            workers: 0,
            verify: false,
        }
    }
}

impl BenchOptions {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.workers == 0 {
            self.workers = logical_cores();
        }
        self
    }
}

/// Number of logical cores available to this process.
#[must_use]
pub fn logical_cores() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}
