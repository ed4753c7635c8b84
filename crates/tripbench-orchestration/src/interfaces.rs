//! Orchestration interfaces.

use std::time::Duration;

use tripbench_core::chunking::{merge_chunk_results, ChunkResults};

/// Trait for reporting progress to the user.
pub trait ProgressReporter: Send + Sync {
    /// A split is about to be measured.
    fn split_started(&self, name: &str, rows: usize);

    /// A split has been measured by every strategy.
    fn split_finished(&self, result: &TimingResult);

    /// Report completion.
    fn complete(&self);
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the timing table.
    fn present_results(&self, results: &[TimingResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// What a strategy produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyOutput {
    /// One transformed vector.
    Single(Vec<i64>),
    /// Independently transformed chunks keyed by worker index.
    Chunked(ChunkResults),
}

impl StrategyOutput {
    /// Flatten into one ascending vector.
    #[must_use]
    pub fn merged(&self) -> Vec<i64> {
        match self {
            Self::Single(values) => values.clone(),
            Self::Chunked(chunks) => merge_chunk_results(chunks),
        }
    }
}

/// One timed strategy run.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub elapsed: Duration,
    pub output: StrategyOutput,
}

/// Timings for one split across the three strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingResult {
    /// Split name ("25%" .. "100%").
    pub split: String,
    /// Records in the split.
    pub rows: usize,
    pub sequential: Duration,
    pub threaded: Duration,
    pub multiprocess: Duration,
}

impl TimingResult {
    /// Sequential time divided by `other`, or `None` when `other` is zero.
    #[must_use]
    pub fn speedup(&self, other: Duration) -> Option<f64> {
        if other.is_zero() {
            None
        } else {
            Some(self.sequential.as_secs_f64() / other.as_secs_f64())
        }
    }
}

/// Null progress reporter (does nothing).
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {
    fn split_started(&self, _name: &str, _rows: usize) {}
    fn split_finished(&self, _result: &TimingResult) {}
    fn complete(&self) {}
}
