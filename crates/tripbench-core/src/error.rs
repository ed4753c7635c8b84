//! Error type shared by every tripbench crate.

use std::path::PathBuf;

/// Error type for loading, dispatching, and verifying a benchmark run.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The input file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The requested column is not in the header row.
    #[error("column '{0}' not found in CSV header")]
    MissingColumn(String),

    /// A cell in the duration column is not an integer.
    #[error("row {row}: '{value}' is not an integer duration")]
    Parse { row: usize, value: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A worker thread or the worker executable could not be started.
    #[error("cannot start worker: {0}")]
    Spawn(String),

    /// The single worker thread panicked before producing a result.
    #[error("worker thread panicked")]
    WorkerPanicked,

    /// A worker process failed to start, crashed, or answered garbage.
    #[error("worker {index} failed: {reason}")]
    Worker { index: usize, reason: String },

    /// A worker request or response could not be encoded or decoded.
    #[error("worker protocol error: {0}")]
    Protocol(String),

    /// Strategy outputs disagree.
    #[error("result mismatch: {0}")]
    Mismatch(String),
}

impl BenchError {
    /// Shorthand for a worker failure.
    pub fn worker(index: usize, reason: impl Into<String>) -> Self {
        Self::Worker {
            index,
            reason: reason.into(),
        }
    }
}
