//! # tripbench-core
//!
//! Core library for the tripbench execution-strategy benchmark.
//! Loads the duration column, builds the nested splits, plans worker chunks,
//! and implements the sort-and-filter transform every strategy measures.

pub mod chunking;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod options;
pub mod split;
pub mod transform;
pub mod worker;

// Re-exports
pub use chunking::{merge_chunk_results, plan_chunks, ChunkResults};
pub use constants::{exit_codes, DEFAULT_COLUMN, DEFAULT_INPUT, DEFAULT_THRESHOLD, SPLIT_NAMES};
pub use dataset::Dataset;
pub use error::BenchError;
pub use options::BenchOptions;
pub use split::{splits, Split};
pub use transform::process_data;
