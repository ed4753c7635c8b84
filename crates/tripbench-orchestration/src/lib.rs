//! # tripbench-orchestration
//!
//! Execution strategies and the split-by-split benchmark loop.

pub mod interfaces;
pub mod orchestrator;
pub mod strategy;

pub use interfaces::{Measurement, ProgressReporter, ResultPresenter, StrategyOutput, TimingResult};
pub use orchestrator::{run_benchmark, verify_measurement, StrategySet};
pub use strategy::{MultiProcess, Sequential, Strategy, Threaded, WorkerCommand};
