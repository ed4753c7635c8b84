//! # tripbench-cli
//!
//! Timing table, JSON report, progress display, and host system info.

pub mod output;
pub mod presenter;
pub mod system;
pub mod ui;

pub use presenter::{CLIProgressReporter, CLIResultPresenter, JsonResultPresenter};
pub use system::SystemSpecs;
