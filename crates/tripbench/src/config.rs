//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tripbench_core::constants::{DEFAULT_COLUMN, DEFAULT_INPUT, DEFAULT_THRESHOLD};
use tripbench_core::options::BenchOptions;

/// tripbench — time a sort-and-filter over growing CSV splits, sequentially,
/// on one thread, and across worker processes.
#[derive(Parser, Debug)]
#[command(name = "tripbench", version, about, args_conflicts_with_subcommands = true)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// CSV file to load.
    #[arg(short, long, default_value = DEFAULT_INPUT, env = "TRIPBENCH_INPUT")]
    pub input: PathBuf,

    /// Column holding the duration values.
    #[arg(long, default_value = DEFAULT_COLUMN, env = "TRIPBENCH_COLUMN")]
    pub column: String,

    /// Keep only values strictly greater than this.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: i64,

    /// Worker processes for the multiprocessing run (0 = one per logical core).
    #[arg(short, long, default_value = "0", env = "TRIPBENCH_WORKERS")]
    pub workers: usize,

    /// Check threaded and multi-process outputs against the sequential one.
    #[arg(long)]
    pub verify: bool,

    /// Show row counts and speed-ups.
    #[arg(short, long)]
    pub details: bool,

    /// Print a JSON report instead of the table.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (table only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Transform one chunk read from stdin (used by the multiprocessing run).
    #[command(hide = true)]
    Worker,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Benchmark options with defaults applied.
    #[must_use]
    pub fn bench_options(&self) -> BenchOptions {
        BenchOptions {
            threshold: self.threshold,
            workers: self.workers,
            verify: self.verify,
        }
        .normalize()
    }
}
