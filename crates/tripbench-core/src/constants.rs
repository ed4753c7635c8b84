//! Defaults and fixed values shared across the workspace.

/// Default CSV file read at startup.
pub const DEFAULT_INPUT: &str = "train.csv";

/// Default column holding the per-record duration.
pub const DEFAULT_COLUMN: &str = "trip_duration";

/// Values must be strictly greater than this to survive the filter.
pub const DEFAULT_THRESHOLD: i64 = 1000;

/// Names of the four nested splits, smallest first.
pub const SPLIT_NAMES: [&str; 4] = ["25%", "50%", "75%", "100%"];

/// Name of the hidden subcommand a worker process is started with.
pub const WORKER_SUBCOMMAND: &str = "worker";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategy outputs disagreed during verification.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Input file missing or malformed.
    pub const ERROR_INPUT: i32 = 5;
}
