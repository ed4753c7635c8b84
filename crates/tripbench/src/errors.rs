//! Error handling and exit codes.

use tripbench_core::constants::exit_codes;
use tripbench_core::error::BenchError;

/// Map a benchmark error to its process exit code.
pub fn handle_error(err: &BenchError) -> i32 {
    match err {
        BenchError::Io { .. }
        | BenchError::Csv(_)
        | BenchError::MissingColumn(_)
        | BenchError::Parse { .. } => exit_codes::ERROR_INPUT,
        BenchError::Config(_) => exit_codes::ERROR_CONFIG,
        BenchError::Mismatch(_) => exit_codes::ERROR_MISMATCH,
        BenchError::Spawn(_)
        | BenchError::WorkerPanicked
        | BenchError::Worker { .. }
        | BenchError::Protocol(_) => {
            exit_codes::ERROR_GENERIC
        }
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BenchError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
