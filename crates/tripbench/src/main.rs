//! tripbench — sequential vs threaded vs multi-process sort-and-filter benchmark.

use std::process::ExitCode;

use tripbench_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Logs go to stderr; a worker's stdout carries its response.
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tripbench_cli::ui::print_error(&format!("{err:#}"));
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
