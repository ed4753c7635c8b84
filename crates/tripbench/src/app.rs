//! Application entry point and dispatch.

use std::io;

use anyhow::Result;

use tripbench_cli::presenter::{CLIProgressReporter, CLIResultPresenter, JsonResultPresenter};
use tripbench_cli::system::SystemSpecs;
use tripbench_core::constants::SPLIT_NAMES;
use tripbench_core::dataset::Dataset;
use tripbench_core::worker;
use tripbench_orchestration::interfaces::ResultPresenter;
use tripbench_orchestration::orchestrator::{run_benchmark, StrategySet};
use tripbench_orchestration::strategy::{MultiProcess, Sequential, Threaded, WorkerCommand};

use crate::config::{AppConfig, Command};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    match config.command {
        Some(Command::Worker) => run_worker(),
        None => run_cli(config),
    }
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = config.bench_options();
    let dataset = Dataset::from_path(&config.input, &config.column)?;
    tracing::info!(
        rows = dataset.len(),
        workers = opts.workers,
        threshold = opts.threshold,
        "starting benchmark"
    );

    let multiprocess = MultiProcess::new(opts.workers, WorkerCommand::current_exe()?);
    let strategies = StrategySet {
        sequential: &Sequential,
        threaded: &Threaded,
        multiprocess: &multiprocess,
    };
    let reporter = CLIProgressReporter::new(SPLIT_NAMES.len() as u64, config.quiet || config.json);
    let results = run_benchmark(&dataset.values, &strategies, &opts, &reporter)?;

    let specs = SystemSpecs::collect();
    if config.json {
        JsonResultPresenter::new(specs).present_results(&results);
    } else {
        let presenter = CLIResultPresenter::new(config.details, config.quiet);
        presenter.present_results(&results);
        presenter.present_system(&specs);
    }

    Ok(())
}

/// Child side of the multiprocessing run.
fn run_worker() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let response = worker::serve(stdin.lock(), stdout.lock())?;
    tracing::debug!(
        index = response.index,
        kept = response.values.len(),
        "worker finished chunk"
    );
    Ok(())
}
