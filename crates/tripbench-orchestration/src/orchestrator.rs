//! The split-by-split benchmark loop and output verification.

use tripbench_core::error::BenchError;
use tripbench_core::options::BenchOptions;
use tripbench_core::split::splits;

use crate::interfaces::{Measurement, ProgressReporter, TimingResult};
use crate::strategy::Strategy;

/// The three strategies measured for every split, in column order.
pub struct StrategySet<'a> {
    pub sequential: &'a dyn Strategy,
    pub threaded: &'a dyn Strategy,
    pub multiprocess: &'a dyn Strategy,
}

/// Measure every split of `values` with every strategy.
///
/// Splits run smallest first; within a split the strategies run in column
/// order. With `opts.verify` set, the threaded and multi-process outputs are
/// checked against the sequential one.
pub fn run_benchmark(
    values: &[i64],
    strategies: &StrategySet<'_>,
    opts: &BenchOptions,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<TimingResult>, BenchError> {
    let mut results = Vec::with_capacity(4);

    for split in splits(values) {
        reporter.split_started(split.name, split.len());
        tracing::info!(split = split.name, rows = split.len(), "processing split");

        let seq = timed(strategies.sequential, split.values, opts.threshold)?;
        let th = timed(strategies.threaded, split.values, opts.threshold)?;
        let mp = timed(strategies.multiprocess, split.values, opts.threshold)?;

        if opts.verify {
            verify_measurement(split.name, &seq, strategies.threaded.name(), &th)?;
            verify_measurement(split.name, &seq, strategies.multiprocess.name(), &mp)?;
        }

        let result = TimingResult {
            split: split.name.to_string(),
            rows: split.len(),
            sequential: seq.elapsed,
            threaded: th.elapsed,
            multiprocess: mp.elapsed,
        };
        reporter.split_finished(&result);
        results.push(result);
    }

    reporter.complete();
    Ok(results)
}

fn timed(strategy: &dyn Strategy, values: &[i64], threshold: i64) -> Result<Measurement, BenchError> {
    let m = strategy.run(values, threshold)?;
    tracing::debug!(
        strategy = strategy.name(),
        rows = values.len(),
        elapsed_s = m.elapsed.as_secs_f64(),
        "strategy finished"
    );
    Ok(m)
}

/// Check that `candidate` produced the same multiset of values as `reference`.
pub fn verify_measurement(
    split: &str,
    reference: &Measurement,
    strategy: &str,
    candidate: &Measurement,
) -> Result<(), BenchError> {
    let expected = reference.output.merged();
    let actual = candidate.output.merged();
    if expected == actual {
        return Ok(());
    }
    Err(BenchError::Mismatch(format!(
        "{strategy} on split {split}: {} values, expected {}",
        actual.len(),
        expected.len()
    )))
}
