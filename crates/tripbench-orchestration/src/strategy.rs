//! Execution strategies for the sort-and-filter transform.
//!
//! Each strategy times its own run. `Sequential` calls the transform directly,
//! `Threaded` hands it to one worker thread, and `MultiProcess` splits the
//! input across child processes speaking the JSON protocol in
//! [`tripbench_core::worker`].

use std::ffi::OsString;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::thread;
use std::time::Instant;

use parking_lot::Mutex;

use tripbench_core::chunking::{plan_chunks, ChunkResults};
use tripbench_core::constants::WORKER_SUBCOMMAND;
use tripbench_core::error::BenchError;
use tripbench_core::transform::process_data;
use tripbench_core::worker::{WorkerRequest, WorkerResponse};

use crate::interfaces::{Measurement, StrategyOutput};

/// A way of running the transform whose wall-clock cost is measured.
pub trait Strategy: Send + Sync {
    /// Run the transform over `values` and time it.
    fn run(&self, values: &[i64], threshold: i64) -> Result<Measurement, BenchError>;

    /// Column label for this strategy.
    fn name(&self) -> &str;
}

/// Direct call on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sequential;

impl Strategy for Sequential {
    fn run(&self, values: &[i64], threshold: i64) -> Result<Measurement, BenchError> {
        let start = Instant::now();
        let result = process_data(values, threshold);
        let elapsed = start.elapsed();
        Ok(Measurement {
            elapsed,
            output: StrategyOutput::Single(result),
        })
    }

    fn name(&self) -> &str {
        "Sequential"
    }
}

/// One background thread, joined before the timer stops.
#[derive(Debug, Default, Clone, Copy)]
pub struct Threaded;

impl Strategy for Threaded {
    fn run(&self, values: &[i64], threshold: i64) -> Result<Measurement, BenchError> {
        let buffer: Mutex<Vec<Vec<i64>>> = Mutex::new(Vec::with_capacity(1));

        let start = Instant::now();
        let joined = thread::scope(|s| {
            let sink = &buffer;
            let handle = thread::Builder::new()
                .name("tripbench-worker".into())
                .spawn_scoped(s, move || {
                    sink.lock().push(process_data(values, threshold));
                })
                .map_err(|e| BenchError::Spawn(format!("cannot spawn worker thread: {e}")))?;
            handle.join().map_err(|_| BenchError::WorkerPanicked)
        });
        let elapsed = start.elapsed();
        joined?;

        let result = buffer.lock().pop().ok_or(BenchError::WorkerPanicked)?;
        Ok(Measurement {
            elapsed,
            output: StrategyOutput::Single(result),
        })
    }

    fn name(&self) -> &str {
        "Threading"
    }
}

/// Program and arguments used to start one worker process.
#[derive(Debug, Clone)]
pub struct WorkerCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl WorkerCommand {
    /// Start workers as `program args...`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Re-run the current executable with the hidden worker subcommand.
    pub fn current_exe() -> Result<Self, BenchError> {
        let exe = std::env::current_exe()
            .map_err(|e| BenchError::Spawn(format!("cannot locate own executable: {e}")))?;
        Ok(Self::new(exe).arg(WORKER_SUBCOMMAND))
    }

    fn spawn(&self) -> std::io::Result<Child> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
    }
}

/// One OS process per chunk; the parent waits for all of them.
#[derive(Debug, Clone)]
pub struct MultiProcess {
    workers: usize,
    command: WorkerCommand,
}

impl MultiProcess {
    #[must_use]
    pub fn new(workers: usize, command: WorkerCommand) -> Self {
        Self { workers, command }
    }

    /// Number of worker processes per run.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }
}

type ChunkOutcome = (usize, Result<Vec<i64>, BenchError>);

impl Strategy for MultiProcess {
    fn run(&self, values: &[i64], threshold: i64) -> Result<Measurement, BenchError> {
        let plan = plan_chunks(values.len(), self.workers)?;
        let (tx, rx) = crossbeam_channel::unbounded::<ChunkOutcome>();
        let mut children: Vec<(usize, Child, thread::JoinHandle<()>)> =
            Vec::with_capacity(plan.len());

        let start = Instant::now();
        for (index, range) in plan.into_iter().enumerate() {
            let mut child = match self.command.spawn() {
                Ok(child) => child,
                Err(e) => {
                    abort_children(children);
                    return Err(BenchError::worker(index, format!("cannot start: {e}")));
                }
            };
            let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
                let _ = child.kill();
                let _ = child.wait();
                abort_children(children);
                return Err(BenchError::worker(index, "stdio not captured"));
            };

            let request = WorkerRequest {
                index,
                threshold,
                values: values[range].to_vec(),
            };
            let tx = tx.clone();
            let handle = thread::spawn(move || {
                let outcome = exchange(stdin, stdout, &request);
                let _ = tx.send((index, outcome));
            });
            children.push((index, child, handle));
        }
        drop(tx);

        let mut failure = None;
        for (index, mut child, handle) in children {
            if handle.join().is_err() && failure.is_none() {
                failure = Some(BenchError::worker(index, "reader thread panicked"));
            }
            match child.wait() {
                Ok(status) if status.success() => {}
                Ok(status) => {
                    failure.get_or_insert_with(|| {
                        BenchError::worker(index, format!("exited with {status}"))
                    });
                }
                Err(e) => {
                    failure.get_or_insert_with(|| {
                        BenchError::worker(index, format!("cannot wait: {e}"))
                    });
                }
            }
        }
        let elapsed = start.elapsed();
        if let Some(err) = failure {
            return Err(err);
        }

        let mut results = ChunkResults::new();
        for (index, outcome) in rx {
            results.insert(index, outcome?);
        }
        tracing::debug!(workers = self.workers, chunks = results.len(), "all workers joined");

        Ok(Measurement {
            elapsed,
            output: StrategyOutput::Chunked(results),
        })
    }

    fn name(&self) -> &str {
        "Multiprocessing"
    }
}

/// Send one request down `stdin`, close it, and read the response from `stdout`.
fn exchange(
    stdin: ChildStdin,
    stdout: ChildStdout,
    request: &WorkerRequest,
) -> Result<Vec<i64>, BenchError> {
    let index = request.index;
    {
        let mut writer = BufWriter::new(stdin);
        serde_json::to_writer(&mut writer, request)
            .map_err(|e| BenchError::worker(index, format!("cannot send chunk: {e}")))?;
        writer
            .flush()
            .map_err(|e| BenchError::worker(index, format!("cannot send chunk: {e}")))?;
    }

    let response: WorkerResponse = serde_json::from_reader(BufReader::new(stdout))
        .map_err(|e| BenchError::worker(index, format!("bad response: {e}")))?;
    if response.index != index {
        return Err(BenchError::worker(
            index,
            format!("answered for chunk {}", response.index),
        ));
    }
    Ok(response.values)
}

/// Kill and reap processes already started when a later spawn fails.
fn abort_children(children: Vec<(usize, Child, thread::JoinHandle<()>)>) {
    for (_, mut child, handle) in children {
        let _ = child.kill();
        let _ = child.wait();
        let _ = handle.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: [i64; 8] = [500, 1500, 200, 3000, 1000, 1001, 999, 2000];

    #[test]
    fn sequential_fixture() {
        let m = Sequential.run(&FIXTURE, 1000).unwrap();
        assert_eq!(m.output, StrategyOutput::Single(vec![1001, 1500, 2000, 3000]));
    }

    #[test]
    fn threaded_matches_sequential() {
        let values: Vec<i64> = (0..5_000).map(|i| (i * 7_919) % 4_001).collect();
        let seq = Sequential.run(&values, 1000).unwrap();
        let th = Threaded.run(&values, 1000).unwrap();
        assert_eq!(seq.output, th.output);
    }

    #[test]
    fn threaded_empty_input() {
        let m = Threaded.run(&[], 1000).unwrap();
        assert_eq!(m.output, StrategyOutput::Single(vec![]));
    }

    #[test]
    fn strategy_names() {
        assert_eq!(Sequential.name(), "Sequential");
        assert_eq!(Threaded.name(), "Threading");
        let mp = MultiProcess::new(2, WorkerCommand::new("tripbench"));
        assert_eq!(mp.name(), "Multiprocessing");
        assert_eq!(mp.workers(), 2);
    }

    #[test]
    fn multiprocess_zero_workers_is_config_error() {
        let mp = MultiProcess::new(0, WorkerCommand::new("tripbench"));
        assert!(matches!(mp.run(&FIXTURE, 1000), Err(BenchError::Config(_))));
    }

    #[test]
    fn multiprocess_missing_program() {
        let mp = MultiProcess::new(
            2,
            WorkerCommand::new("/nonexistent/tripbench-worker-binary"),
        );
        let err = mp.run(&FIXTURE, 1000).unwrap_err();
        assert!(matches!(err, BenchError::Worker { index: 0, .. }));
    }

    #[test]
    fn worker_command_builder() {
        let cmd = WorkerCommand::new("prog").arg("worker").arg("--x");
        assert_eq!(cmd.program, PathBuf::from("prog"));
        assert_eq!(cmd.args, vec![OsString::from("worker"), OsString::from("--x")]);
    }

    #[test]
    fn current_exe_appends_worker_subcommand() {
        let cmd = WorkerCommand::current_exe().unwrap();
        assert_eq!(cmd.args, vec![OsString::from(WORKER_SUBCOMMAND)]);
    }
}
