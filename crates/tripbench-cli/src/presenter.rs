//! CLI result presenters and progress reporter.

use indicatif::{ProgressBar, ProgressStyle};

use tripbench_orchestration::interfaces::{ProgressReporter, ResultPresenter, TimingResult};

use crate::output::{format_duration, format_number, render_table, Report};
use crate::system::SystemSpecs;
use crate::ui::{print_error, print_header};

/// Prints the timing table and system info as text.
pub struct CLIResultPresenter {
    details: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(details: bool, quiet: bool) -> Self {
        Self { details, quiet }
    }

    /// Print processor, RAM, and core count.
    pub fn present_system(&self, specs: &SystemSpecs) {
        if self.quiet {
            return;
        }
        print_header("System Info");
        for line in specs.lines() {
            println!("{line}");
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_results(&self, results: &[TimingResult]) {
        if !self.quiet {
            print_header("Performance Comparison");
        }
        print!("{}", render_table(results, self.details));
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Prints one JSON document holding the results and the host specs.
pub struct JsonResultPresenter {
    system: SystemSpecs,
}

impl JsonResultPresenter {
    #[must_use]
    pub fn new(system: SystemSpecs) -> Self {
        Self { system }
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_results(&self, results: &[TimingResult]) {
        match Report::new(results, self.system.clone()).to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => self.present_error(&format!("cannot encode report: {e}")),
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Progress bar over the four splits, drawn on stderr.
pub struct CLIProgressReporter {
    bar: ProgressBar,
}

impl CLIProgressReporter {
    /// Visible bar with `splits` steps; hidden when `quiet`.
    #[must_use]
    pub fn new(splits: u64, quiet: bool) -> Self {
        if quiet {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }
        let bar = ProgressBar::new(splits);
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
        bar.set_style(style);
        Self { bar }
    }
}

impl ProgressReporter for CLIProgressReporter {
    fn split_started(&self, name: &str, rows: usize) {
        self.bar
            .println(format!("Processing split: {name} ({} rows)", format_number(rows)));
        self.bar.set_message(name.to_string());
    }

    fn split_finished(&self, result: &TimingResult) {
        self.bar.set_message(format!(
            "{} done, multiprocessing {}",
            result.split,
            format_duration(result.multiprocess)
        ));
        self.bar.inc(1);
    }

    fn complete(&self) {
        self.bar.finish_and_clear();
    }
}
