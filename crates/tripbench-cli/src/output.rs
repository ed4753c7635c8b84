//! CLI output formatting.

use std::time::Duration;

use serde::Serialize;

use tripbench_orchestration::interfaces::TimingResult;

use crate::system::SystemSpecs;

const BASE_HEADERS: [&str; 4] = [
    "Split",
    "Sequential (s)",
    "Threading (s)",
    "Multiprocessing (s)",
];
const DETAIL_HEADERS: [&str; 3] = ["Rows", "Threading x", "Multiprocessing x"];

/// Seconds rounded to four decimals.
#[must_use]
pub fn format_seconds(d: Duration) -> String {
    format!("{:.4}", d.as_secs_f64())
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

fn format_speedup(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "-".to_string(), |r| format!("{r:.2}"))
}

/// Render the timing table with right-aligned columns.
///
/// With `details`, row counts and speed-ups relative to the sequential run
/// are appended.
#[must_use]
pub fn render_table(results: &[TimingResult], details: bool) -> String {
    let mut headers: Vec<&str> = BASE_HEADERS.to_vec();
    if details {
        headers.extend(DETAIL_HEADERS);
    }

    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|r| {
            let mut row = vec![
                r.split.clone(),
                format_seconds(r.sequential),
                format_seconds(r.threaded),
                format_seconds(r.multiprocess),
            ];
            if details {
                row.push(format_number(r.rows));
                row.push(format_speedup(r.speedup(r.threaded)));
                row.push(format_speedup(r.speedup(r.multiprocess)));
            }
            row
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    for cells in std::iter::once(&header_cells).chain(rows.iter()) {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:>w$}"))
            .collect();
        out.push_str(&line.join("  "));
        out.push('\n');
    }
    out
}

/// One row of the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub split: String,
    pub rows: usize,
    pub sequential_s: f64,
    pub threading_s: f64,
    pub multiprocessing_s: f64,
}

impl From<&TimingResult> for ReportRow {
    fn from(r: &TimingResult) -> Self {
        Self {
            split: r.split.clone(),
            rows: r.rows,
            sequential_s: r.sequential.as_secs_f64(),
            threading_s: r.threaded.as_secs_f64(),
            multiprocessing_s: r.multiprocess.as_secs_f64(),
        }
    }
}

/// Machine-readable benchmark report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub results: Vec<ReportRow>,
    pub system: SystemSpecs,
}

impl Report {
    #[must_use]
    pub fn new(results: &[TimingResult], system: SystemSpecs) -> Self {
        Self {
            results: results.iter().map(ReportRow::from).collect(),
            system,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(split: &str, rows: usize, seq: u64, th: u64, mp: u64) -> TimingResult {
        TimingResult {
            split: split.into(),
            rows,
            sequential: Duration::from_micros(seq),
            threaded: Duration::from_micros(th),
            multiprocess: Duration::from_micros(mp),
        }
    }

    #[test]
    fn seconds_four_decimals() {
        assert_eq!(format_seconds(Duration::from_micros(12_345)), "0.0123");
        assert_eq!(format_seconds(Duration::from_secs(2)), "2.0000");
        assert_eq!(format_seconds(Duration::ZERO), "0.0000");
    }

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert_eq!(format_duration(Duration::from_millis(1_500)), "1.500s");
        assert_eq!(format_duration(Duration::from_secs(90)), "90.000s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_458_644), "1,458,644");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
    }

    #[test]
    fn table_layout() {
        let table = render_table(
            &[
                result("25%", 2, 1_000, 2_000, 300_000),
                result("100%", 8, 4_000, 5_000, 310_000),
            ],
            false,
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Split  Sequential (s)  Threading (s)  Multiprocessing (s)",
                "  25%          0.0010         0.0020               0.3000",
                " 100%          0.0040         0.0050               0.3100",
            ]
        );
    }

    #[test]
    fn table_details_columns() {
        let table = render_table(&[result("50%", 1_500, 4_000, 2_000, 0)], true);
        let header = table.lines().next().unwrap();
        assert!(header.ends_with("Rows  Threading x  Multiprocessing x"));
        let row = table.lines().nth(1).unwrap();
        assert!(row.contains("1,500"));
        assert!(row.contains("2.00"));
        assert!(row.trim_end().ends_with('-'));
    }

    #[test]
    fn empty_table_has_header() {
        let table = render_table(&[], false);
        assert_eq!(table.lines().count(), 1);
    }

    #[test]
    fn json_report() {
        let system = SystemSpecs {
            processor: "cpu".into(),
            total_memory_bytes: 1024,
            logical_cores: 2,
            os: None,
        };
        let report = Report::new(&[result("25%", 2, 1_000, 2_000, 3_000)], system);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["results"][0]["split"], "25%");
        assert_eq!(value["results"][0]["rows"], 2);
        assert!((value["results"][0]["sequential_s"].as_f64().unwrap() - 0.001).abs() < 1e-12);
        assert_eq!(value["system"]["logical_cores"], 2);
    }
}
