//! CSV loading of the duration column.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::BenchError;

/// The one column of the input table the benchmark uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Header name the values were read from.
    pub column: String,
    /// Column values in file order.
    pub values: Vec<i64>,
}

impl Dataset {
    /// Load `column` from the CSV file at `path`.
    pub fn from_path(path: &Path, column: &str) -> Result<Self, BenchError> {
        let file = File::open(path).map_err(|source| BenchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file, column)?;
        tracing::debug!(
            path = %path.display(),
            rows = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Load `column` from any CSV source with a header row.
    pub fn from_reader<R: Read>(reader: R, column: &str) -> Result<Self, BenchError> {
        let mut reader = csv::Reader::from_reader(reader);
        let idx = reader
            .headers()?
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| BenchError::MissingColumn(column.to_string()))?;

        let mut values = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let cell = record.get(idx).unwrap_or("");
            let value = parse_duration_cell(cell).ok_or_else(|| BenchError::Parse {
                row: row + 1,
                value: cell.to_string(),
            })?;
            values.push(value);
        }

        if values.is_empty() {
            tracing::warn!(column, "dataset has no rows");
        }

        Ok(Self {
            column: column.to_string(),
            values,
        })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse an integer cell, also accepting floats with no fractional part ("455.0").
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn parse_duration_cell(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if let Ok(v) = cell.parse::<i64>() {
        return Some(v);
    }
    let f = cell.parse::<f64>().ok()?;
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,vendor_id,trip_duration
id2875421,2,455
id2377394,1,663
id3858529,2,2124
id3504673,2,429
";

    #[test]
    fn reads_named_column() {
        let ds = Dataset::from_reader(SAMPLE.as_bytes(), "trip_duration").unwrap();
        assert_eq!(ds.values, vec![455, 663, 2124, 429]);
        assert_eq!(ds.column, "trip_duration");
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn missing_column() {
        let err = Dataset::from_reader(SAMPLE.as_bytes(), "fare").unwrap_err();
        assert!(matches!(err, BenchError::MissingColumn(ref c) if c == "fare"));
    }

    #[test]
    fn bad_cell_reports_row() {
        let csv = "trip_duration\n10\nfast\n";
        let err = Dataset::from_reader(csv.as_bytes(), "trip_duration").unwrap_err();
        match err {
            BenchError::Parse { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_cell_is_an_error() {
        let csv = "a,trip_duration\n1,\n";
        assert!(matches!(
            Dataset::from_reader(csv.as_bytes(), "trip_duration"),
            Err(BenchError::Parse { row: 1, .. })
        ));
    }

    #[test]
    fn whole_floats_accepted() {
        let csv = "trip_duration\n455.0\n 12 \n";
        let ds = Dataset::from_reader(csv.as_bytes(), "trip_duration").unwrap();
        assert_eq!(ds.values, vec![455, 12]);
    }

    #[test]
    fn fractional_floats_rejected() {
        assert_eq!(parse_duration_cell("1.5"), None);
        assert_eq!(parse_duration_cell("NaN"), None);
        assert_eq!(parse_duration_cell("-7"), Some(-7));
    }

    #[test]
    fn header_only_is_empty() {
        let ds = Dataset::from_reader("trip_duration\n".as_bytes(), "trip_duration").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn ragged_rows_rejected() {
        let csv = "a,trip_duration\n1,2\n3\n";
        assert!(matches!(
            Dataset::from_reader(csv.as_bytes(), "trip_duration"),
            Err(BenchError::Csv(_))
        ));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("train.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        let ds = Dataset::from_path(&path, "trip_duration").unwrap();
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn from_path_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");
        let err = Dataset::from_path(&path, "trip_duration").unwrap_err();
        assert!(matches!(err, BenchError::Io { .. }));
        assert!(err.to_string().contains("absent.csv"));
    }
}
