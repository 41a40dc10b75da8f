// src/data_input/run_parser.rs

use csv::ReaderBuilder;
use log::debug;
use std::path::Path;

use crate::constants::NA_TOKENS;
use crate::data_input::run_table::RunTable;
use crate::error::AnalysisError;

fn is_missing(raw: &str) -> bool {
    NA_TOKENS.contains(&raw)
}

/// Parses a cell of a metric column. NA tokens (empty, `NA`, `None`, `null`, ...) are `NaN`.
fn parse_metric_cell(raw: &str) -> Option<f64> {
    if is_missing(raw) {
        return Some(f64::NAN);
    }
    raw.parse::<f64>().ok()
}

/// Makes repeated header names unique: the second `Loss` becomes `Loss.1`, the third `Loss.2`.
fn dedupe_header_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for name in names {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while unique.contains(&candidate) {
            candidate = format!("{name}.{suffix}");
            suffix += 1;
        }
        unique.push(candidate);
    }
    unique
}

/// Reads one run's CSV into a `RunTable`.
///
/// The file must have a header row containing `epoch_column`; every other
/// column is a metric and must be numeric. Repeated header names get `.1`,
/// `.2` suffixes. Rows whose epoch cell is missing are skipped, since they
/// cannot be grouped.
pub fn load_run_table(path: &Path, epoch_column: &str) -> Result<RunTable, AnalysisError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| AnalysisError::csv(path, e))?;

    let header_record = reader
        .headers()
        .map_err(|e| AnalysisError::csv(path, e))?
        .clone();

    let header_names = dedupe_header_names(header_record.iter());

    let epoch_idx = header_names
        .iter()
        .position(|h| h == epoch_column)
        .ok_or_else(|| AnalysisError::MissingEpochColumn {
            path: path.to_path_buf(),
            column: epoch_column.to_string(),
        })?;

    // Metric columns in header order, remembering their CSV positions.
    let metric_columns: Vec<(usize, String)> = header_names
        .into_iter()
        .enumerate()
        .filter(|&(idx, _)| idx != epoch_idx)
        .collect();

    let mut table = RunTable::new(
        epoch_column,
        metric_columns.iter().map(|(_, name)| name.clone()).collect(),
    );
    let mut row_values = vec![0.0; metric_columns.len()];

    for (row_index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| AnalysisError::csv(path, e))?;
        // Data rows are numbered from 1, after the header.
        let row_number = row_index + 1;

        let epoch_raw = record.get(epoch_idx).unwrap_or("");
        let epoch = parse_metric_cell(epoch_raw).ok_or_else(|| AnalysisError::NonNumeric {
            path: path.to_path_buf(),
            row: row_number,
            column: epoch_column.to_string(),
            value: epoch_raw.to_string(),
        })?;
        if epoch.is_nan() {
            debug!("{}: skipping row {} with missing '{}'", path.display(), row_number, epoch_column);
            continue;
        }

        for (slot, (csv_idx, name)) in row_values.iter_mut().zip(&metric_columns) {
            let raw = record.get(*csv_idx).unwrap_or("");
            *slot = parse_metric_cell(raw).ok_or_else(|| AnalysisError::NonNumeric {
                path: path.to_path_buf(),
                row: row_number,
                column: name.clone(),
                value: raw.to_string(),
            })?;
        }

        table.push_row(epoch, &row_values)?;
    }

    debug!(
        "{}: {} rows, metrics {:?}",
        path.display(),
        table.len(),
        table.metric_names
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_run_table_reads_columns_in_header_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "run.csv",
            "Accuracy (%),Epochs,Hidden layer 1 spike counts\n50,1,100\n60,2,110\n",
        );
        let table = load_run_table(&path, "Epochs").unwrap();
        assert_eq!(table.epochs, vec![1.0, 2.0]);
        assert_eq!(
            table.metric_names,
            vec!["Accuracy (%)".to_string(), "Hidden layer 1 spike counts".to_string()]
        );
        assert_eq!(table.column("Accuracy (%)").unwrap(), &[50.0, 60.0]);
        assert_eq!(table.column("Hidden layer 1 spike counts").unwrap(), &[100.0, 110.0]);
    }

    #[test]
    fn test_empty_metric_cell_is_missing_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "run.csv", "Epochs,Loss\n1,\n2,0.5\n");
        let table = load_run_table(&path, "Epochs").unwrap();
        let loss = table.column("Loss").unwrap();
        assert!(loss[0].is_nan());
        assert_eq!(loss[1], 0.5);
    }

    #[test]
    fn test_na_tokens_are_missing_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "run.csv",
            "Epochs,Loss,Accuracy (%)\n1,NA,50\n2,None,N/A\n3,null,#N/A\n4,<NA>,-nan\n5,0.25,NULL\n",
        );
        let table = load_run_table(&path, "Epochs").unwrap();
        assert_eq!(table.epochs, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let loss = table.column("Loss").unwrap();
        assert!(loss[..4].iter().all(|v| v.is_nan()));
        assert_eq!(loss[4], 0.25);
        let accuracy = table.column("Accuracy (%)").unwrap();
        assert_eq!(accuracy[0], 50.0);
        assert!(accuracy[1..].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_rows_with_missing_epoch_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "run.csv", "Epochs,Loss\n1,0.5\nNA,0.9\n,0.8\nNone,0.7\n2,0.4\n");
        let table = load_run_table(&path, "Epochs").unwrap();
        assert_eq!(table.epochs, vec![1.0, 2.0]);
        assert_eq!(table.column("Loss").unwrap(), &[0.5, 0.4]);
    }

    #[test]
    fn test_repeated_headers_are_suffixed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "run.csv", "Epochs,Loss,Loss,Loss.1,Loss\n1,0.1,0.2,0.3,0.4\n");
        let table = load_run_table(&path, "Epochs").unwrap();
        assert_eq!(table.metric_names, vec!["Loss", "Loss.1", "Loss.1.1", "Loss.2"]);
        assert_eq!(table.column("Loss.1").unwrap(), &[0.2]);
        assert_eq!(table.column("Loss.2").unwrap(), &[0.4]);
    }

    #[test]
    fn test_missing_epoch_column_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "run.csv", "Epoch,Loss\n1,0.5\n");
        let err = load_run_table(&path, "Epochs").unwrap_err();
        assert!(matches!(err, AnalysisError::MissingEpochColumn { .. }));
    }

    #[test]
    fn test_non_numeric_metric_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "run.csv", "Epochs,Phase\n1,warmup\n");
        let err = load_run_table(&path, "Epochs").unwrap_err();
        match err {
            AnalysisError::NonNumeric { row, column, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, "Phase");
                assert_eq!(value, "warmup");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "run.csv", "Epochs,Loss\n1,0.5,9\n");
        let err = load_run_table(&path, "Epochs").unwrap_err();
        assert!(matches!(err, AnalysisError::Csv { .. }));
    }

    #[test]
    fn test_unreadable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_run_table(&dir.path().join("absent.csv"), "Epochs").is_err());
    }
}

// src/data_input/run_parser.rs
