// src/data_analysis/averaging.rs

use log::{debug, info};

use crate::data_input::run_table::RunTable;
use crate::types::{AveragedResults, DtBuckets};

/// Union of metric names across runs, in first-seen order.
fn union_metric_names(runs: &[RunTable]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for run in runs {
        for name in &run.metric_names {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names
}

/// Stacks all runs and averages every metric per epoch.
///
/// The result has one row per distinct epoch, ascending. Each metric is the
/// mean of the non-NaN values sharing that epoch across all runs; an epoch only
/// present in some runs is averaged over those runs alone, and a metric with no
/// value for an epoch is `NaN`. Infinite values take part in the mean, so they
/// carry through (and `inf` with `-inf` gives `NaN`). Returns `None` for an
/// empty slice.
pub fn average_runs(runs: &[RunTable]) -> Option<RunTable> {
    let first = runs.first()?;
    let metric_names = union_metric_names(runs);
    let width = metric_names.len();

    // Concatenate rows, aligning each run's columns onto the union.
    let mut stacked: Vec<(f64, Vec<f64>)> = Vec::with_capacity(runs.iter().map(RunTable::len).sum());
    for run in runs {
        let positions: Vec<Option<usize>> =
            metric_names.iter().map(|name| run.metric_index(name)).collect();
        for (row, &epoch) in run.epochs.iter().enumerate() {
            let values = positions
                .iter()
                .map(|pos| pos.map_or(f64::NAN, |col| run.metrics[col][row]))
                .collect();
            stacked.push((epoch, values));
        }
    }

    stacked.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut averaged = RunTable::new(first.epoch_column.clone(), metric_names);
    let mut sums = vec![0.0; width];
    let mut counts = vec![0usize; width];
    let mut means = vec![0.0; width];

    let mut group_start = 0;
    while group_start < stacked.len() {
        let epoch = stacked[group_start].0;
        let group_end = stacked[group_start..]
            .iter()
            .position(|(e, _)| e.total_cmp(&epoch).is_ne())
            .map_or(stacked.len(), |offset| group_start + offset);

        sums.iter_mut().for_each(|s| *s = 0.0);
        counts.iter_mut().for_each(|c| *c = 0);
        for (_, values) in &stacked[group_start..group_end] {
            for (col, &value) in values.iter().enumerate() {
                if !value.is_nan() {
                    sums[col] += value;
                    counts[col] += 1;
                }
            }
        }
        for col in 0..width {
            means[col] = if counts[col] > 0 {
                sums[col] / counts[col] as f64
            } else {
                f64::NAN
            };
        }

        // Widths match by construction.
        averaged.epochs.push(epoch);
        for (column, &mean) in averaged.metrics.iter_mut().zip(&means) {
            column.push(mean);
        }

        group_start = group_end;
    }

    Some(averaged)
}

/// Averages every DT bucket. Buckets without tables produce no entry.
pub fn calculate_average_across_experiments(grouped_results: &DtBuckets) -> AveragedResults {
    let mut average_results = AveragedResults::new();
    for (&dt, runs) in grouped_results {
        match average_runs(runs) {
            Some(table) => {
                debug!("DT = {dt}: averaged {} run(s) into {} epoch rows", runs.len(), table.len());
                average_results.insert(dt, table);
            }
            None => debug!("DT = {dt}: no runs to average"),
        }
    }
    info!("Averaged {} DT bucket(s)", average_results.len());
    average_results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::run_table::DtKey;

    fn run(epochs: &[f64], values: &[f64]) -> RunTable {
        let mut table = RunTable::new("Epochs", vec!["Accuracy (%)".to_string()]);
        for (&e, &v) in epochs.iter().zip(values) {
            table.push_row(e, &[v]).unwrap();
        }
        table
    }

    #[test]
    fn test_two_runs_average_per_epoch() {
        let runs = vec![
            run(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0]),
            run(&[1.0, 2.0, 3.0], &[30.0, 40.0, 50.0]),
        ];
        let averaged = average_runs(&runs).unwrap();
        assert_eq!(averaged.epochs, vec![1.0, 2.0, 3.0]);
        assert_eq!(averaged.column("Accuracy (%)").unwrap(), &[20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_single_run_is_grouped_unchanged() {
        let single = run(&[3.0, 1.0, 2.0], &[0.3, 0.1, 0.2]);
        let averaged = average_runs(std::slice::from_ref(&single)).unwrap();
        assert_eq!(averaged.epochs, vec![1.0, 2.0, 3.0]);
        let column = averaged.column("Accuracy (%)").unwrap();
        for (got, want) in column.iter().zip([0.1, 0.2, 0.3]) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_mismatched_epoch_ranges_do_not_impute() {
        let runs = vec![run(&[1.0, 2.0], &[10.0, 20.0]), run(&[2.0, 3.0], &[40.0, 90.0])];
        let averaged = average_runs(&runs).unwrap();
        assert_eq!(averaged.epochs, vec![1.0, 2.0, 3.0]);
        assert_eq!(averaged.column("Accuracy (%)").unwrap(), &[10.0, 30.0, 90.0]);
    }

    #[test]
    fn test_duplicate_epochs_within_one_run_are_averaged() {
        let averaged = average_runs(&[run(&[1.0, 1.0], &[2.0, 4.0])]).unwrap();
        assert_eq!(averaged.epochs, vec![1.0]);
        assert_eq!(averaged.column("Accuracy (%)").unwrap(), &[3.0]);
    }

    #[test]
    fn test_missing_values_are_skipped() {
        let runs = vec![run(&[1.0], &[f64::NAN]), run(&[1.0], &[8.0])];
        let averaged = average_runs(&runs).unwrap();
        assert_eq!(averaged.column("Accuracy (%)").unwrap(), &[8.0]);

        let all_missing = average_runs(&[run(&[1.0], &[f64::NAN])]).unwrap();
        assert!(all_missing.column("Accuracy (%)").unwrap()[0].is_nan());
    }

    #[test]
    fn test_infinite_values_propagate() {
        let runs = vec![run(&[1.0, 2.0], &[f64::INFINITY, 1.0]), run(&[1.0, 2.0], &[4.0, f64::NAN])];
        let averaged = average_runs(&runs).unwrap();
        let column = averaged.column("Accuracy (%)").unwrap();
        assert_eq!(column[0], f64::INFINITY);
        assert_eq!(column[1], 1.0);

        let opposite = vec![run(&[1.0], &[f64::INFINITY]), run(&[1.0], &[f64::NEG_INFINITY])];
        assert!(average_runs(&opposite).unwrap().column("Accuracy (%)").unwrap()[0].is_nan());
    }

    #[test]
    fn test_empty_input_produces_nothing() {
        assert!(average_runs(&[]).is_none());

        let mut buckets = DtBuckets::new();
        buckets.insert(DtKey(0.1), Vec::new());
        assert!(calculate_average_across_experiments(&buckets).is_empty());
        assert!(calculate_average_across_experiments(&DtBuckets::new()).is_empty());
    }
}

// src/data_analysis/averaging.rs
