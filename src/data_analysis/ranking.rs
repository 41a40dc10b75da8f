// src/data_analysis/ranking.rs

use crate::error::AnalysisError;
use crate::types::{AveragedResults, SeriesPoints};

/// Per-epoch rank of each DT value by one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct RankTable {
    pub metric: String,
    /// Column keys, ascending.
    pub dt_values: Vec<f64>,
    /// Row keys, ascending.
    pub epochs: Vec<f64>,
    /// `ranks[row][col]`; `None` where that DT has no value at that epoch.
    pub ranks: Vec<Vec<Option<f64>>>,
}

impl RankTable {
    /// `(epoch, rank)` points of one DT column, skipping gaps.
    pub fn dt_series(&self, col: usize) -> SeriesPoints {
        self.epochs
            .iter()
            .zip(&self.ranks)
            .filter_map(|(&epoch, row)| row.get(col).copied().flatten().map(|rank| (epoch, rank)))
            .collect()
    }

    pub fn max_rank(&self) -> f64 {
        self.ranks
            .iter()
            .flatten()
            .flatten()
            .copied()
            .fold(1.0, f64::max)
    }
}

/// Ranks present values in descending order with "min" tie handling.
///
/// The largest value gets rank 1; equal values share the smallest rank of their
/// group and the next distinct value skips ahead (90, 70, 90 → 1, 3, 1).
/// Missing values stay unranked and do not count against others.
pub fn rank_descending_min(values: &[Option<f64>]) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|value| {
            let v = (*value)?;
            let better = values
                .iter()
                .flatten()
                .filter(|&&other| other > v)
                .count();
            Some((better + 1) as f64)
        })
        .collect()
}

fn lookup_epoch(epochs: &[f64], epoch: f64) -> Option<usize> {
    epochs.iter().position(|&e| e.total_cmp(&epoch).is_eq())
}

/// Joins every DT's `metric` series on epoch (from `start_epoch` on) and ranks each row.
///
/// Epochs are the union across DT tables, so a DT missing an epoch leaves a gap.
pub fn compute_rank_table(
    average_results: &AveragedResults,
    metric: &str,
    start_epoch: f64,
) -> Result<RankTable, AnalysisError> {
    let mut filtered = Vec::with_capacity(average_results.len());
    for (dt, table) in average_results {
        if !table.has_metric(metric) {
            return Err(AnalysisError::MissingColumn {
                column: metric.to_string(),
                dt: dt.value(),
            });
        }
        filtered.push((dt.value(), table.filter_from_epoch(start_epoch)));
    }

    let mut epochs: Vec<f64> = filtered
        .iter()
        .flat_map(|(_, table)| table.epochs.iter().copied())
        .collect();
    epochs.sort_by(f64::total_cmp);
    epochs.dedup_by(|a, b| a.total_cmp(b).is_eq());

    let ranks = epochs
        .iter()
        .map(|&epoch| {
            let row: Vec<Option<f64>> = filtered
                .iter()
                .map(|(_, table)| {
                    let idx = lookup_epoch(&table.epochs, epoch)?;
                    let value = table.column(metric)?[idx];
                    (!value.is_nan()).then_some(value)
                })
                .collect();
            rank_descending_min(&row)
        })
        .collect();

    Ok(RankTable {
        metric: metric.to_string(),
        dt_values: filtered.iter().map(|(dt, _)| *dt).collect(),
        epochs,
        ranks,
    })
}


// src/data_analysis/ranking.rs
