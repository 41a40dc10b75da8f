// src/data_input/run_table.rs

use std::cmp::Ordering;
use std::fmt;

use crate::error::AnalysisError;

/// DT value parsed from a file name, used as the bucket key.
///
/// Ordered numerically with `f64::total_cmp`. Keys are compared by exact value,
/// so `0.1` and `0.10` are the same key while `0.1` and `0.1000001` are not.
#[derive(Debug, Clone, Copy)]
pub struct DtKey(pub f64);

impl DtKey {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for DtKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DtKey {}

impl PartialOrd for DtKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DtKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for DtKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-epoch metrics of one training run (or of one averaged DT bucket).
///
/// Metric values are stored column-major; `metrics[c][r]` is the value of
/// `metric_names[c]` on row `r`. Missing cells are `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunTable {
    pub epoch_column: String,
    pub metric_names: Vec<String>,
    pub epochs: Vec<f64>,
    pub metrics: Vec<Vec<f64>>,
}

impl RunTable {
    pub fn new(epoch_column: impl Into<String>, metric_names: Vec<String>) -> Self {
        let metrics = vec![Vec::new(); metric_names.len()];
        Self {
            epoch_column: epoch_column.into(),
            metric_names,
            epochs: Vec::new(),
            metrics,
        }
    }

    /// Appends one row. `values` must follow `metric_names` order.
    pub fn push_row(&mut self, epoch: f64, values: &[f64]) -> Result<(), AnalysisError> {
        if values.len() != self.metric_names.len() {
            return Err(AnalysisError::ShapeMismatch(format!(
                "row for epoch {} has {} values, table has {} metric columns",
                epoch,
                values.len(),
                self.metric_names.len()
            )));
        }
        self.epochs.push(epoch);
        for (column, &value) in self.metrics.iter_mut().zip(values) {
            column.push(value);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    pub fn metric_index(&self, name: &str) -> Option<usize> {
        self.metric_names.iter().position(|m| m == name)
    }

    pub fn has_metric(&self, name: &str) -> bool {
        self.metric_index(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.metric_index(name).map(|idx| self.metrics[idx].as_slice())
    }

    /// Rows with `epoch >= start_epoch`, order preserved.
    pub fn filter_from_epoch(&self, start_epoch: f64) -> RunTable {
        let mut filtered = RunTable::new(self.epoch_column.clone(), self.metric_names.clone());
        for (row, &epoch) in self.epochs.iter().enumerate() {
            if epoch >= start_epoch {
                filtered.epochs.push(epoch);
                for (dst, src) in filtered.metrics.iter_mut().zip(&self.metrics) {
                    dst.push(src[row]);
                }
            }
        }
        filtered
    }

    /// `(epoch, value)` pairs of one metric from `start_epoch` on, for plotting.
    /// Skips `NaN` and also `±inf`, which have no position on a chart axis.
    /// Returns `None` when the metric column does not exist.
    pub fn metric_series(&self, name: &str, start_epoch: f64) -> Option<Vec<(f64, f64)>> {
        let column = self.column(name)?;
        Some(
            self.epochs
                .iter()
                .zip(column)
                .filter(|&(&epoch, value)| epoch >= start_epoch && value.is_finite())
                .map(|(&epoch, &value)| (epoch, value))
                .collect(),
        )
    }
}


// src/data_input/run_table.rs
