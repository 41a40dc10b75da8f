// src/config.rs

use std::path::PathBuf;

use crate::constants::{
    DEFAULT_FILE_MARKER, DEFAULT_METRICS, DEFAULT_RANK_START_EPOCH, DEFAULT_START_EPOCH,
    EPOCH_COLUMN,
};

/// Everything the analysis pipeline needs to know about one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Directory holding the per-run CSV files.
    pub input_dir: PathBuf,
    /// Directory the PNG charts are written to.
    pub output_dir: PathBuf,
    /// Only file names containing this substring are considered.
    pub file_marker: String,
    pub epoch_column: String,
    /// Metric allow-list. `None` plots every metric column.
    pub selected_metrics: Option<Vec<String>>,
    /// First epoch (inclusive) shown on the metric charts.
    pub start_epoch: f64,
    /// Metric to rank DT values by. `None` disables the rank chart.
    pub rank_metric: Option<String>,
    pub rank_start_epoch: f64,
}

impl AnalysisConfig {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("output_metrics"),
            output_dir: PathBuf::from("."),
            file_marker: DEFAULT_FILE_MARKER.to_string(),
            epoch_column: EPOCH_COLUMN.to_string(),
            selected_metrics: Some(DEFAULT_METRICS.iter().map(|m| m.to_string()).collect()),
            start_epoch: DEFAULT_START_EPOCH,
            rank_metric: None,
            rank_start_epoch: DEFAULT_RANK_START_EPOCH,
        }
    }
}

// src/config.rs
