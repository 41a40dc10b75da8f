// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

use crate::config::AnalysisConfig;
use crate::constants::{
    DEFAULT_FILE_MARKER, DEFAULT_RANK_START_EPOCH, DEFAULT_START_EPOCH, EPOCH_COLUMN,
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Directory holding the per-run result CSV files
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory the PNG charts are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Substring a file name must contain to be treated as a result file
    #[arg(long, default_value = DEFAULT_FILE_MARKER)]
    pub marker: String,

    /// Name of the epoch column
    #[arg(long, default_value = EPOCH_COLUMN)]
    pub epoch_column: String,

    /// Metric to plot (repeatable). Defaults to accuracy and hidden-layer spike counts
    #[arg(long = "metric", value_name = "NAME")]
    pub metrics: Vec<String>,

    /// Plot every metric column (overrides --metric)
    #[arg(long, default_value_t = false)]
    pub all_metrics: bool,

    /// First epoch shown on the metric charts
    #[arg(long, default_value_t = DEFAULT_START_EPOCH)]
    pub start_epoch: f64,

    /// Also render a rank chart of DT values by this metric
    #[arg(long)]
    pub rank_metric: Option<String>,

    /// First epoch ranked on the rank chart
    #[arg(long, default_value_t = DEFAULT_RANK_START_EPOCH)]
    pub rank_start_epoch: f64,
}

impl Args {
    pub fn into_config(self) -> AnalysisConfig {
        let defaults = AnalysisConfig::default();
        let selected_metrics = if self.all_metrics {
            None
        } else if self.metrics.is_empty() {
            defaults.selected_metrics
        } else {
            Some(self.metrics)
        };

        AnalysisConfig {
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            file_marker: self.marker,
            epoch_column: self.epoch_column,
            selected_metrics,
            start_epoch: self.start_epoch,
            rank_metric: self.rank_metric,
            rank_start_epoch: self.rank_start_epoch,
        }
    }
}


// src/cli.rs
