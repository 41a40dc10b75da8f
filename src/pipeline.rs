// src/pipeline.rs

use log::{debug, info};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crate::config::AnalysisConfig;
use crate::data_analysis::averaging::calculate_average_across_experiments;
use crate::data_input::discovery::discover_runs;
use crate::error::AnalysisError;
use crate::plot_functions::plot_metrics::plot_metrics_across_dt;
use crate::plot_functions::plot_rank::plot_metric_rank_across_dt;

/// Charts written by one pipeline run.
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub dt_count: usize,
    pub metric_plots: Vec<PathBuf>,
    pub rank_plot: Option<PathBuf>,
}

/// Discover, group, average and plot: the whole sweep comparison for one directory.
pub fn run_analysis(config: &AnalysisConfig) -> Result<RenderSummary, Box<dyn Error>> {
    info!("Reading results from '{}'", config.input_dir.display());
    let buckets = discover_runs(config)?;
    let averaged = calculate_average_across_experiments(&buckets);

    for (dt, table) in &averaged {
        debug!(
            "DT = {dt}: {} averaged epoch(s), columns {:?}",
            table.len(),
            table.metric_names
        );
    }

    if averaged.is_empty() {
        info!("No result files found; nothing to plot.");
        return Ok(RenderSummary::default());
    }

    fs::create_dir_all(&config.output_dir)
        .map_err(|e| AnalysisError::io(&config.output_dir, e))?;

    let metric_plots = plot_metrics_across_dt(
        &averaged,
        config.selected_metrics.as_deref(),
        config.start_epoch,
        &config.output_dir,
    )?;

    let rank_plot = match &config.rank_metric {
        Some(metric) => plot_metric_rank_across_dt(
            &averaged,
            metric,
            config.rank_start_epoch,
            &config.output_dir,
        )?,
        None => None,
    };

    Ok(RenderSummary {
        dt_count: averaged.len(),
        metric_plots,
        rank_plot,
    })
}

// src/pipeline.rs
