// src/plot_functions/plot_rank.rs

use log::info;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::constants::{LINE_WIDTH_PLOT, PLOT_HEIGHT, PLOT_WIDTH, RANK_PLOT_SUFFIX, SERIES_PALETTE};
use crate::data_analysis::ranking::{compute_rank_table, RankTable};
use crate::plot_framework::{
    calculate_x_range, draw_line_chart, sanitize_file_stem, series_bounds, MarkerShape, PlotConfig,
    PlotSeries,
};
use crate::types::AveragedResults;

/// Builds the rank chart: one marked line per DT, rank 1 drawn at the top.
pub fn rank_plot_config(rank_table: &RankTable, start_epoch: f64) -> PlotConfig {
    let metric = &rank_table.metric;
    let series: Vec<PlotSeries> = rank_table
        .dt_values
        .iter()
        .enumerate()
        .map(|(col, dt)| PlotSeries {
            data: rank_table.dt_series(col),
            label: format!("DT = {dt:.6}"),
            color: SERIES_PALETTE[col % SERIES_PALETTE.len()],
            stroke_width: LINE_WIDTH_PLOT,
            marker: Some(MarkerShape::for_index(col)),
        })
        .collect();

    let x_range = match series_bounds(series.iter().flat_map(|s| s.data.iter())) {
        Some(((x_min, x_max), _)) => {
            let (lo, hi) = calculate_x_range(x_min, x_max);
            lo..hi
        }
        None => 0.0..0.0,
    };

    PlotConfig {
        title: format!(
            "Rank of {metric} Across Epochs for Different DT values (from epoch {start_epoch})"
        ),
        x_range,
        y_range: 0.5..(rank_table.max_rank() + 0.5),
        series,
        x_label: "Epochs".to_string(),
        y_label: format!("Rank of {metric}"),
        invert_y: true,
    }
}

pub fn rank_plot_path(output_dir: &Path, metric: &str) -> PathBuf {
    output_dir.join(format!("{}{}", sanitize_file_stem(metric), RANK_PLOT_SUFFIX))
}

/// Ranks every DT by `metric` at each epoch from `start_epoch` and renders the result.
/// Returns the written path, or `None` when there is nothing to rank.
pub fn plot_metric_rank_across_dt(
    average_results: &AveragedResults,
    metric: &str,
    start_epoch: f64,
    output_dir: &Path,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    if average_results.is_empty() {
        info!("No averaged results; skipping rank plot.");
        return Ok(None);
    }

    let rank_table = compute_rank_table(average_results, metric, start_epoch)?;
    let plot_config = rank_plot_config(&rank_table, start_epoch);
    let output_file = rank_plot_path(output_dir, metric);
    if draw_line_chart(&output_file, (PLOT_WIDTH, PLOT_HEIGHT), &plot_config)? {
        info!("  Rank plot saved as '{}'.", output_file.display());
    } else {
        info!(
            "  '{}' saved with placeholder: no '{metric}' ranks from epoch {start_epoch}.",
            output_file.display()
        );
    }
    Ok(Some(output_file))
}


// src/plot_functions/plot_rank.rs
