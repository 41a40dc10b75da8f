// src/plot_functions/plot_metrics.rs

use log::{debug, info};
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::constants::{LINE_WIDTH_PLOT, METRIC_PLOT_SUFFIX, PLOT_HEIGHT, PLOT_WIDTH, SERIES_PALETTE};
use crate::data_analysis::schema::{select_metrics, validate_columns};
use crate::error::AnalysisError;
use crate::plot_framework::{
    calculate_range, calculate_x_range, draw_line_chart, format_general, sanitize_file_stem,
    series_bounds, PlotConfig, PlotSeries,
};
use crate::types::AveragedResults;

/// Legend label of one DT series, four significant figures.
pub fn dt_label(dt: f64) -> String {
    format!("DT = {}", format_general(dt, 4))
}

pub fn metric_chart_title(metric: &str, start_epoch: f64) -> String {
    format!("{metric} Across Epochs for Different DT values (from epoch {start_epoch})")
}

/// Builds the chart of one metric: one series per DT in ascending order,
/// restricted to epochs `>= start_epoch`.
pub fn metric_plot_config(
    average_results: &AveragedResults,
    metric: &str,
    start_epoch: f64,
) -> Result<PlotConfig, AnalysisError> {
    let mut series = Vec::with_capacity(average_results.len());
    for (idx, (dt, table)) in average_results.iter().enumerate() {
        let data = table
            .metric_series(metric, start_epoch)
            .ok_or_else(|| AnalysisError::MissingColumn {
                column: metric.to_string(),
                dt: dt.value(),
            })?;
        debug!("{metric} @ DT = {dt}: {} point(s) from epoch {start_epoch}: {:?}", data.len(), data);
        series.push(PlotSeries {
            data,
            label: dt_label(dt.value()),
            color: SERIES_PALETTE[idx % SERIES_PALETTE.len()],
            stroke_width: LINE_WIDTH_PLOT,
            marker: None,
        });
    }

    let (x_range, y_range) = match series_bounds(series.iter().flat_map(|s| s.data.iter())) {
        Some(((x_min, x_max), (y_min, y_max))) => {
            let (x_lo, x_hi) = calculate_x_range(x_min, x_max);
            let (y_lo, y_hi) = calculate_range(y_min, y_max);
            (x_lo..x_hi, y_lo..y_hi)
        }
        None => (0.0..0.0, 0.0..0.0),
    };

    Ok(PlotConfig {
        title: metric_chart_title(metric, start_epoch),
        x_range,
        y_range,
        series,
        x_label: "Epochs".to_string(),
        y_label: metric.to_string(),
        invert_y: false,
    })
}

pub fn metric_plot_path(output_dir: &Path, metric: &str) -> PathBuf {
    output_dir.join(format!("{}{}", sanitize_file_stem(metric), METRIC_PLOT_SUFFIX))
}

/// Renders one PNG per selected metric comparing every DT across epochs.
///
/// With `selected_metrics` set only those columns are drawn; otherwise every
/// metric column is. All DT tables must carry the drawn columns. Returns the
/// written paths; empty input writes nothing.
pub fn plot_metrics_across_dt(
    average_results: &AveragedResults,
    selected_metrics: Option<&[String]>,
    start_epoch: f64,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if average_results.is_empty() {
        info!("No averaged results; skipping metric plots.");
        return Ok(Vec::new());
    }

    let metrics = select_metrics(average_results, selected_metrics);
    validate_columns(average_results, &metrics)?;

    let mut written = Vec::with_capacity(metrics.len());
    for metric in &metrics {
        let plot_config = metric_plot_config(average_results, metric, start_epoch)?;
        let output_file = metric_plot_path(output_dir, metric);
        if draw_line_chart(&output_file, (PLOT_WIDTH, PLOT_HEIGHT), &plot_config)? {
            info!("  Metric plot saved as '{}'.", output_file.display());
        } else {
            info!(
                "  '{}' saved with placeholder: no '{metric}' data from epoch {start_epoch}.",
                output_file.display()
            );
        }
        written.push(output_file);
    }
    Ok(written)
}


// src/plot_functions/plot_metrics.rs
