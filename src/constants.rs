// src/constants.rs

use plotters::style::colors::full_palette::{
    AMBER, BLUE, BROWN, CYAN, GREEN, GREY, INDIGO, ORANGE, PINK, PURPLE, RED, TEAL,
};
use plotters::style::RGBColor;

// --- Input conventions ---

/// Substring identifying test-result files inside an experiment directory.
pub const DEFAULT_FILE_MARKER: &str = "Test DT =";
/// Name of the epoch identifier column in every run CSV.
pub const EPOCH_COLUMN: &str = "Epochs";
/// Pattern extracting the DT value from a file name.
pub const DT_PATTERN: &str = r"DT\s*=\s*(\d*\.?\d+(?:[eE][-+]?\d+)?)";
/// Cell contents read as missing values, matching the usual CSV writers' NA spellings.
pub const NA_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// Metrics plotted when no explicit selection is given on the command line.
pub const DEFAULT_METRICS: [&str; 2] = ["Accuracy (%)", "Hidden layer 1 spike counts"];
pub const DEFAULT_START_EPOCH: f64 = 10.0;
pub const DEFAULT_RANK_START_EPOCH: f64 = 0.0;

// Output file naming.
pub const SPIKE_PLOT_PREFIX: &str = "spike_times_plot_";
pub const METRIC_PLOT_SUFFIX: &str = "_across_dt.png";
pub const RANK_PLOT_SUFFIX: &str = "_rank_across_dt.png";
pub const DEFAULT_HEATMAP_TITLE: &str = "Weight Heatmap";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1500;
pub const PLOT_HEIGHT: u32 = 900;
pub const SPIKE_PLOT_WIDTH: u32 = 1000;
pub const SPIKE_PLOT_HEIGHT: u32 = 1500;
pub const HEATMAP_PLOT_WIDTH: u32 = 1000;
pub const HEATMAP_PLOT_HEIGHT: u32 = 800;
pub const COLORBAR_WIDTH_PX: u32 = 120;
pub const COLORBAR_STEPS: usize = 256;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 15;
pub const FONT_SIZE_MESSAGE: i32 = 24;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const MARKER_SIZE: i32 = 5;
pub const SCATTER_POINT_SIZE: i32 = 3;

// Spike scatter: extent of the dashed true-label line on the time axis.
pub const LABEL_LINE_X_START: f64 = 0.0;
pub const LABEL_LINE_X_END: f64 = 0.2;
pub const DASH_SEGMENTS: usize = 20;

// --- Plot Color Assignments ---
pub const COLOR_DISCRETE_OUTPUT: &RGBColor = &BLUE;
pub const COLOR_CONTINUOUS_OUTPUT: &RGBColor = &RED;
pub const COLOR_TRUE_LABEL: &RGBColor = &RED;

/// Cycled per DT series and per neuron in scatter panels.
pub const SERIES_PALETTE: [RGBColor; 12] = [
    BLUE, ORANGE, GREEN, RED, PURPLE, BROWN, PINK, GREY, TEAL, CYAN, INDIGO, AMBER,
];

// src/constants.rs
