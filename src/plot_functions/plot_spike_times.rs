// src/plot_functions/plot_spike_times.rs

use log::info;
use ndarray::Array2;
use std::error::Error;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::constants::{
    COLOR_CONTINUOUS_OUTPUT, COLOR_DISCRETE_OUTPUT, COLOR_TRUE_LABEL, LABEL_LINE_X_END,
    LABEL_LINE_X_START, SERIES_PALETTE, SPIKE_PLOT_HEIGHT, SPIKE_PLOT_PREFIX, SPIKE_PLOT_WIDTH,
};
use crate::plot_framework::{
    calculate_x_range, draw_stacked_scatter_plot, format_general, series_bounds, ReferenceLine,
    ScatterLayer, ScatterPanel,
};
use crate::types::SeriesPoints;

/// Spike times of one sample, each matrix shaped `(neurons, spikes)`.
/// Non-finite entries are padding.
#[derive(Debug, Clone)]
pub struct SpikeRaster {
    pub input_spike_times: Array2<f64>,
    pub spike_times: Array2<f64>,
    pub output_spike_times: Array2<f64>,
    pub discrete_output_spike_times: Array2<f64>,
    /// Index of the output neuron matching the true class.
    pub label: usize,
    pub dt: f64,
    pub timestep: usize,
}

/// `(spike_time, neuron_index)` points of a single neuron row.
fn neuron_points(times: &Array2<f64>, neuron: usize) -> SeriesPoints {
    times
        .row(neuron)
        .iter()
        .filter(|t| t.is_finite())
        .map(|&t| (t, neuron as f64))
        .collect()
}

/// One layer per neuron, colored from the palette.
fn per_neuron_layers(times: &Array2<f64>) -> Vec<ScatterLayer> {
    (0..times.nrows())
        .map(|neuron| ScatterLayer {
            points: neuron_points(times, neuron),
            color: SERIES_PALETTE[neuron % SERIES_PALETTE.len()],
        })
        .collect()
}

/// All neurons of a matrix in a single color.
fn uniform_layer(times: &Array2<f64>, color: plotters::style::RGBColor) -> ScatterLayer {
    ScatterLayer {
        points: (0..times.nrows())
            .flat_map(|neuron| neuron_points(times, neuron))
            .collect(),
        color,
    }
}

fn panel_ranges(layers: &[ScatterLayer], extra_x: &[f64], extra_y: &[f64]) -> (Range<f64>, Range<f64>) {
    let bounds = series_bounds(layers.iter().flat_map(|l| l.points.iter()));
    let (mut x_min, mut x_max, mut y_min, mut y_max) = match bounds {
        Some(((x0, x1), (y0, y1))) => (x0, x1, y0, y1),
        None => (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
    };
    for &x in extra_x {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
    }
    for &y in extra_y {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !(x_min.is_finite() && y_min.is_finite()) {
        return (0.0..0.0, 0.0..0.0);
    }
    let (x_lo, x_hi) = calculate_x_range(x_min, x_max);
    (x_lo..x_hi, (y_min - 0.5)..(y_max + 0.5))
}

fn layer_panel(title: &str, layers: Vec<ScatterLayer>) -> ScatterPanel {
    let (x_range, y_range) = panel_ranges(&layers, &[], &[]);
    ScatterPanel {
        title: title.to_string(),
        x_range,
        y_range,
        layers,
        reference_lines: Vec::new(),
        x_label: "Spike Times (s)".to_string(),
        y_label: "Neuron Index".to_string(),
    }
}

/// Input, hidden and output panels, top to bottom.
pub fn spike_panels(raster: &SpikeRaster) -> Vec<ScatterPanel> {
    let input_panel = layer_panel(
        "Scatter Plot of Input Layer Spike Times for Each Neuron",
        per_neuron_layers(&raster.input_spike_times),
    );
    let hidden_panel = layer_panel(
        "Scatter Plot of Hidden Layer Spike Times for Each Neuron",
        per_neuron_layers(&raster.spike_times),
    );

    // Discrete output first so the continuous spikes are drawn over it.
    let output_layers = vec![
        uniform_layer(&raster.discrete_output_spike_times, *COLOR_DISCRETE_OUTPUT),
        uniform_layer(&raster.output_spike_times, *COLOR_CONTINUOUS_OUTPUT),
    ];
    let label_y = raster.label as f64;
    let (x_range, y_range) = panel_ranges(
        &output_layers,
        &[LABEL_LINE_X_START, LABEL_LINE_X_END],
        &[label_y],
    );
    let output_panel = ScatterPanel {
        title: "Scatter Plot of Output Layer Spike Times for Each Neuron".to_string(),
        x_range,
        y_range,
        layers: output_layers,
        reference_lines: vec![ReferenceLine {
            y: label_y,
            x_start: LABEL_LINE_X_START,
            x_end: LABEL_LINE_X_END,
            color: *COLOR_TRUE_LABEL,
            label: "True Label".to_string(),
        }],
        x_label: "Spike Times (s)".to_string(),
        y_label: "Neuron Index".to_string(),
    };

    vec![input_panel, hidden_panel, output_panel]
}

pub fn spike_plot_path(plot_dir: &Path, timestep: usize) -> PathBuf {
    plot_dir.join(format!("{SPIKE_PLOT_PREFIX}{timestep}.png"))
}

/// Renders the three spike panels of one sample into `plot_dir`.
pub fn scatter_plot_spike_times(
    raster: &SpikeRaster,
    plot_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_file = spike_plot_path(plot_dir, raster.timestep);
    let main_title = format!(
        "Spike Times (timestep {}, DT = {})",
        raster.timestep,
        format_general(raster.dt, 4)
    );
    draw_stacked_scatter_plot(
        &output_file,
        (SPIKE_PLOT_WIDTH, SPIKE_PLOT_HEIGHT),
        &main_title,
        &spike_panels(raster),
    )?;
    info!("  Spike scatter saved as '{}'.", output_file.display());
    Ok(output_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn raster() -> SpikeRaster {
        SpikeRaster {
            input_spike_times: array![[0.01, 0.02], [0.03, f64::NAN]],
            spike_times: array![[0.05, f64::INFINITY], [0.06, 0.07], [f64::NAN, f64::NAN]],
            output_spike_times: array![[0.08], [0.09]],
            discrete_output_spike_times: array![[0.1], [0.12]],
            label: 1,
            dt: 0.001,
            timestep: 7,
        }
    }

    #[test]
    fn test_panels_skip_padding() {
        let panels = spike_panels(&raster());
        assert_eq!(panels.len(), 3);

        let input_points: usize = panels[0].layers.iter().map(|l| l.points.len()).sum();
        assert_eq!(input_points, 3);
        let hidden_points: usize = panels[1].layers.iter().map(|l| l.points.len()).sum();
        assert_eq!(hidden_points, 3);
        assert!(panels[1].layers[2].points.is_empty());
        assert_eq!(panels[1].layers[1].points, vec![(0.06, 1.0), (0.07, 1.0)]);
    }

    #[test]
    fn test_output_panel_colors_and_label_line() {
        let panels = spike_panels(&raster());
        let output = &panels[2];
        let rgb = |c: plotters::style::RGBColor| (c.0, c.1, c.2);
        assert_eq!(rgb(output.layers[0].color), rgb(*COLOR_DISCRETE_OUTPUT));
        assert_eq!(rgb(output.layers[1].color), rgb(*COLOR_CONTINUOUS_OUTPUT));
        assert_eq!(output.layers[0].points, vec![(0.1, 0.0), (0.12, 1.0)]);

        let line = &output.reference_lines[0];
        assert_eq!(line.y, 1.0);
        assert_eq!((line.x_start, line.x_end), (0.0, 0.2));
        assert!(output.x_range.start <= 0.0 && output.x_range.end >= 0.2);
        assert_eq!(output.x_label, "Spike Times (s)");
        assert_eq!(output.y_label, "Neuron Index");
    }

    #[test]
    fn test_scatter_plot_written_per_timestep() {
        let dir = tempfile::tempdir().unwrap();
        let path = scatter_plot_spike_times(&raster(), dir.path()).unwrap();
        assert_eq!(path, dir.path().join("spike_times_plot_7.png"));
        assert!(path.is_file());
    }

    #[test]
    fn test_scatter_plot_with_silent_layers() {
        let silent = SpikeRaster {
            input_spike_times: Array2::from_elem((2, 3), f64::NAN),
            spike_times: Array2::zeros((0, 0)),
            timestep: 8,
            ..raster()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = scatter_plot_spike_times(&silent, dir.path()).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_spike_plot_path() {
        assert_eq!(
            spike_plot_path(Path::new("plots"), 7),
            Path::new("plots").join("spike_times_plot_7.png")
        );
    }
}

// src/plot_functions/plot_spike_times.rs
