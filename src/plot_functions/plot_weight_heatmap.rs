// src/plot_functions/plot_weight_heatmap.rs

use log::info;
use ndarray::Array2;
use ndarray_stats::QuantileExt;
use std::error::Error;
use std::path::Path;

use crate::constants::{DEFAULT_HEATMAP_TITLE, HEATMAP_PLOT_HEIGHT, HEATMAP_PLOT_WIDTH};
use crate::plot_framework::{draw_matrix_heatmap, MatrixHeatmapConfig};

/// Color scale bounds of a weight matrix over its finite entries.
/// A matrix without finite entries gets `[0, 1]`.
pub fn weight_range(weights: &Array2<f64>) -> (f64, f64) {
    let finite = weights.mapv(|w| if w.is_finite() { w } else { f64::NAN });
    let (min_val, max_val) = (*finite.min_skipnan(), *finite.max_skipnan());
    if min_val.is_nan() || max_val.is_nan() {
        (0.0, 1.0)
    } else {
        (min_val, max_val)
    }
}

/// Renders a weight matrix (rows are output neurons, columns input neurons)
/// with a viridis color bar.
pub fn plot_heatmap(
    weights: &Array2<f64>,
    title: Option<&str>,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let (min_value, max_value) = weight_range(weights);
    let config = MatrixHeatmapConfig {
        title: title.unwrap_or(DEFAULT_HEATMAP_TITLE).to_string(),
        x_label: "Input Neurons".to_string(),
        y_label: "Output Neurons".to_string(),
        values: weights,
        min_value,
        max_value,
    };
    draw_matrix_heatmap(
        output_path,
        (HEATMAP_PLOT_WIDTH, HEATMAP_PLOT_HEIGHT),
        &config,
    )?;
    info!("  Heatmap saved as '{}'.", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_weight_range_uses_finite_entries() {
        assert_eq!(weight_range(&array![[0.5, -1.0], [2.0, 0.0]]), (-1.0, 2.0));
        assert_eq!(weight_range(&array![[0.5, f64::NAN], [2.0, 0.0]]), (0.0, 2.0));
        assert_eq!(weight_range(&array![[0.0, f64::INFINITY], [1.0, 2.0]]), (0.0, 2.0));
        assert_eq!(weight_range(&array![[f64::NEG_INFINITY, 3.0]]), (3.0, 3.0));
        assert_eq!(weight_range(&array![[f64::NAN, f64::NAN], [f64::NAN, f64::NAN]]), (0.0, 1.0));
        assert_eq!(weight_range(&Array2::<f64>::zeros((0, 3))), (0.0, 1.0));
    }

    #[test]
    fn test_plot_heatmap_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.png");
        plot_heatmap(&array![[0.1, -0.4, 0.9], [0.3, 0.0, -0.2]], Some("Layer 1"), &path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_plot_heatmap_handles_empty_and_non_finite_matrices() {
        let dir = tempfile::tempdir().unwrap();
        let matrices = [
            ("empty.png", Array2::<f64>::zeros((0, 0))),
            ("all_nan.png", array![[f64::NAN, f64::NAN], [f64::NAN, f64::NAN]]),
            ("with_inf.png", array![[0.0, f64::INFINITY], [1.0, 2.0]]),
            ("flat.png", array![[0.7, 0.7], [0.7, 0.7]]),
        ];
        for (name, weights) in &matrices {
            let path = dir.path().join(name);
            plot_heatmap(weights, None, &path).unwrap();
            assert!(path.is_file(), "{name} was not written");
        }
    }
}

// src/plot_functions/plot_weight_heatmap.rs
