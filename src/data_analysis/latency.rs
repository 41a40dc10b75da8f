// src/data_analysis/latency.rs

use ndarray::{Array3, Axis};

use crate::error::AnalysisError;
use crate::types::LatencyProbabilities;

/// Probability that the labelled output neuron fired within each latency budget.
///
/// `discrete_out_spikes` is shaped `(batch, neurons, time_steps)` and holds
/// spike times. For every latency `L` and sample `i`, counts the entries of
/// `discrete_out_spikes[i, labels[i], ..]` that are `<= L` and divides by
/// `target_true`, the expected number of spikes of a correct output.
pub fn calculate_latency_prob(
    discrete_out_spikes: &Array3<f64>,
    labels: &[usize],
    latency_times: &[f64],
    target_true: f64,
) -> Result<LatencyProbabilities, AnalysisError> {
    let (batch_size, num_neurons, _time_steps) = discrete_out_spikes.dim();

    if labels.len() != batch_size {
        return Err(AnalysisError::ShapeMismatch(format!(
            "{} labels for a batch of {}",
            labels.len(),
            batch_size
        )));
    }
    if let Some(&bad) = labels.iter().find(|&&label| label >= num_neurons) {
        return Err(AnalysisError::InvalidArgument(format!(
            "label {bad} out of range for {num_neurons} output neurons"
        )));
    }
    if !(target_true.is_finite() && target_true > 0.0) {
        return Err(AnalysisError::InvalidArgument(format!(
            "target spike count must be positive, got {target_true}"
        )));
    }

    // Spike times of the labelled neuron, one lane per sample.
    let target_spikes: Vec<_> = discrete_out_spikes
        .axis_iter(Axis(0))
        .zip(labels)
        .map(|(sample, &label)| sample.index_axis_move(Axis(0), label))
        .collect();

    let probabilities = latency_times
        .iter()
        .map(|&latency| {
            let per_sample = target_spikes
                .iter()
                .map(|spikes| {
                    let count = spikes.iter().filter(|&&t| t <= latency).count();
                    count as f64 / target_true
                })
                .collect();
            (latency, per_sample)
        })
        .collect();

    Ok(probabilities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_counts_spikes_within_latency() {
        // batch 2, neurons 2, steps 3
        let spikes = array![
            [[0.01, 0.05, 0.20], [0.02, 0.03, 0.04]],
            [[0.50, 0.60, 0.70], [0.01, 0.02, 0.30]],
        ];
        let probs = calculate_latency_prob(&spikes, &[0, 1], &[0.05, 1.0], 2.0).unwrap();
        assert_eq!(probs.len(), 2);
        assert_eq!(probs[0], (0.05, vec![1.0, 1.0]));
        assert_eq!(probs[1], (1.0, vec![1.5, 1.5]));
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let spikes = Array3::<f64>::zeros((1, 2, 3));
        assert!(calculate_latency_prob(&spikes, &[0, 1], &[0.1], 1.0).is_err());
        assert!(calculate_latency_prob(&spikes, &[2], &[0.1], 1.0).is_err());
        assert!(calculate_latency_prob(&spikes, &[0], &[0.1], 0.0).is_err());
    }
}

// src/data_analysis/latency.rs
