// src/plot_functions/mod.rs

pub mod plot_metrics;
pub mod plot_rank;
pub mod plot_spike_times;
pub mod plot_weight_heatmap;

// src/plot_functions/mod.rs
