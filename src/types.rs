// src/types.rs
// Type aliases shared between the loading, analysis and plotting stages

use std::collections::BTreeMap;

use crate::data_input::run_table::{DtKey, RunTable};

/// Run tables grouped by DT, iterated in ascending DT order.
pub type DtBuckets = BTreeMap<DtKey, Vec<RunTable>>;

/// One averaged table per DT.
pub type AveragedResults = BTreeMap<DtKey, RunTable>;

// Plot data types
pub type SeriesPoints = Vec<(f64, f64)>;

/// Latency time paired with one probability per sample.
pub type LatencyProbabilities = Vec<(f64, Vec<f64>)>;
