// src/data_analysis/mod.rs

pub mod averaging;
pub mod latency;
pub mod ranking;
pub mod schema;

// src/data_analysis/mod.rs
