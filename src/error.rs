// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading and aggregating run tables.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("'{path}' has no '{column}' column")]
    MissingEpochColumn { path: PathBuf, column: String },

    #[error("'{path}' row {row}: column '{column}' holds non-numeric value '{value}'")]
    NonNumeric {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    /// A requested metric is absent from the averaged table of one DT bucket.
    #[error("metric column '{column}' is missing from the table for DT = {dt}")]
    MissingColumn { column: String, dt: f64 },

    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl AnalysisError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalysisError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        AnalysisError::Csv {
            path: path.into(),
            source,
        }
    }
}

// src/error.rs
