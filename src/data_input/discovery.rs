// src/data_input/discovery.rs

use log::{info, warn};
use std::fs;

use crate::config::AnalysisConfig;
use crate::data_input::dt_filename::{extract_dt, is_result_file};
use crate::data_input::run_parser::load_run_table;
use crate::data_input::run_table::{DtKey, RunTable};
use crate::error::AnalysisError;
use crate::types::DtBuckets;

/// Appends a run table to the bucket of its DT value.
pub fn insert_run(buckets: &mut DtBuckets, dt: f64, table: RunTable) {
    buckets.entry(DtKey(dt)).or_default().push(table);
}

/// Scans `config.input_dir` and groups every loadable result file by DT.
///
/// Entries are visited in lexicographic file-name order. Files without the
/// marker are ignored; files without a DT token or that fail to load are
/// reported and skipped. Only failing to list the directory is an error.
pub fn discover_runs(config: &AnalysisConfig) -> Result<DtBuckets, AnalysisError> {
    let dir = &config.input_dir;
    let entries = fs::read_dir(dir).map_err(|e| AnalysisError::io(dir, e))?;

    let mut filenames: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AnalysisError::io(dir, e))?;
        match entry.file_name().into_string() {
            Ok(name) => filenames.push(name),
            Err(raw) => warn!("Skipping: {:?} (file name is not valid UTF-8)", raw),
        }
    }
    filenames.sort();

    let mut buckets = DtBuckets::new();
    for filename in filenames {
        if !is_result_file(&filename, &config.file_marker) {
            continue;
        }

        let Some(dt) = extract_dt(&filename) else {
            warn!("Skipping: {filename} (no DT match)");
            continue;
        };

        let path = dir.join(&filename);
        let table = match load_run_table(&path, &config.epoch_column) {
            Ok(table) => table,
            Err(e) => {
                warn!("Failed to read {filename}: {e}");
                continue;
            }
        };

        insert_run(&mut buckets, dt, table);
    }

    info!(
        "Grouped {} run(s) into {} DT bucket(s) from '{}'",
        buckets.values().map(Vec::len).sum::<usize>(),
        buckets.len(),
        dir.display()
    );
    Ok(buckets)
}


// src/data_input/discovery.rs
