// src/data_input/dt_filename.rs

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::DT_PATTERN;

fn dt_regex() -> &'static Regex {
    static DT_REGEX: OnceLock<Regex> = OnceLock::new();
    DT_REGEX.get_or_init(|| Regex::new(DT_PATTERN).expect("DT_PATTERN is a valid regex"))
}

/// True when the file name carries the test-result marker.
pub fn is_result_file(filename: &str, marker: &str) -> bool {
    filename.contains(marker)
}

/// Extracts the DT value from a file name such as `exp_Test DT = 0.01_run1.csv`.
///
/// Whitespace around `=` is tolerated; decimal and exponential notation are accepted.
/// Returns `None` when no token is present or it does not parse.
pub fn extract_dt(filename: &str) -> Option<f64> {
    let captures = dt_regex().captures(filename)?;
    captures.get(1)?.as_str().parse::<f64>().ok()
}


// src/data_input/dt_filename.rs
