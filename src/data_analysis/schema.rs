// src/data_analysis/schema.rs

use crate::error::AnalysisError;
use crate::types::AveragedResults;

/// Metric columns to plot.
///
/// Columns come from the lowest-DT table in its column order; with an
/// allow-list only the listed columns are kept. Empty input yields no metrics.
pub fn select_metrics(average_results: &AveragedResults, selected: Option<&[String]>) -> Vec<String> {
    let Some(example) = average_results.values().next() else {
        return Vec::new();
    };
    example
        .metric_names
        .iter()
        .filter(|name| selected.map_or(true, |allow| allow.contains(*name)))
        .cloned()
        .collect()
}

/// Fails on the first DT table that lacks one of `metrics`.
pub fn validate_columns(average_results: &AveragedResults, metrics: &[String]) -> Result<(), AnalysisError> {
    for (dt, table) in average_results {
        if let Some(missing) = metrics.iter().find(|m| !table.has_metric(m)) {
            return Err(AnalysisError::MissingColumn {
                column: missing.clone(),
                dt: dt.value(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::run_table::{DtKey, RunTable};

    fn table(metrics: &[&str]) -> RunTable {
        RunTable::new("Epochs", metrics.iter().map(|m| m.to_string()).collect())
    }

    #[test]
    fn test_select_metrics_respects_allow_list_and_table_order() {
        let mut results = AveragedResults::new();
        results.insert(DtKey(0.1), table(&["Accuracy (%)", "Loss", "Hidden layer 1 spike counts"]));
        let allow = vec!["Hidden layer 1 spike counts".to_string(), "Accuracy (%)".to_string()];
        assert_eq!(
            select_metrics(&results, Some(&allow)),
            vec!["Accuracy (%)".to_string(), "Hidden layer 1 spike counts".to_string()]
        );
        assert_eq!(select_metrics(&results, None).len(), 3);
        assert!(select_metrics(&AveragedResults::new(), None).is_empty());
    }

    #[test]
    fn test_validate_columns_names_offending_bucket() {
        let mut results = AveragedResults::new();
        results.insert(DtKey(0.1), table(&["Accuracy (%)"]));
        results.insert(DtKey(0.5), table(&["Loss"]));
        let err = validate_columns(&results, &["Accuracy (%)".to_string()]).unwrap_err();
        match err {
            AnalysisError::MissingColumn { column, dt } => {
                assert_eq!(column, "Accuracy (%)");
                assert_eq!(dt, 0.5);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(validate_columns(&results, &[]).is_ok());
    }
}

// src/data_analysis/schema.rs
