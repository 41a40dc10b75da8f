// tests/tick_formatting_test.rs

use dt_sweep_render::plot_framework::{format_general, format_y_tick};
use dt_sweep_render::plot_functions::plot_metrics::dt_label;

#[test]
fn test_accuracy_ticks() {
    assert_eq!(format_y_tick(0.0), "0");
    assert_eq!(format_y_tick(55.0), "55");
    assert_eq!(format_y_tick(99.7), "100");
    assert_eq!(format_y_tick(2.5), "2.5");
}

#[test]
fn test_spike_count_ticks() {
    assert_eq!(format_y_tick(1500.0), "2k");
    assert_eq!(format_y_tick(25_000.0), "25k");
    assert_eq!(format_y_tick(1_240_000.0), "1.2M");
    assert_eq!(format_y_tick(-3000.0), "-3k");
}

#[test]
fn test_dt_labels_use_four_significant_digits() {
    assert_eq!(dt_label(0.01), "DT = 0.01");
    assert_eq!(dt_label(0.0001), "DT = 0.0001");
    assert_eq!(dt_label(0.00001), "DT = 1e-05");
    assert_eq!(dt_label(0.123456), "DT = 0.1235");
    assert_eq!(format_general(1.0, 4), "1");
}
