// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over one or more line series.

use chart_core::{Chart, Series};

#[test]
fn autoscale_covers_all_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::with_data(vec![(2.0, 6.0), (3.0, 1.5)]));

    chart.autoscale_axes(0.0);

    assert!((chart.x_axis.min - 0.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 5.0).abs() < 1e-9);
    assert!((chart.y_axis.min - 1.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 6.0).abs() < 1e-9);
}

#[test]
fn autoscale_margin_matches_fraction_of_span() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(vec![(0.1, 5.0), (0.2, 7.0), (0.3, 6.0)]));

    chart.autoscale_axes(0.05);

    assert!((chart.x_axis.min - 0.09).abs() < 1e-9);
    assert!((chart.x_axis.max - 0.31).abs() < 1e-9);
    assert!((chart.y_axis.min - 4.9).abs() < 1e-9);
    assert!((chart.y_axis.max - 7.1).abs() < 1e-9);
}

#[test]
fn autoscale_keeps_labels() {
    let mut chart = Chart::new();
    chart.x_axis.label = "density".into();
    chart.add_series(Series::with_data(vec![(1.0, 1.0), (2.0, 2.0)]));
    chart.autoscale_axes(0.05);
    assert_eq!(chart.x_axis.label, "density");
}
