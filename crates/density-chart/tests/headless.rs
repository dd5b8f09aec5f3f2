// File: crates/density-chart/tests/headless.rs
// Purpose: Viewer step on a host without a display server. Kept in its own binary because it clears
// DISPLAY/WAYLAND_DISPLAY for the whole process.

#![cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]

use density_chart::builder::{build_chart, present};
use density_chart::dataset::parse_str;
use density_chart::ChartConfig;

#[test]
fn present_is_skipped_without_display() {
    std::env::remove_var("DISPLAY");
    std::env::remove_var("WAYLAND_DISPLAY");
    assert!(!chart_window::display_available());

    let config = ChartConfig::default();
    let chart = build_chart(&parse_str("h\n0,1 5\n0,2 7\n").unwrap(), &config);
    present(chart, &config).expect("missing display is not an error");
}
