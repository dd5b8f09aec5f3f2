// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Axis, Chart, Insets, RenderOptions, Series};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque white figure background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn grid_lines_only_when_enabled() {
    let build = |grid: bool| {
        let mut chart = Chart::new();
        chart.x_axis = Axis::new("", 0.0, 10.0);
        chart.y_axis = Axis::new("", 0.0, 10.0);
        chart.grid = grid;
        let mut opts = RenderOptions::default();
        opts.draw_labels = false;
        opts.insets = Some(Insets::new(50, 50, 50, 50));
        chart.render_to_rgba8(&opts).expect("render").0
    };
    let plain = build(false);
    let gridded = build(true);

    // Plot spans rows 50..550; the y = 4 tick sits at row 350
    let (w, stride) = (1000usize, 4000usize);
    let y = 350;
    let grey = |buf: &[u8]| (60..w - 60).filter(|&x| {
        let i = y * stride + x * 4;
        buf[i] < 250 && buf[i] > 100
    }).count();
    assert_eq!(grey(&plain), 0);
    assert!(grey(&gridded) > 500, "expected a horizontal grid line");
}
