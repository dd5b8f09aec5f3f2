// File: crates/chart-core/src/view.rs
// First-class view state: visible ranges and helpers for pan/zoom/autoscale.

use crate::types::Insets;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Tight extent of every finite point in the chart.
    /// Empty charts get the unit square; zero-width extents are widened by one unit around the data.
    pub fn from_chart(chart: &Chart) -> Self {
        let extent = chart
            .series
            .iter()
            .filter_map(|s| s.extent())
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)));
        let Some((mut x_min, mut x_max, mut y_min, mut y_max)) = extent else {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        };
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        Self { x_min, x_max, y_min, y_max }
    }

    /// The ranges currently set on the chart's axes.
    pub fn from_axes(chart: &Chart) -> Self {
        Self { x_min: chart.x_axis.min, x_max: chart.x_axis.max, y_min: chart.y_axis.min, y_max: chart.y_axis.max }
    }

    /// Pad both ranges by `frac` of their span on each side.
    pub fn with_margin(self, frac: f64) -> Self {
        let mx = (self.x_max - self.x_min) * frac;
        let my = (self.y_max - self.y_min) * frac;
        Self { x_min: self.x_min - mx, x_max: self.x_max + mx, y_min: self.y_min - my, y_max: self.y_max + my }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }

    /// Shift the view so content follows a drag of (`dx`, `dy`) screen pixels.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, width: i32, height: i32, insets: &Insets) {
        let plot_w = ((width - insets.hsum() as i32) as f64).max(1.0);
        let plot_h = ((height - insets.vsum() as i32) as f64).max(1.0);
        let x_span = self.x_max - self.x_min;
        let y_span = self.y_max - self.y_min;
        let wx = -dx / plot_w * x_span;
        let wy = dy / plot_h * y_span;
        self.x_min += wx; self.x_max += wx;
        self.y_min += wy; self.y_max += wy;
    }

    /// Zoom keeping the data point under the cursor fixed. Positive `scroll` zooms in.
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, cursor_y: f64, width: i32, height: i32, insets: &Insets) {
        let w = width as f64; let h = height as f64;
        let l = insets.left as f64; let rpx = (w - insets.right as f64).max(l + 1.0);
        let t = insets.top as f64; let bpx = (h - insets.bottom as f64).max(t + 1.0);
        let plot_w = rpx - l; let plot_h = bpx - t;
        let cx = cursor_x.clamp(l, rpx); let cy = cursor_y.clamp(t, bpx);
        let x_span = self.x_max - self.x_min; let y_span = self.y_max - self.y_min;
        let wx = self.x_min + (cx - l) / plot_w * x_span;
        let wy = self.y_max - (cy - t) / plot_h * y_span;
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let nx = x_span * factor; let ny = y_span * factor;
        let rx = (wx - self.x_min) / x_span; let ry = (self.y_max - wy) / y_span;
        self.x_min = wx - rx * nx; self.x_max = self.x_min + nx;
        self.y_max = wy + ry * ny; self.y_min = self.y_max - ny;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Series;

    fn chart_with(data: Vec<(f64, f64)>) -> Chart {
        let mut c = Chart::new();
        c.add_series(Series::with_data(data));
        c
    }

    #[test]
    fn empty_chart_falls_back_to_unit_square() {
        let v = ViewState::from_chart(&Chart::new());
        assert_eq!(v, ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
    }

    #[test]
    fn single_point_is_centered() {
        let v = ViewState::from_chart(&chart_with(vec![(2.0, 7.0)]));
        assert_eq!((v.x_min, v.x_max), (1.5, 2.5));
        assert_eq!((v.y_min, v.y_max), (6.5, 7.5));
    }

    #[test]
    fn margin_pads_each_side() {
        let v = ViewState::from_chart(&chart_with(vec![(0.0, 0.0), (10.0, 20.0)])).with_margin(0.05);
        assert!((v.x_min + 0.5).abs() < 1e-12 && (v.x_max - 10.5).abs() < 1e-12);
        assert!((v.y_min + 1.0).abs() < 1e-12 && (v.y_max - 21.0).abs() < 1e-12);
    }

    #[test]
    fn pan_moves_both_ends_equally() {
        let mut v = ViewState { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 };
        let insets = Insets::new(0, 0, 0, 0);
        v.pan_by_pixels(50.0, 0.0, 100, 100, &insets);
        assert!((v.x_min + 5.0).abs() < 1e-12);
        assert!((v.x_max - 5.0).abs() < 1e-12);
        assert_eq!((v.y_min, v.y_max), (0.0, 10.0));
    }

    #[test]
    fn zoom_keeps_cursor_point_fixed() {
        let mut v = ViewState { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 };
        let insets = Insets::new(0, 0, 0, 0);
        // cursor over data (2.5, 7.5)
        v.zoom_at_pixel(0.5, 25.0, 25.0, 100, 100, &insets);
        assert!((v.x_max - v.x_min - 5.0).abs() < 1e-9);
        let wx = v.x_min + 0.25 * (v.x_max - v.x_min);
        let wy = v.y_max - 0.25 * (v.y_max - v.y_min);
        assert!((wx - 2.5).abs() < 1e-9);
        assert!((wy - 7.5).abs() < 1e-9);
    }
}
