// File: crates/chart-core/src/series.rs
// Summary: XY line series with per-series stroke and marker styling.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
}

/// Point marker; `size` is the marker diameter (or side) in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub shape: MarkerShape,
    pub size: f32,
}

impl Marker {
    pub const fn circle(size: f32) -> Self {
        Self { shape: MarkerShape::Circle, size }
    }

    pub const fn square(size: f32) -> Self {
        Self { shape: MarkerShape::Square, size }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    /// `None` falls back to the theme's line stroke.
    pub color: Option<skia::Color>,
    /// Connecting line width in points; `None` draws markers only.
    pub line_width: Option<f32>,
    pub marker: Option<Marker>,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self { color: None, line_width: Some(1.5), marker: None }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, style: SeriesStyle::default() }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.style.marker = Some(marker);
        self
    }

    pub fn with_line_width(mut self, width: Option<f32>) -> Self {
        self.style.line_width = width;
        self
    }

    pub fn len(&self) -> usize {
        self.data_xy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_xy.is_empty()
    }

    /// `(x_min, x_max, y_min, y_max)` over finite points, `None` when there are none.
    pub fn extent(&self) -> Option<(f64, f64, f64, f64)> {
        self.data_xy
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc, &(x, y)| match acc {
                None => Some((x, x, y, y)),
                Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
            })
    }
}
