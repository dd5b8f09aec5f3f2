// File: crates/density-chart/src/config.rs
// Summary: Fixed chart configuration and explicit input/output locations.

use std::path::{Path, PathBuf};

use chart_core::{Color, Marker};

pub const INPUT_FILE: &str = "data.txt";
pub const OUTPUT_FILE: &str = "plot.png";

/// Everything that shapes the chart. `Default` is the one configuration the tool ships with.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: Color,
    pub marker: Marker,
    /// Line width in points.
    pub line_width: f32,
    pub grid: bool,
    /// Figure size in inches (width, height).
    pub figure_size: (f32, f32),
    /// Resolution of the saved image.
    pub dpi: f32,
    /// Axis padding around the data, as a fraction of the data span.
    pub margin: f64,
    pub window_title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Dependence of stable generation on filling density".to_string(),
            x_label: "Filing dencity".to_string(),
            y_label: "Generation number".to_string(),
            color: Color::RED,
            marker: Marker::circle(6.0),
            line_width: 1.5,
            grid: true,
            figure_size: (10.0, 6.0),
            dpi: 300.0,
            margin: 0.05,
            window_title: "Figure 1".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Paths {
    /// `data.txt` and `plot.png` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input: dir.join(INPUT_FILE),
            output: dir.join(OUTPUT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_sit_side_by_side() {
        let p = Paths::in_dir("/tmp/run");
        assert_eq!(p.input, PathBuf::from("/tmp/run/data.txt"));
        assert_eq!(p.output, PathBuf::from("/tmp/run/plot.png"));
    }

    #[test]
    fn default_is_red_markers_on_a_grid() {
        let c = ChartConfig::default();
        assert_eq!(c.color, Color::RED);
        assert_eq!(c.marker, Marker::circle(6.0));
        assert!(c.grid);
        assert_eq!(c.figure_size, (10.0, 6.0));
        assert_eq!(c.dpi, 300.0);
    }
}
