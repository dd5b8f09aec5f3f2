// File: crates/chart-core/src/theme.rs
// Summary: Color theme for chart rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    /// Stroke for series that do not set their own color.
    pub line_stroke: skia::Color,
}

impl Theme {
    /// Paper look: white figure, light grey grid, black frame and text.
    pub fn light() -> Self {
        Self {
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            title: skia::Color::BLACK,
            line_stroke: skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
