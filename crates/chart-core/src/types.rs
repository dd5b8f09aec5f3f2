// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure sizes, resolution, margins, text sizes).

/// Resolution used when no DPI is requested (on-screen figures).
pub const DEFAULT_DPI: f32 = 100.0;
/// Default surface width in pixels (10 in at `DEFAULT_DPI`).
pub const WIDTH: i32 = 1000;
/// Default surface height in pixels (6 in at `DEFAULT_DPI`).
pub const HEIGHT: i32 = 600;

/// Typographic points per inch. Stroke widths and font sizes are in points.
pub const POINTS_PER_INCH: f32 = 72.0;
pub const METERS_PER_INCH: f32 = 0.0254;

pub const TITLE_PT: f32 = 12.0;
pub const LABEL_PT: f32 = 10.0;
pub const TICK_LABEL_PT: f32 = 10.0;
pub const TICK_LEN_PT: f32 = 3.5;
pub const TICK_PAD_PT: f32 = 3.5;
pub const LABEL_PAD_PT: f32 = 4.0;
pub const TITLE_PAD_PT: f32 = 6.0;
/// Whitespace kept around the content by the tight layout (0.1 in).
pub const OUTER_PAD_PT: f32 = 7.2;
pub const FRAME_WIDTH_PT: f32 = 0.8;
pub const GRID_WIDTH_PT: f32 = 0.8;

/// PNG `pHYs` resolution for `dpi` (300 dpi is 11811 px/m).
pub fn pixels_per_meter(dpi: f32) -> u32 {
    (dpi / METERS_PER_INCH).round().max(0.0) as u32
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Round fractional pixel margins up so content never touches the edge.
    pub fn from_f32(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        let px = |v: f32| v.max(0.0).ceil() as u32;
        Self::new(px(left), px(right), px(top), px(bottom))
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}
