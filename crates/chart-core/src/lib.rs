// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;

pub use chart::{Chart, RenderOptions};
pub use series::{Marker, MarkerShape, Series, SeriesStyle};
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use types::Insets;

/// Re-exported so callers can name colors without depending on Skia directly.
pub use skia_safe::Color;
