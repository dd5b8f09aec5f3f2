// File: crates/density-chart/src/lib.rs
// Summary: Library side of the chart builder (dataset parsing, fixed chart configuration, build/save/show).

pub mod builder;
pub mod config;
pub mod dataset;

pub use config::{ChartConfig, Paths};
pub use dataset::{Dataset, LoadError, ParseError};
