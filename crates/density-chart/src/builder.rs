// File: crates/density-chart/src/builder.rs
// Summary: Turns a dataset into the density/generation chart, saves it as PNG and shows it.

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions, Series};
use chart_window::{ViewerError, ViewerOptions};
use log::{debug, info, warn};

use crate::config::{ChartConfig, Paths};
use crate::dataset::{self, Dataset};

/// Pixels per inch of the on-screen figure.
const SCREEN_DPI: f64 = 100.0;

/// One marker-and-line series of generation against density, autoscaled, labelled and titled.
pub fn build_chart(data: &Dataset, config: &ChartConfig) -> Chart {
    let mut chart = Chart::new();
    chart.add_series(
        Series::with_data(data.points())
            .with_color(config.color)
            .with_marker(config.marker)
            .with_line_width(Some(config.line_width)),
    );
    chart.autoscale_axes(config.margin);
    chart.x_axis.label = config.x_label.clone();
    chart.y_axis.label = config.y_label.clone();
    chart.title = Some(config.title.clone());
    chart.grid = config.grid;
    chart
}

/// Saved-image surface: figure size times DPI, tight margins.
pub fn render_options(config: &ChartConfig) -> RenderOptions {
    let (w, h) = config.figure_size;
    RenderOptions::from_figure(w, h, config.dpi)
}

pub fn save(chart: &Chart, config: &ChartConfig, path: &Path) -> Result<()> {
    let opts = render_options(config);
    debug!("rendering {}x{} px at {} dpi", opts.width, opts.height, opts.dpi);
    chart
        .render_to_png(&opts, path)
        .with_context(|| format!("failed to write chart to '{}'", path.display()))
}

/// Load the input, build the chart and save the image. Returns the chart for display.
/// Nothing is written unless the whole input parses.
pub fn run(paths: &Paths, config: &ChartConfig) -> Result<Chart> {
    info!("Using input file: {}", paths.input.display());
    let data = dataset::load(&paths.input)
        .with_context(|| format!("failed to load '{}'", paths.input.display()))?;
    info!("Loaded {} rows", data.len());
    if data.is_empty() {
        warn!("no data rows after the header; the chart will be empty");
    }

    let chart = build_chart(&data, config);
    debug!(
        "x [{:.4}, {:.4}], y [{:.4}, {:.4}]",
        chart.x_axis.min, chart.x_axis.max, chart.y_axis.min, chart.y_axis.max
    );

    save(&chart, config, &paths.output)?;
    info!("Wrote {}", paths.output.display());
    Ok(chart)
}

/// Show the chart in a window and wait for it to close.
/// Hosts without a display skip this step with a warning.
pub fn present(chart: Chart, config: &ChartConfig) -> Result<()> {
    let (w, h) = config.figure_size;
    let opts = ViewerOptions {
        title: config.window_title.clone(),
        width: w as f64 * SCREEN_DPI,
        height: h as f64 * SCREEN_DPI,
    };
    match chart_window::show(chart, &opts) {
        Ok(()) => Ok(()),
        Err(ViewerError::NoDisplay) => {
            warn!("no display available; skipping interactive view");
            Ok(())
        }
        Err(e) => Err(e).context("interactive viewer failed"),
    }
}
