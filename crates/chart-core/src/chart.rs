// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (RGBA / PNG) using Skia CPU raster surfaces.

use anyhow::{anyhow, bail, Context, Result};
use skia_safe as skia;

use crate::grid::{nice_ticks, tick_labels};
use crate::scale::LinearScale;
use crate::series::{MarkerShape, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::*;
use crate::view::ViewState;
use crate::Axis;

const X_TICK_TARGET: usize = 8;
const Y_TICK_TARGET: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Pixels per inch; scales every point-sized stroke, marker and font.
    pub dpi: f32,
    /// Fixed margins; `None` sizes them to the measured text (tight layout).
    pub insets: Option<Insets>,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            dpi: DEFAULT_DPI,
            insets: None,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Surface for a figure of `width_in` x `height_in` inches at `dpi`.
    pub fn from_figure(width_in: f32, height_in: f32, dpi: f32) -> Self {
        Self {
            width: (width_in * dpi).round() as i32,
            height: (height_in * dpi).round() as i32,
            dpi,
            ..Self::default()
        }
    }

    pub fn px_per_pt(&self) -> f32 {
        self.dpi / POINTS_PER_INCH
    }
}

#[derive(Clone)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<String>,
    pub grid: bool,
    pub theme: Theme,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

/// Text sizes measured once per render; drive both the tight margins and label placement.
#[derive(Default)]
struct TextMetrics {
    y_tick_w: f32,
    tick_h: f32,
    x_label_h: f32,
    y_label_h: f32,
    title_h: f32,
    /// Half width of the right-most x tick label.
    x_overhang: f32,
}

struct Ticks {
    x: Vec<(f64, String)>,
    y: Vec<(f64, String)>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::unit(),
            y_axis: Axis::unit(),
            title: None,
            grid: false,
            theme: Theme::default(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padded by `margin` (fraction of the span) on each side.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self).with_margin(margin).apply_to_chart(self);
    }

    /// Render into a tightly packed RGBA8 (unpremultiplied) buffer.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        if opts.width <= 0 || opts.height <= 0 {
            bail!("invalid surface size {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let (w, h) = (opts.width as u32, opts.height as u32);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            bail!("failed to read back {}x{} pixels", w, h);
        }
        Ok((pixels, w, h, stride))
    }

    /// Render and encode as PNG in memory. The `pHYs` chunk records `opts.dpi`.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let ppm = pixels_per_meter(opts.dpi);

        let mut bytes = Vec::new();
        let mut encoder = png::Encoder::new(&mut bytes, w, h);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder.write_header().context("encode PNG header failed")?;
        writer.write_image_data(&pixels).context("encode PNG failed")?;
        writer.finish().context("encode PNG failed")?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`.
    /// The image is fully encoded before the file is touched.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &data).with_context(|| format!("writing {}", path.display()))?;
        log::debug!("wrote {} ({} bytes, {}x{})", path.display(), data.len(), opts.width, opts.height);
        Ok(())
    }

    /// Margins `render_to_rgba8` will use for `opts`: the fixed insets, or the tight layout.
    pub fn plot_insets(&self, opts: &RenderOptions) -> Insets {
        if let Some(insets) = opts.insets {
            return insets;
        }
        let px = opts.px_per_pt();
        let metrics = if opts.draw_labels {
            self.measure(&TextShaper::new(), &self.ticks(), px)
        } else {
            TextMetrics::default()
        };
        self.tight_insets(&metrics, px)
    }

    fn ticks(&self) -> Ticks {
        let label = |values: Vec<f64>| -> Vec<(f64, String)> {
            let labels = tick_labels(&values);
            values.into_iter().zip(labels).collect()
        };
        Ticks {
            x: label(nice_ticks(self.x_axis.min, self.x_axis.max, X_TICK_TARGET)),
            y: label(nice_ticks(self.y_axis.min, self.y_axis.max, Y_TICK_TARGET)),
        }
    }

    fn measure(&self, shaper: &TextShaper, ticks: &Ticks, px: f32) -> TextMetrics {
        let tick_size = TICK_LABEL_PT * px;
        let y_tick_w = ticks
            .y
            .iter()
            .map(|(_, s)| shaper.measure(s, tick_size).0)
            .fold(0.0f32, f32::max);
        let tick_h = if ticks.x.is_empty() && ticks.y.is_empty() {
            0.0
        } else {
            shaper.measure("0", tick_size).1
        };
        let x_overhang = ticks
            .x
            .last()
            .map(|(_, s)| shaper.measure(s, tick_size).0 * 0.5)
            .unwrap_or(0.0);
        TextMetrics {
            y_tick_w,
            tick_h,
            x_label_h: shaper.measure(&self.x_axis.label, LABEL_PT * px).1,
            y_label_h: shaper.measure(&self.y_axis.label, LABEL_PT * px).1,
            title_h: self
                .title
                .as_deref()
                .map(|t| shaper.measure(t, TITLE_PT * px).1)
                .unwrap_or(0.0),
            x_overhang,
        }
    }

    /// Margins that just fit the frame decorations plus the outer pad.
    fn tight_insets(&self, m: &TextMetrics, px: f32) -> Insets {
        let outer = OUTER_PAD_PT * px;
        let tick = TICK_LEN_PT * px;
        let tick_pad = if m.tick_h > 0.0 { TICK_PAD_PT * px } else { 0.0 };
        let gap = |h: f32, pad: f32| if h > 0.0 { h + pad * px } else { 0.0 };

        let y_ticks = if m.y_tick_w > 0.0 { m.y_tick_w + tick_pad } else { 0.0 };
        let left = outer + gap(m.y_label_h, LABEL_PAD_PT) + y_ticks + tick;
        let bottom = outer + gap(m.x_label_h, LABEL_PAD_PT) + m.tick_h + tick_pad + tick;
        let top = outer + gap(m.title_h, TITLE_PAD_PT).max(m.tick_h * 0.5);
        let right = outer + m.x_overhang;
        Insets::from_f32(left, right, top, bottom)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &self.theme;
        let px = opts.px_per_pt();
        canvas.clear(theme.background);

        let ticks = self.ticks();
        let shaper = opts.draw_labels.then(TextShaper::new);
        let metrics = shaper
            .as_ref()
            .map(|s| self.measure(s, &ticks, px))
            .unwrap_or_default();
        let insets = opts.insets.unwrap_or_else(|| self.tight_insets(&metrics, px));

        // Plot rect
        let l = insets.left as f32;
        let t = insets.top as f32;
        let r = ((opts.width - insets.right as i32) as f32).max(l + 1.0);
        let b = ((opts.height - insets.bottom as i32) as f32).max(t + 1.0);
        let plot = skia::Rect::from_ltrb(l, t, r, b);
        let xs = LinearScale::new(self.x_axis.min, self.x_axis.max, l, r);
        let ys = LinearScale::new(self.y_axis.min, self.y_axis.max, b, t);
        log::debug!(
            "render {}x{} @ {} dpi, plot {:?}, x [{}, {}], y [{}, {}]",
            opts.width, opts.height, opts.dpi, plot,
            self.x_axis.min, self.x_axis.max, self.y_axis.min, self.y_axis.max
        );

        if self.grid {
            draw_grid(canvas, plot, &xs, &ys, &ticks, theme, px);
        }

        canvas.save();
        canvas.clip_rect(plot, skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &xs, &ys, s, theme, px);
        }
        canvas.restore();

        draw_frame(canvas, plot, &xs, &ys, &ticks, theme, px);

        if let Some(shaper) = &shaper {
            self.draw_text(canvas, shaper, plot, &xs, &ys, &ticks, &metrics, px);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        plot: skia::Rect,
        xs: &LinearScale,
        ys: &LinearScale,
        ticks: &Ticks,
        m: &TextMetrics,
        px: f32,
    ) {
        let theme = &self.theme;
        let tick = TICK_LEN_PT * px;
        let tick_pad = TICK_PAD_PT * px;
        let tick_size = TICK_LABEL_PT * px;

        // Tick labels
        for (v, s) in &ticks.x {
            shaper.draw_centered(canvas, s, xs.to_px(*v), plot.bottom + tick + tick_pad, tick_size, theme.tick);
        }
        for (v, s) in &ticks.y {
            let (w, h) = shaper.measure(s, tick_size);
            let x = plot.left - tick - tick_pad - w;
            shaper.draw_left(canvas, s, x, ys.to_px(*v) - h * 0.5, tick_size, theme.tick);
        }

        // Axis labels
        if !self.x_axis.label.is_empty() {
            let top = plot.bottom + tick + tick_pad + m.tick_h + LABEL_PAD_PT * px;
            shaper.draw_centered(canvas, &self.x_axis.label, plot.center_x(), top, LABEL_PT * px, theme.axis_label);
        }
        if !self.y_axis.label.is_empty() {
            let y_ticks = if m.y_tick_w > 0.0 { m.y_tick_w + tick_pad } else { 0.0 };
            let cx = plot.left - tick - y_ticks - LABEL_PAD_PT * px - m.y_label_h * 0.5;
            shaper.draw_rotated(canvas, &self.y_axis.label, cx, plot.center_y(), LABEL_PT * px, theme.axis_label);
        }

        // Title
        if let Some(title) = self.title.as_deref().filter(|s| !s.is_empty()) {
            let top = plot.top - TITLE_PAD_PT * px - m.title_h;
            shaper.draw_centered(canvas, title, plot.center_x(), top, TITLE_PT * px, theme.title);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: skia::Rect,
    xs: &LinearScale,
    ys: &LinearScale,
    ticks: &Ticks,
    theme: &Theme,
    px: f32,
) {
    let paint = stroke_paint(theme.grid, GRID_WIDTH_PT * px);

    // verticals
    for (v, _) in &ticks.x {
        let x = xs.to_px(*v);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    // horizontals
    for (v, _) in &ticks.y {
        let y = ys.to_px(*v);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_frame(
    canvas: &skia::Canvas,
    plot: skia::Rect,
    xs: &LinearScale,
    ys: &LinearScale,
    ticks: &Ticks,
    theme: &Theme,
    px: f32,
) {
    canvas.draw_rect(plot, &stroke_paint(theme.axis_line, FRAME_WIDTH_PT * px));

    // Outward tick marks
    let tick = TICK_LEN_PT * px;
    let paint = stroke_paint(theme.tick, FRAME_WIDTH_PT * px);
    for (v, _) in &ticks.x {
        let x = xs.to_px(*v);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + tick), &paint);
    }
    for (v, _) in &ticks.y {
        let y = ys.to_px(*v);
        canvas.draw_line((plot.left - tick, y), (plot.left, y), &paint);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    xs: &LinearScale,
    ys: &LinearScale,
    series: &Series,
    theme: &Theme,
    px: f32,
) {
    if series.is_empty() {
        return;
    }
    let color = series.style.color.unwrap_or(theme.line_stroke);

    if let Some(width) = series.style.line_width {
        // Non-finite points break the line instead of being joined over.
        let mut path = skia::Path::new();
        let mut pen_down = false;
        for &(x, y) in &series.data_xy {
            if !(x.is_finite() && y.is_finite()) {
                pen_down = false;
                continue;
            }
            let p = (xs.to_px(x), ys.to_px(y));
            if pen_down {
                path.line_to(p);
            } else {
                path.move_to(p);
                pen_down = true;
            }
        }
        let mut stroke = stroke_paint(color, width * px);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        canvas.draw_path(&path, &stroke);
    }

    if let Some(marker) = series.style.marker {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color);
        let half = marker.size * px * 0.5;
        for &(x, y) in series.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
            let (cx, cy) = (xs.to_px(x), ys.to_px(y));
            match marker.shape {
                MarkerShape::Circle => {
                    canvas.draw_circle((cx, cy), half, &fill);
                }
                MarkerShape::Square => {
                    canvas.draw_rect(skia::Rect::from_ltrb(cx - half, cy - half, cx + half, cy + half), &fill);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_size_scales_with_dpi() {
        let opts = RenderOptions::from_figure(10.0, 6.0, 300.0);
        assert_eq!((opts.width, opts.height), (3000, 1800));
        assert!((opts.px_per_pt() - 300.0 / 72.0).abs() < 1e-6);
        assert!(opts.insets.is_none());
    }

    #[test]
    fn tight_insets_without_text_keep_only_pad_and_ticks() {
        let chart = Chart::new();
        let insets = chart.tight_insets(&TextMetrics::default(), 1.0);
        let pad = OUTER_PAD_PT.ceil() as u32;
        assert_eq!(insets.right, pad);
        assert_eq!(insets.top, pad);
        assert_eq!(insets.left, (OUTER_PAD_PT + TICK_LEN_PT).ceil() as u32);
    }

    #[test]
    fn tight_insets_grow_with_text() {
        let chart = Chart::new();
        let m = TextMetrics {
            y_tick_w: 30.0,
            tick_h: 12.0,
            x_label_h: 14.0,
            y_label_h: 14.0,
            title_h: 18.0,
            x_overhang: 10.0,
        };
        let bare = chart.tight_insets(&TextMetrics::default(), 1.0);
        let full = chart.tight_insets(&m, 1.0);
        assert!(full.left >= bare.left + 30 + 14);
        assert!(full.bottom >= bare.bottom + 12 + 14);
        assert!(full.top >= bare.top + 18);
        assert_eq!(full.right, bare.right + 10);
    }

    #[test]
    fn png_records_resolution() {
        let opts = RenderOptions::from_figure(2.0, 1.0, 300.0);
        let bytes = Chart::new().render_to_png_bytes(&opts).expect("png");
        let mut reader = png::Decoder::new(bytes.as_slice()).read_info().expect("decode header");
        let dims = reader.info().pixel_dims.expect("pHYs chunk present");
        assert_eq!((dims.xppu, dims.yppu), (11811, 11811));
        assert_eq!(dims.unit, png::Unit::Meter);
        assert_eq!((reader.info().width, reader.info().height), (600, 300));
        let mut buf = vec![0; reader.output_buffer_size()];
        reader.next_frame(&mut buf).expect("decode pixels");
        // Plain white background at the corner.
        assert_eq!(&buf[..4], &[255, 255, 255, 255]);
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let mut opts = RenderOptions::default();
        opts.width = 0;
        assert!(Chart::new().render_to_rgba8(&opts).is_err());
    }
}
