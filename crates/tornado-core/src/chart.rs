// File: crates/tornado-core/src/chart.rs
// Summary: TornadoChart and the headless render pipeline on Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::dataset::Dataset;
use crate::layout::{self, HAlign, TornadoLayout};
use crate::legend;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::ticks::{format_quantity, linspace};
use crate::types::{Insets, HEIGHT, WIDTH};

const TITLE_SIZE: f32 = 19.0;
const AXIS_LABEL_SIZE: f32 = 14.0;
const ITEM_TICK_SIZE: f32 = 13.0;
const X_TICK_SIZE: f32 = 12.0;
const ANNOTATION_SIZE: f32 = 11.0;
const LEGEND_SIZE: f32 = 12.0;
/// Fraction of a row slot occupied by the bars.
const BAR_FILL: f32 = 0.8;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable all text (title, ticks, annotations, legends) for
    /// platform-deterministic pixel output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// The mirrored forecast/actual bar chart over one validated dataset.
/// Single-pass and non-interactive: build, render, drop.
pub struct TornadoChart {
    pub dataset: Dataset,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl TornadoChart {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            title: "Forecast vs Actual Sales (Tornado Chart)".to_string(),
            x_label: "Volume".to_string(),
            y_label: "Item".to_string(),
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render and PNG-encode in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = info.min_row_bytes();
        let mut pixels = vec![0u8; info.compute_byte_size(stride)];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read RGBA pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw_frame(surface.canvas(), opts);
        Ok(surface)
    }

    fn draw_frame(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        // Plot rect inside the margins.
        let l = opts.insets.left as i32;
        let r = opts.width - opts.insets.right as i32;
        let t = opts.insets.top as i32;
        let b = opts.height - opts.insets.bottom as i32;

        let tornado = layout::build(&self.dataset, theme);
        let x_min = tornado.x_min;
        let span = (tornado.x_max - x_min).max(1e-12);
        let sx = move |x: f64| -> f32 { l as f32 + ((x - x_min) / span) as f32 * (r - l) as f32 };

        // Horizontal-bar convention: row 0 sits at the bottom.
        let n = self.dataset.len();
        let row_h = (b - t) as f32 / n as f32;
        let cy = move |row: usize| -> f32 { b as f32 - (row as f32 + 0.5) * row_h };
        let bar_h = row_h * BAR_FILL;

        draw_bars(canvas, &tornado, &sx, &cy, bar_h);
        draw_axes(canvas, theme, l, t, r, b, sx(0.0));

        if !opts.draw_labels {
            return;
        }
        let shaper = TextShaper::new();

        draw_x_ticks(canvas, &shaper, theme, &tornado, &sx, b);
        draw_item_ticks(canvas, &shaper, &tornado, &cy, l);
        draw_annotations(canvas, &shaper, theme, &tornado, &sx, &cy);
        draw_headings(canvas, &shaper, theme, self, l, r, t, b);
        draw_legends(canvas, &shaper, theme, &self.dataset, l, r, b);
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_bars(
    canvas: &skia::Canvas,
    tornado: &TornadoLayout,
    sx: &impl Fn(f64) -> f32,
    cy: &impl Fn(usize) -> f32,
    bar_h: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);

    for bar in &tornado.bars {
        paint.set_color(bar.color);
        let x0 = sx(bar.from);
        let x1 = sx(bar.to);
        let yc = cy(bar.row);
        let rect = skia::Rect::from_ltrb(
            x0.min(x1),
            yc - bar_h * 0.5,
            x0.max(x1),
            yc + bar_h * 0.5,
        );
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    theme: &Theme,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    zero_px: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // Baseline below the bars and the vertical reference line at x = 0.
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &paint);
    canvas.draw_line((zero_px, t as f32), (zero_px, b as f32), &paint);
}

fn draw_x_ticks(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    tornado: &TornadoLayout,
    sx: &impl Fn(f64) -> f32,
    b: i32,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for value in linspace(tornado.x_min, tornado.x_max, 6) {
        let x = sx(value);
        canvas.draw_line((x, b as f32), (x, b as f32 + 5.0), &paint);
        shaper.draw_center(
            canvas,
            &format_quantity(value),
            x,
            b as f32 + 16.0,
            X_TICK_SIZE,
            theme.tick_label,
            false,
        );
    }
}

fn draw_item_ticks(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    tornado: &TornadoLayout,
    cy: &impl Fn(usize) -> f32,
    l: i32,
) {
    for tick in &tornado.item_ticks {
        shaper.draw_right(
            canvas,
            &tick.text,
            l as f32 - 8.0,
            cy(tick.row),
            ITEM_TICK_SIZE,
            tick.color,
            false,
        );
    }
}

fn draw_annotations(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    tornado: &TornadoLayout,
    sx: &impl Fn(f64) -> f32,
    cy: &impl Fn(usize) -> f32,
) {
    for annotation in &tornado.annotations {
        let color = if annotation.strong {
            theme.difference_label
        } else {
            theme.value_label
        };
        let x = sx(annotation.x);
        let y = cy(annotation.row);
        match annotation.align {
            HAlign::Left => shaper.draw_left(
                canvas, &annotation.text, x, y, ANNOTATION_SIZE, color, annotation.strong,
            ),
            HAlign::Right => shaper.draw_right(
                canvas, &annotation.text, x, y, ANNOTATION_SIZE, color, annotation.strong,
            ),
        }
    }
}

fn draw_headings(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    chart: &TornadoChart,
    l: i32,
    r: i32,
    t: i32,
    b: i32,
) {
    let center = (l + r) as f32 * 0.5;
    shaper.draw_center(canvas, &chart.title, center, t as f32 - 28.0, TITLE_SIZE, theme.title, false);
    shaper.draw_center(canvas, &chart.x_label, center, b as f32 + 40.0, AXIS_LABEL_SIZE, theme.axis_label, false);
    // Item axis heading sits above the label gutter, as wide charts leave no
    // room for a rotated label.
    shaper.draw_right(canvas, &chart.y_label, l as f32 - 12.0, t as f32 - 14.0, AXIS_LABEL_SIZE, theme.axis_label, false);
}

fn draw_legends(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    dataset: &Dataset,
    l: i32,
    r: i32,
    b: i32,
) {
    let center = (l + r) as f32 * 0.5;
    // Two stacked rows below the x axis heading: series first, regions under it.
    legend::draw_row(
        canvas,
        shaper,
        &legend::series_entries(dataset, theme),
        center,
        b as f32 + 74.0,
        LEGEND_SIZE,
        theme.legend_label,
    );
    legend::draw_row(
        canvas,
        shaper,
        &legend::region_entries(theme),
        center,
        b as f32 + 104.0,
        LEGEND_SIZE,
        theme.legend_label,
    );
}
