// File: crates/tornado-core/src/legend.rs
// Summary: Legend rows for the three series and the fixed region palette.

use skia_safe as skia;

use crate::colormap::{BLUES, REDS};
use crate::dataset::Dataset;
use crate::text::TextShaper;
use crate::theme::Theme;

const SWATCH_WIDTH: f32 = 18.0;
const SWATCH_HEIGHT: f32 = 10.0;
const DOT_RADIUS: f32 = 4.5;
const MARKER_GAP: f32 = 6.0;
const ENTRY_GAP: f32 = 18.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    /// Filled rectangle, as for bar series.
    Swatch,
    /// Filled circle, as for the region key.
    Dot,
}

#[derive(Clone, Debug)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: skia::Color,
    pub marker: Marker,
}

/// Entries for the series legend, ordered Actual / Forecast / Difference.
/// Swatch colors mirror the first drawn bar of each series (row 0, the
/// lowest-accuracy row).
pub fn series_entries(data: &Dataset, theme: &Theme) -> Vec<LegendEntry> {
    let shade0 = data.shades()[0];
    vec![
        LegendEntry { label: "Actual", color: REDS.sample(shade0), marker: Marker::Swatch },
        LegendEntry { label: "Forecast", color: BLUES.sample(shade0), marker: Marker::Swatch },
        LegendEntry { label: "Difference", color: theme.difference_fill, marker: Marker::Swatch },
    ]
}

/// Entries for the region legend: always the four fixed regions, independent
/// of which regions occur in the data.
pub fn region_entries(theme: &Theme) -> Vec<LegendEntry> {
    theme
        .region_palette
        .iter()
        .map(|&(name, color)| LegendEntry { label: name, color, marker: Marker::Dot })
        .collect()
}

/// Draw one horizontal legend row centered on `center_x` at `y_center`.
pub fn draw_row(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    entries: &[LegendEntry],
    center_x: f32,
    y_center: f32,
    font_size: f32,
    text_color: skia::Color,
) {
    if entries.is_empty() {
        return;
    }

    let marker_width = |m: Marker| -> f32 {
        match m {
            Marker::Swatch => SWATCH_WIDTH,
            Marker::Dot => DOT_RADIUS * 2.0,
        }
    };

    let mut total = ENTRY_GAP * (entries.len() as f32 - 1.0);
    for entry in entries {
        total += marker_width(entry.marker) + MARKER_GAP
            + shaper.measure_width(entry.label, font_size, false);
    }

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);

    let mut x = center_x - total * 0.5;
    for entry in entries {
        paint.set_color(entry.color);
        let mw = marker_width(entry.marker);
        match entry.marker {
            Marker::Swatch => {
                let rect = skia::Rect::from_xywh(
                    x,
                    y_center - SWATCH_HEIGHT * 0.5,
                    SWATCH_WIDTH,
                    SWATCH_HEIGHT,
                );
                canvas.draw_rect(rect, &paint);
            }
            Marker::Dot => {
                canvas.draw_circle((x + DOT_RADIUS, y_center), DOT_RADIUS, &paint);
            }
        }
        x += mw + MARKER_GAP;
        shaper.draw_left(canvas, entry.label, x, y_center, font_size, text_color, false);
        x += shaper.measure_width(entry.label, font_size, false) + ENTRY_GAP;
    }
}
