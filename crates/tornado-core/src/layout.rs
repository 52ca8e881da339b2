// File: crates/tornado-core/src/layout.rs
// Summary: Raster-free derivation of bars, annotations, item ticks, and x extents.

use skia_safe as skia;

use crate::colormap::{BLUES, REDS};
use crate::dataset::Dataset;
use crate::theme::Theme;
use crate::ticks::format_quantity;

/// Fraction of the larger series maximum used as the fixed gap between a
/// volume bar tip and its annotation anchor. Shared by every row.
pub const VALUE_LABEL_MARGIN: f64 = 0.09;
/// Fraction of the largest absolute difference used as the gap between a
/// difference bar tip and its annotation anchor.
pub const DIFFERENCE_LABEL_MARGIN: f64 = 0.03;
/// Relative margin added beyond the outermost bar tips and anchors.
const EXTENT_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Forecast,
    Actual,
    Difference,
}

/// Horizontal anchoring of annotation text: `Left` puts the text start at the
/// anchor x, `Right` puts the text end there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Right,
}

/// One horizontal bar in data space, spanning `from..to` on the value axis.
/// Bars are drawn in vec order, so difference bars land on top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub row: usize,
    pub kind: SeriesKind,
    pub from: f64,
    pub to: f64,
    pub color: skia::Color,
}

/// A numeric annotation placed next to a bar tip.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub row: usize,
    pub x: f64,
    pub text: String,
    pub align: HAlign,
    /// Bold, difference-label styling instead of the plain value styling.
    pub strong: bool,
}

/// Item label of one row, colored by its region.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemTick {
    pub row: usize,
    pub text: String,
    pub color: skia::Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TornadoLayout {
    pub bars: Vec<Bar>,
    pub annotations: Vec<Annotation>,
    pub item_ticks: Vec<ItemTick>,
    pub x_min: f64,
    pub x_max: f64,
}

/// Derive everything the canvas pass draws from a validated dataset.
/// Deterministic: the same dataset always yields the same layout.
pub fn build(data: &Dataset, theme: &Theme) -> TornadoLayout {
    let records = data.records();
    let shades = data.shades();
    let n = records.len();

    // Series-major order mirrors the three bar passes of the chart:
    // forecast right of zero, actual mirrored left, difference on top.
    let mut bars = Vec::with_capacity(n * 3);
    for (row, (record, shade)) in records.iter().zip(&shades).enumerate() {
        bars.push(Bar {
            row,
            kind: SeriesKind::Forecast,
            from: 0.0,
            to: record.forecast_volume,
            color: BLUES.sample(*shade),
        });
    }
    for (row, (record, shade)) in records.iter().zip(&shades).enumerate() {
        bars.push(Bar {
            row,
            kind: SeriesKind::Actual,
            from: 0.0,
            to: -record.actual_volume,
            color: REDS.sample(*shade),
        });
    }
    for (row, record) in records.iter().enumerate() {
        bars.push(Bar {
            row,
            kind: SeriesKind::Difference,
            from: 0.0,
            to: record.difference,
            color: theme.difference_fill,
        });
    }

    let value_margin = VALUE_LABEL_MARGIN * data.max_volume();
    let difference_margin = DIFFERENCE_LABEL_MARGIN * data.max_abs_difference();

    let mut annotations = Vec::with_capacity(n * 3);
    for (row, record) in records.iter().enumerate() {
        annotations.push(Annotation {
            row,
            x: -record.actual_volume - value_margin,
            text: format_quantity(record.actual_volume),
            align: HAlign::Left,
            strong: false,
        });
        annotations.push(Annotation {
            row,
            x: record.forecast_volume + value_margin,
            text: format_quantity(record.forecast_volume),
            align: HAlign::Right,
            strong: false,
        });
        // Absolute value shown; the sign is conveyed by which side of zero
        // the label sits on and by its anchoring.
        let d = record.difference;
        let (x, align) = if d < 0.0 {
            (d - difference_margin, HAlign::Right)
        } else {
            (d + difference_margin, HAlign::Left)
        };
        annotations.push(Annotation {
            row,
            x,
            text: format_quantity(d.abs()),
            align,
            strong: true,
        });
    }

    let item_ticks = records
        .iter()
        .enumerate()
        .map(|(row, record)| ItemTick {
            row,
            text: record.item.clone(),
            color: theme.region_color(&record.region),
        })
        .collect();

    // Extents span zero (bars start there), every bar tip, and every
    // annotation anchor, padded by a small relative margin.
    let mut x_min = 0.0f64;
    let mut x_max = 0.0f64;
    for bar in &bars {
        x_min = x_min.min(bar.to);
        x_max = x_max.max(bar.to);
    }
    for annotation in &annotations {
        x_min = x_min.min(annotation.x);
        x_max = x_max.max(annotation.x);
    }
    let span = (x_max - x_min).max(1e-12);

    TornadoLayout {
        bars,
        annotations,
        item_ticks,
        x_min: x_min - span * EXTENT_MARGIN,
        x_max: x_max + span * EXTENT_MARGIN,
    }
}
