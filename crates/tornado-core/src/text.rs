// File: crates/tornado-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with anchored draw helpers.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), bold);
        // width of the longest line
        p.longest_line()
    }

    /// Draw with the text start at `x`, vertically centered on `y_center`.
    pub fn draw_left(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y_center: f32,
        size: f32,
        color: skia::Color,
        bold: bool,
    ) {
        let mut p = self.layout(text, size, color, bold);
        let y = y_center - p.height() * 0.5;
        p.paint(canvas, (x, y));
    }

    /// Draw with the text end at `x`, vertically centered on `y_center`.
    pub fn draw_right(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y_center: f32,
        size: f32,
        color: skia::Color,
        bold: bool,
    ) {
        let mut p = self.layout(text, size, color, bold);
        let origin = (x - p.longest_line(), y_center - p.height() * 0.5);
        p.paint(canvas, origin);
    }

    /// Draw with the text midpoint at `x`, vertically centered on `y_center`.
    pub fn draw_center(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y_center: f32,
        size: f32,
        color: skia::Color,
        bold: bool,
    ) {
        let mut p = self.layout(text, size, color, bold);
        let origin = (x - p.longest_line() * 0.5, y_center - p.height() * 0.5);
        p.paint(canvas, origin);
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
