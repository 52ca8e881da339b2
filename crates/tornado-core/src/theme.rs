// File: crates/tornado-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors, including the region palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub title: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    /// Volume annotations next to the forecast/actual bar tips.
    pub value_label: skia::Color,
    /// Bold annotation on the difference bars.
    pub difference_label: skia::Color,
    /// Sea-green fill of the difference bars, partial opacity baked in.
    pub difference_fill: skia::Color,
    pub legend_label: skia::Color,
    /// Fixed region name -> item label color lookup.
    pub region_palette: [(&'static str, skia::Color); 4],
    /// Item label color for regions outside the lookup. Silent default,
    /// not an error.
    pub region_fallback: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 20, 20, 26),
            axis_label: skia::Color::from_argb(255, 40, 40, 48),
            tick_label: skia::Color::from_argb(255, 70, 70, 80),
            value_label: skia::Color::from_argb(255, 0, 0, 0),
            difference_label: skia::Color::from_argb(255, 255, 255, 255),
            difference_fill: skia::Color::from_argb(204, 46, 139, 87),
            legend_label: skia::Color::from_argb(255, 30, 30, 38),
            region_palette: region_palette(),
            region_fallback: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            title: skia::Color::from_argb(255, 235, 235, 245),
            axis_label: skia::Color::from_argb(255, 210, 210, 220),
            tick_label: skia::Color::from_argb(255, 170, 170, 180),
            value_label: skia::Color::from_argb(255, 225, 225, 232),
            difference_label: skia::Color::from_argb(255, 255, 255, 255),
            difference_fill: skia::Color::from_argb(204, 46, 139, 87),
            legend_label: skia::Color::from_argb(255, 210, 210, 220),
            region_palette: region_palette(),
            region_fallback: skia::Color::from_argb(255, 200, 200, 208),
        }
    }

    /// Resolve an item label color from the region attribute. Unknown
    /// regions take the fallback color.
    pub fn region_color(&self, region: &str) -> skia::Color {
        for (name, color) in &self.region_palette {
            if *name == region {
                return *color;
            }
        }
        self.region_fallback
    }
}

/// The four fixed regions and their label colors, shared by all themes.
fn region_palette() -> [(&'static str, skia::Color); 4] {
    [
        ("North", skia::Color::from_argb(255, 0x1f, 0x77, 0xb4)),
        ("South", skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c)),
        ("East", skia::Color::from_argb(255, 0xff, 0x7f, 0x0e)),
        ("West", skia::Color::from_argb(255, 0xd6, 0x27, 0x28)),
    ]
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
