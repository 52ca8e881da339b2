// File: crates/tornado-core/src/lib.rs
// Summary: Core library entry point; exports public API for tornado chart construction and rendering.

pub mod chart;
pub mod colormap;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod legend;
pub mod record;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use chart::{RenderOptions, TornadoChart};
pub use colormap::{ColorRamp, BLUES, REDS};
pub use dataset::Dataset;
pub use error::DataError;
pub use layout::{HAlign, SeriesKind, TornadoLayout};
pub use record::SalesRecord;
pub use text::TextShaper;
pub use theme::Theme;
