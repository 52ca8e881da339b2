// File: crates/tornado-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use tornado_core::{Dataset, RenderOptions, SalesRecord, TornadoChart};

fn two_row_dataset() -> Dataset {
    let records = vec![
        SalesRecord {
            item: "Widget".to_string(),
            forecast_volume: 100.0,
            actual_volume: 140.0,
            accuracy: 0.6,
            difference: -40.0,
            region: "North".to_string(),
        },
        SalesRecord {
            item: "Gadget".to_string(),
            forecast_volume: 120.0,
            actual_volume: 90.0,
            accuracy: 0.9,
            difference: 30.0,
            region: "South".to_string(),
        },
    ];
    Dataset::from_records(records).expect("valid dataset")
}

#[test]
fn render_rgba8_buffer() {
    let chart = TornadoChart::new(two_row_dataset());

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);

    // The bars must have touched at least some pixels: count pixels that
    // differ from the top-left background sample.
    let bg = [px[0], px[1], px[2], px[3]];
    let non_background = px.chunks_exact(4).filter(|p| *p != bg).count();
    assert!(non_background > 0, "expected bar pixels over the background");
}
