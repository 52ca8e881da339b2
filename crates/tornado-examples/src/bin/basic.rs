// File: crates/tornado-examples/src/bin/basic.rs
// Summary: Minimal example that renders a tornado chart from inline records to PNG.

use anyhow::Result;
use tornado_core::{Dataset, RenderOptions, SalesRecord, TornadoChart};

fn main() -> Result<()> {
    // Build a small forecast-vs-actual table
    let rows = [
        ("Laptops", 320.0, 290.0, 0.91, "North"),
        ("Monitors", 210.0, 260.0, 0.72, "South"),
        ("Keyboards", 450.0, 430.0, 0.88, "East"),
        ("Headsets", 150.0, 190.0, 0.64, "West"),
        ("Docking Stations", 120.0, 90.0, 0.79, "Online"),
    ];
    let records: Vec<SalesRecord> = rows
        .iter()
        .map(|&(item, forecast, actual, accuracy, region)| SalesRecord {
            item: item.to_string(),
            forecast_volume: forecast,
            actual_volume: actual,
            accuracy,
            difference: forecast - actual,
            region: region.to_string(),
        })
        .collect();

    let chart = TornadoChart::new(Dataset::from_records(records)?);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/example_basic.png");
    chart.render_to_png(&opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
