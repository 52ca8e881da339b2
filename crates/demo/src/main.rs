// File: crates/demo/src/main.rs
// Summary: Demo loads a 6-column sales CSV, deduplicates rows, and renders the tornado chart to a PNG.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tornado_core::{theme, Dataset, RenderOptions, SalesRecord, TornadoChart};

fn main() -> Result<()> {
    let (raw, theme_name) = parse_args();
    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let records = load_sales_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} unique rows", records.len());

    let dataset = Dataset::from_records(records)?;
    let chart = TornadoChart::new(dataset);

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&theme_name);

    let out = out_name(&path);
    chart.render_to_png(&opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Accept an optional CSV path plus `--theme <name>`, defaulting to the
/// bundled sample file.
fn parse_args() -> (String, String) {
    let mut path = None;
    let mut theme_name = "light".to_string();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--theme" {
            if let Some(name) = args.next() {
                theme_name = name;
            }
        } else {
            path = Some(arg);
        }
    }
    (
        path.unwrap_or_else(|| "data/sales_forecast_vs_actual.csv".to_string()),
        theme_name,
    )
}

/// Resolve the path as given, falling back to the crate directory so the
/// bundled sample works from any working directory.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join(raw);
    if bundled.exists() {
        return Ok(bundled);
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/tornado_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("tornado_{stem}.png"))
}

/// Load the fixed-order 6-column CSV (Item, Forecast_Volume, Actual_Volume,
/// Accuracy, Difference, Region). Column order is the contract; header names
/// are not inspected. Duplicate rows are dropped before parsing, matching the
/// deduplicated table the hosting environment hands over.
fn load_sales_csv(path: &Path) -> Result<Vec<SalesRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut out = Vec::new();
    let mut dropped = 0usize;

    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        anyhow::ensure!(
            rec.len() >= 6,
            "row {}: expected 6 columns, found {}",
            line + 2,
            rec.len()
        );

        let fields: Vec<String> = rec.iter().take(6).map(|s| s.trim().to_string()).collect();
        if !seen.insert(fields.clone()) {
            dropped += 1;
            continue;
        }

        let number = |ix: usize, name: &str| -> Result<f64> {
            fields[ix].parse::<f64>().with_context(|| {
                format!("row {}: column '{}' is not numeric: '{}'", line + 2, name, fields[ix])
            })
        };
        out.push(SalesRecord::try_new(
            fields[0].clone(),
            number(1, "Forecast_Volume")?,
            number(2, "Actual_Volume")?,
            number(3, "Accuracy")?,
            number(4, "Difference")?,
            fields[5].clone(),
        )?);
    }

    if dropped > 0 {
        println!("Dropped {dropped} duplicate rows");
    }
    Ok(out)
}
