use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tornado_core::{Dataset, RenderOptions, SalesRecord, TornadoChart};

fn build_chart(n: usize) -> TornadoChart {
    let mut records = Vec::with_capacity(n);
    for i in 0..n {
        let forecast = 500.0 + (i as f64 * 0.37).sin().abs() * 1500.0;
        let actual = 500.0 + (i as f64 * 0.53).cos().abs() * 1500.0;
        records.push(SalesRecord {
            item: format!("Item {i}"),
            forecast_volume: forecast,
            actual_volume: actual,
            accuracy: 0.5 + (i as f64 * 0.11).sin() * 0.4,
            difference: forecast - actual,
            region: ["North", "South", "East", "West"][i % 4].to_string(),
        });
    }
    TornadoChart::new(Dataset::from_records(records).expect("valid dataset"))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10usize, 50usize, 200usize] {
        group.bench_function(format!("rows_{n}"), |b| {
            let chart = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
