use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use tornado_core::layout;
use tornado_core::{Dataset, SalesRecord, Theme};

fn gen_records(n: usize) -> Vec<SalesRecord> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        let forecast = 500.0 + (i as f64 * 0.37).sin().abs() * 1500.0;
        let actual = 500.0 + (i as f64 * 0.53).cos().abs() * 1500.0;
        v.push(SalesRecord {
            item: format!("Item {i}"),
            forecast_volume: forecast,
            actual_volume: actual,
            accuracy: 0.5 + (i as f64 * 0.11).sin() * 0.4,
            difference: forecast - actual,
            region: ["North", "South", "East", "West", "Central"][i % 5].to_string(),
        });
    }
    v
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_build");
    for &n in &[100usize, 1_000usize, 10_000usize] {
        let records = gen_records(n);
        let theme = Theme::light();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter_batched(
                || records.clone(),
                |rows| {
                    let data = Dataset::from_records(rows).expect("valid dataset");
                    let _ = black_box(layout::build(&data, &theme));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
