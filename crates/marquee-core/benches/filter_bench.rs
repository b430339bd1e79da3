use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marquee_core::catalog::{filter_entries, page_view, CatalogEntry};
use marquee_core::view::FilterState;

fn gen_catalog(n: usize) -> Vec<CatalogEntry> {
    let platforms = ["Netflix", "Prime Video", "Hulu", "Paramount+", "HBO Max", "A24"];
    (0..n)
        .map(|i| {
            CatalogEntry::new(
                format!("Feature {i}"),
                platforms[i % platforms.len()],
                "Jan 2025",
                format!("poster{i}"),
                None,
            )
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filter");
    for &n in &[1_000usize, 10_000usize] {
        let data = gen_catalog(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &data, |b, data| {
            b.iter(|| black_box(filter_entries(data, "Hulu", "feature 12")));
        });
    }
    group.finish();
}

fn bench_page_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_page_view");
    let data = gen_catalog(10_000);
    let state = FilterState { platform: "Hulu".to_string(), search: "feature".to_string(), page: 3 };
    group.bench_with_input(BenchmarkId::from_parameter("n10000"), &data, |b, data| {
        b.iter(|| black_box(page_view(data, &state, 6)));
    });
    group.finish();
}

criterion_group!(benches, bench_filter, bench_page_view);
criterion_main!(benches);
