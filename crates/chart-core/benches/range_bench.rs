use chart_core::{friendly_round, pad_range};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

// Extents chosen to hit each path: zero-based, candidate search, rounding fallback, negative.
const EXTENTS: &[(f64, f64)] = &[(0.0, 10.0), (1003.0, 1100.0), (2050.0, 2150.0), (-20.0, -10.0), (0.013, 0.9)];

fn bench_pad_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("pad_range");
    for &(min, max) in EXTENTS {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{min}..{max}")), &(min, max), |b, &(lo, hi)| {
            b.iter(|| black_box(pad_range(black_box(10), lo, hi, 1.0, 1.0)));
        });
    }
    group.finish();
}

fn bench_friendly_round(c: &mut Criterion) {
    c.bench_function("friendly_round_magnitudes", |b| {
        b.iter(|| {
            for v in [187.0, 12_345.0, 9_876_543.0, -187.0] {
                black_box(friendly_round(black_box(v), 1.0, 0.0, 0.0, 20.0, true));
            }
        });
    });
}

criterion_group!(benches, bench_pad_range, bench_friendly_round);
criterion_main!(benches);
