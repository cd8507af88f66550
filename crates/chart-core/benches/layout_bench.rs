use std::rc::Rc;

use chart_core::{run_layout, ApproxTextMeasurer, LegendOption, OutputFormat, RenderOptions, Series, TitleOption};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_options(series: usize, points: usize) -> RenderOptions {
    let mut opts = RenderOptions::default();
    for s in 0..series {
        let values = (0..points).map(|i| ((i + s * 7) as f64 * 0.01).sin() * 10.0 + s as f64).collect();
        opts.add_series(Series::named(format!("series {s}"), values));
    }
    opts.title = TitleOption::new("Throughput").with_subtext("per region");
    opts.legend = LegendOption::default().with_offset("left", "top");
    opts
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_layout");
    for &(series, points) in &[(2usize, 100usize), (8, 1_000)] {
        let opts = build_options(series, points);
        group.bench_function(format!("s{series}_p{points}"), |b| {
            b.iter(|| {
                let (canvas, rec) = opts.recording_canvas(Rc::new(ApproxTextMeasurer), OutputFormat::Png);
                let result = run_layout(&canvas, &opts).expect("layout");
                black_box((result.plot.bounds(), rec.borrow().len()));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
