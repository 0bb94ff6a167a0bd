use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geo::{Point, Rect, coord};
use geobucket::{BucketStats, Bucketer, build_path};

fn benchmark_build_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_path");

    let cases = [
        ("drill_down", "u4pruydqqvj8", "u4pruydqqvj3"),
        ("quadrant", "u4pruydqqvj8", "v4pruydqqvj3"),
        ("all", "74pruydqqvj8", "s4pruydqqvj3"),
        ("global", "04pruydqqvj8", "z4pruydqqvj3"),
    ];

    for (name, bottom_left, top_right) in cases {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(bottom_left, top_right),
            |b, (bottom_left, top_right)| {
                b.iter(|| build_path(black_box(bottom_left), black_box(top_right)))
            },
        );
    }

    group.finish();
}

fn benchmark_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    for precision in [1, 5, 12] {
        let bucketer = Bucketer::new(precision).unwrap();

        group.bench_with_input(
            BenchmarkId::new("point", precision),
            &bucketer,
            |b, bucketer| {
                let point = Point::new(-5.6, 42.6);
                b.iter(|| bucketer.bucket_for_point(black_box(&point)).unwrap())
            },
        );

        group.bench_with_input(
            BenchmarkId::new("rect", precision),
            &bucketer,
            |b, bucketer| {
                let rect = Rect::new(coord! { x: -5.60, y: 42.60 }, coord! { x: -5.59, y: 42.61 });
                b.iter(|| bucketer.bucket_for_rect(black_box(&rect)).unwrap())
            },
        );
    }

    group.finish();
}

fn benchmark_stats(c: &mut Criterion) {
    let bucketer = Bucketer::new(4).unwrap();
    let buckets: Vec<String> = (0..10_000)
        .map(|i| {
            let point = Point::new(-170.0 + (i % 340) as f64, -80.0 + (i % 160) as f64);
            bucketer.bucket_for_point(&point).unwrap()
        })
        .collect();

    c.bench_function("stats_record_10k", |b| {
        b.iter(|| {
            let mut stats = BucketStats::new();
            for bucket in &buckets {
                stats.record(black_box(bucket));
            }
            stats.summary()
        })
    });
}

criterion_group!(
    benches,
    benchmark_build_path,
    benchmark_geometry,
    benchmark_stats
);
criterion_main!(benches);
