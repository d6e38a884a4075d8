use criterion::{black_box, criterion_group, criterion_main, Criterion};
use incremental_delaunay::{berg, bowyer_watson, Point, TriangulationConfig};

/// A jittered grid rather than an exact one: an exact axis-aligned grid puts
/// many points on the same circumcircle, which is a pathological case for
/// Delaunay construction and not representative of the kind of input either
/// engine is optimised for.
fn jittered_grid(n_per_side: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(n_per_side * n_per_side);
    for i in 0..n_per_side {
        for j in 0..n_per_side {
            let jitter = ((i * 31 + j * 17) % 11) as f64 * 0.013;
            points.push(Point::new(i as f64 + jitter, j as f64 - jitter));
        }
    }
    points
}

fn bench_bowyer_watson(c: &mut Criterion) {
    let points = jittered_grid(20);
    let config = TriangulationConfig::default();
    c.bench_function("bowyer_watson_400_points", |b| {
        b.iter(|| {
            bowyer_watson::triangulate_bowyer_watson(black_box(&points), black_box(&config)).unwrap()
        })
    });
}

fn bench_de_berg(c: &mut Criterion) {
    let points = jittered_grid(20);
    let config = TriangulationConfig {
        seed: Some(42),
        ..TriangulationConfig::default()
    };
    c.bench_function("de_berg_400_points", |b| {
        b.iter(|| berg::triangulate_berg(black_box(&points), black_box(&config)).unwrap())
    });
}

criterion_group!(benches, bench_bowyer_watson, bench_de_berg);
criterion_main!(benches);
