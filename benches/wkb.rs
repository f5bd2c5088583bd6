use criterion::{criterion_group, criterion_main, Criterion};
use simple_features::geometry::{LineString, MultiPolygon, Point, Polygon};
use simple_features::io::wkb::{self, WkbWriterOptions};

/// A multipolygon of `n` squares, each ring with `vertices` points.
fn load_multi_polygon(n: usize, vertices: usize) -> MultiPolygon {
    let polygons = (0..n)
        .map(|i| {
            let offset = i as f64 * 10.;
            let mut points: Vec<Point> = (0..vertices - 1)
                .map(|j| {
                    let angle = j as f64 / (vertices - 1) as f64 * std::f64::consts::TAU;
                    Point::xy(offset + angle.cos(), angle.sin(), 4326)
                })
                .collect();
            points.push(points[0].clone());
            let ring = LineString::xy(points, 4326).unwrap();
            Polygon::xy(vec![ring], 4326).unwrap()
        })
        .collect();
    MultiPolygon::xy(polygons, 4326).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let geom = load_multi_polygon(100, 64);
    let buf = wkb::write(&geom, &WkbWriterOptions::default());

    c.bench_function("write MultiPolygon to WKB", |b| {
        b.iter(|| wkb::write(&geom, &WkbWriterOptions::default()))
    });

    c.bench_function("parse WKB to MultiPolygon", |b| {
        b.iter(|| wkb::read(&buf).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
