use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sketchkit_designer::{hit_test, Geometry, Point, Scene, Shape, ShapeKind};

fn populated_scene(count: usize) -> Scene {
    let mut scene = Scene::new();
    for i in 0..count {
        let x = (i % 50) as f64 * 20.0;
        let y = (i / 50) as f64 * 20.0;
        let (kind, points) = match i % 4 {
            0 => (ShapeKind::Rectangle, vec![Point::new(x, y), Point::new(x + 10.0, y + 8.0)]),
            1 => (ShapeKind::Circle, vec![Point::new(x + 5.0, y + 5.0), Point::new(x + 9.0, y + 5.0)]),
            2 => (ShapeKind::Line, vec![Point::new(x, y), Point::new(x + 15.0, y + 15.0)]),
            _ => (
                ShapeKind::Polygon,
                vec![Point::new(x, y), Point::new(x + 10.0, y), Point::new(x + 5.0, y + 9.0)],
            ),
        };
        if let Some(geometry) = Geometry::from_points(kind, points) {
            scene.add_shape("#000000", geometry);
        }
    }
    scene
}

fn freehand_trace(len: usize) -> Shape {
    let points = (0..len)
        .map(|i| Point::new(i as f64, (i as f64 / 10.0).sin() * 50.0))
        .collect();
    let geometry = Geometry::from_points(ShapeKind::Freehand, points).expect("trace has points");
    Shape::new("#000000", geometry)
}

pub fn criterion_benchmark(crit: &mut Criterion) {
    let scene = populated_scene(1000);
    crit.bench_function("object_at miss 1000", |bench| {
        bench.iter(|| scene.object_at(black_box(Point::new(-100.0, -100.0))))
    });
    crit.bench_function("object_at first shape 1000", |bench| {
        bench.iter(|| scene.object_at(black_box(Point::new(2.0, 2.0))))
    });

    let trace = freehand_trace(2000);
    crit.bench_function("freehand 2000 points", |bench| {
        bench.iter(|| hit_test(black_box(Point::new(1999.0, 500.0)), black_box(&trace)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
