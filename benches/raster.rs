//! Benchmarks for the rasterizers and the scene pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rasterlab::surface::{Canvas, PixelSet};
use rasterlab::types::{Colour, Point, Polygon, RoundingMode};
use rasterlab::{
    circle_spans, rasterize_circle, rasterize_line, rotate, scanline_spans, MiniScene,
    SceneDocument, SceneRenderer,
};

// -- Rasterizer benchmarks --

fn bench_rasterizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterizers");

    group.bench_function("line_shallow_1000", |b| {
        b.iter(|| rasterize_line(black_box(0.0), 0.0, black_box(1000.0), 370.0).count())
    });

    group.bench_function("line_steep_1000", |b| {
        b.iter(|| rasterize_line(black_box(0.0), 0.0, black_box(-250.0), 1000.0).count())
    });

    group.bench_function("circle_outline_r200", |b| {
        b.iter(|| rasterize_circle(black_box(400), 300, black_box(200)).count())
    });

    group.bench_function("circle_fill_r200", |b| {
        b.iter(|| circle_spans(black_box(400), 300, black_box(200)).len())
    });

    group.finish();
}

// -- Polygon fill benchmarks --

fn bench_polygon_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_fill");

    let square = Polygon::regular(4, 400.0, Point::new(400.0, 300.0));
    let many_sided = Polygon::regular(64, 20.0, Point::new(400.0, 300.0));
    let star: Vec<Point> = (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { 250.0 } else { 100.0 };
            rotate(&[Point::new(400.0 + r, 300.0)], 36.0 * i as f64, 400.0, 300.0)[0]
        })
        .collect();

    group.bench_function("square_400", |b| {
        b.iter(|| scanline_spans(black_box(square.vertices()), RoundingMode::default()).len())
    });

    group.bench_function("regular_64_sides", |b| {
        b.iter(|| scanline_spans(black_box(many_sided.vertices()), RoundingMode::default()).len())
    });

    group.bench_function("star_10_vertices", |b| {
        b.iter(|| scanline_spans(black_box(&star), RoundingMode::HalfToEven).len())
    });

    group.finish();
}

// -- Scene benchmarks --

fn bench_scenes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenes");

    let doc = SceneDocument::parse(
        r#"
name: bench
canvas: { width: 320, height: 240 }
shapes:
  - kind: polygon
    points: [[20, 20], [300, 40], [260, 220], [40, 200]]
    colour: steelblue
    fill: true
  - kind: circle
    center: [160, 120]
    radius: 60
    colour: yellow
    outline: orange
    fill: true
  - kind: regular_polygon
    sides: 7
    side_length: 40
    center: [160, 120]
    colour: darkred
    fill: true
    transforms:
      - op: rotate
        degrees: 15
        pivot: [160, 120]
"#,
    )
    .unwrap();
    let renderer = SceneRenderer::new();

    group.bench_function("render_document_320x240", |b| {
        b.iter(|| renderer.render_canvas(black_box(&doc)))
    });

    group.bench_function("render_document_pixel_set", |b| {
        b.iter(|| {
            let mut pixels = PixelSet::new();
            renderer.render(black_box(&doc), &mut pixels);
            pixels.len()
        })
    });

    let mut scene = MiniScene::default();
    let mut canvas = Canvas::new(800, 600, Colour::rgb(173, 216, 230));

    group.bench_function("mini_scene_frame", |b| {
        b.iter(|| {
            scene.draw_frame(&mut canvas).unwrap();
            scene.advance();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_rasterizers, bench_polygon_fill, bench_scenes);
criterion_main!(benches);
