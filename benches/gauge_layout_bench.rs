use criterion::{Criterion, criterion_group, criterion_main};
use gauge_rs::api::{GaugeConfig, GaugeEngine};
use gauge_rs::core::{LayoutMetrics, Padding, Rect, Viewport, point_by_angle};
use gauge_rs::render::NullRenderer;
use std::hint::black_box;

fn bench_layout_compute(c: &mut Criterion) {
    let content = Rect::new(12.0, 12.0, 1_896.0, 1_056.0);

    c.bench_function("layout_compute", |b| {
        b.iter(|| LayoutMetrics::compute(black_box(content)).expect("layout"))
    });
}

fn bench_point_by_angle_sweep(c: &mut Criterion) {
    c.bench_function("point_by_angle_sweep_240", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for step in 0..=240 {
                let point = point_by_angle(black_box(300.0), -210.0 + f64::from(step));
                acc += point.x + point.y;
            }
            acc
        })
    });
}

fn bench_frame_build(c: &mut Criterion) {
    let config = GaugeConfig::default()
        .with_padding(Padding::uniform(12.0))
        .with_viewport(Viewport::new(1920, 1080));
    let mut engine = GaugeEngine::new(NullRenderer::default(), config).expect("engine init");

    c.bench_function("frame_build_and_render", |b| {
        let mut value = 0;
        b.iter(|| {
            value = (value + 7) % 300;
            engine.set_current_value(black_box(value));
            engine.render().expect("render")
        })
    });
}

criterion_group!(
    benches,
    bench_layout_compute,
    bench_point_by_angle_sweep,
    bench_frame_build
);
criterion_main!(benches);
