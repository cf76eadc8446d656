use approx::assert_relative_eq;
use gauge_rs::api::{GaugeConfig, GaugeEngine, GaugeStyle};
use gauge_rs::core::{LayoutMetrics, Padding, ValueOverflowPolicy, Viewport, point_by_angle};
use gauge_rs::render::{
    Color, ColorStop, ESTIMATED_INK_HEIGHT_EM, NullRenderer, RenderFrame, TextHAlign,
    TextPrimitive,
};

fn rendered_frame(config: GaugeConfig) -> (RenderFrame, LayoutMetrics) {
    let mut engine = GaugeEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.render().expect("render");
    let metrics = engine.layout_metrics().expect("metrics");
    let frame = engine.into_renderer().last_frame.expect("frame");
    (frame, metrics)
}

#[test]
fn frame_contains_arc_labels_hub_and_needle() {
    let config = GaugeConfig::default()
        .with_current_value(42)
        .with_viewport(Viewport::new(500, 450));
    let (frame, metrics) = rendered_frame(config);

    assert_eq!(frame.arcs.len(), 1);
    assert_eq!(frame.texts.len(), 3);
    assert_eq!(frame.circles.len(), 1);
    assert_eq!(frame.polygons.len(), 1);

    let arc = &frame.arcs[0];
    assert_eq!(arc.start_angle, -210.0);
    assert_eq!(arc.sweep_angle, 240.0);
    assert_relative_eq!(arc.radius, metrics.scale_radius, epsilon = 1e-12);
    assert_relative_eq!(arc.stroke_width, metrics.stroke_width, epsilon = 1e-12);

    let texts: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, ["42 km/h", "0 km/h", "300 km/h"]);
}

#[test]
fn needle_points_at_value_angle() {
    let config = GaugeConfig::default()
        .with_current_value(60)
        .with_viewport(Viewport::new(500, 600));
    let mut engine = GaugeEngine::new(NullRenderer::default(), config).expect("engine init");
    assert_relative_eq!(engine.needle_angle(), -162.0, epsilon = 1e-9);

    engine.render().expect("render");
    let metrics = engine.layout_metrics().expect("metrics");
    let frame = engine.renderer().last_frame.as_ref().expect("frame");
    let needle = &frame.polygons[0];
    assert_eq!(needle.points.len(), 3);

    let apex = needle.points[2];
    let radians = (-162.0f64).to_radians();
    assert_relative_eq!(
        apex.x,
        metrics.center_x + metrics.needle_radius * radians.cos(),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        apex.y,
        metrics.center_y + metrics.needle_radius * radians.sin(),
        epsilon = 1e-9
    );

    for base in &needle.points[..2] {
        let distance = (base.x - metrics.center_x).hypot(base.y - metrics.center_y);
        assert_relative_eq!(distance, metrics.needle_base_half_width, epsilon = 1e-9);
    }

    let hub = frame.circles[0];
    assert_relative_eq!(hub.radius, metrics.needle_hub_radius, epsilon = 1e-12);
    assert_eq!(hub.color, Color::RED);
}

#[test]
fn needle_extremes_cover_the_scale() {
    let mut engine = GaugeEngine::new(
        NullRenderer::default(),
        GaugeConfig::default().with_viewport(Viewport::new(400, 360)),
    )
    .expect("engine init");

    for (value, angle) in [(0, -210.0), (150, -90.0), (300, 30.0)] {
        engine.set_current_value(value);
        assert_relative_eq!(engine.needle_angle(), angle, epsilon = 1e-9);
    }

    engine.set_current_value(360);
    assert_relative_eq!(engine.needle_angle(), 78.0, epsilon = 1e-9);
    engine.set_value_policy(ValueOverflowPolicy::Clamp);
    assert_relative_eq!(engine.needle_angle(), 30.0, epsilon = 1e-9);
}

#[test]
fn labels_are_placed_around_the_arc_ends() {
    let config = GaugeConfig::default()
        .with_padding(Padding::uniform(10.0))
        .with_viewport(Viewport::new(520, 600));
    let (frame, metrics) = rendered_frame(config);
    let start = point_by_angle(metrics.scale_radius, -210.0);
    let end = point_by_angle(metrics.scale_radius, 30.0);
    let label_height = metrics.scale_font_size * ESTIMATED_INK_HEIGHT_EM;

    let value = &frame.texts[0];
    assert_eq!(value.h_align, TextHAlign::Center);
    assert_relative_eq!(value.x, metrics.center_x, epsilon = 1e-12);
    assert_relative_eq!(value.y, metrics.center_y + start.y, epsilon = 1e-9);
    assert_relative_eq!(value.font_size_px, metrics.value_font_size, epsilon = 1e-12);

    let zero = &frame.texts[1];
    assert_eq!(zero.h_align, TextHAlign::Left);
    assert_relative_eq!(zero.x, metrics.scale_rect.left(), epsilon = 1e-12);
    assert_relative_eq!(
        zero.y,
        metrics.center_y + start.y + metrics.stroke_width / 2.0 + label_height,
        epsilon = 1e-9
    );

    let max = &frame.texts[2];
    assert_eq!(max.h_align, TextHAlign::Right);
    assert_relative_eq!(max.x, metrics.scale_rect.right(), epsilon = 1e-12);
    assert_relative_eq!(
        max.y,
        metrics.center_y + end.y + metrics.stroke_width / 2.0 + label_height,
        epsilon = 1e-9
    );
}

#[test]
fn empty_unit_label_renders_bare_numbers() {
    let config = GaugeConfig::default()
        .with_unit_label("")
        .with_max_value(8000)
        .with_current_value(3500)
        .with_viewport(Viewport::new(300, 270));
    let (frame, _) = rendered_frame(config);

    let texts: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, ["3500", "0", "8000"]);
}

#[test]
fn default_ramp_reads_low_medium_high_along_the_arc() {
    let (frame, _) = rendered_frame(GaugeConfig::default().with_viewport(Viewport::new(400, 360)));
    let gradient = &frame.arcs[0].gradient;

    assert_eq!(gradient.color_at_angle(-180.0), Color::RED);
    assert_eq!(gradient.color_at_angle(-90.0), Color::YELLOW);
    assert_eq!(gradient.color_at_angle(0.0), Color::GREEN);
}

#[test]
fn styles_are_per_engine() {
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let custom = GaugeStyle {
        needle_color: blue,
        custom_color_stops: Some(vec![
            ColorStop::new(0.0, blue),
            ColorStop::new(1.0, Color::WHITE),
        ]),
        ..GaugeStyle::default()
    };

    let (styled, _) = rendered_frame(
        GaugeConfig::default()
            .with_style(custom)
            .with_viewport(Viewport::new(400, 360)),
    );
    let (plain, _) = rendered_frame(GaugeConfig::default().with_viewport(Viewport::new(400, 360)));

    assert_eq!(styled.polygons[0].color, blue);
    assert_eq!(styled.arcs[0].gradient.stops().len(), 2);
    assert_eq!(plain.polygons[0].color, Color::RED);
    assert_eq!(plain.arcs[0].gradient.stops().len(), 5);
}

#[test]
fn frame_validation_rejects_non_finite_geometry() {
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_text(TextPrimitive::new(
        "12 km/h",
        f64::NAN,
        10.0,
        12.0,
        Color::BLACK,
        TextHAlign::Center,
    ));
    assert!(frame.validate().is_err());

    let empty = RenderFrame::new(Viewport::new(0, 100));
    assert!(empty.validate().is_err());
    assert!(empty.is_empty());
}
