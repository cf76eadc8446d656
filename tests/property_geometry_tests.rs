use std::f64::consts::TAU;

use gauge_rs::core::{
    LayoutMetrics, Rect, expected_height_from_width, expected_width_from_height, point_by_angle,
};
use proptest::prelude::*;

fn angular_distance(left: f64, right: f64) -> f64 {
    let diff = (left - right).rem_euclid(TAU);
    diff.min(TAU - diff)
}

proptest! {
    #[test]
    fn point_by_angle_preserves_radius_and_direction(
        radius in 0.01f64..10_000.0,
        angle in -720.0f64..720.0
    ) {
        let point = point_by_angle(radius, angle);

        prop_assert!((point.x.hypot(point.y) - radius).abs() <= radius * 1e-12);
        prop_assert!(angular_distance(point.y.atan2(point.x), angle.to_radians()) <= 1e-9);
    }

    #[test]
    fn layout_metrics_are_positive_and_centered_inside(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        width in 1.0f64..5_000.0,
        height in 1.0f64..5_000.0
    ) {
        let content = Rect::new(x, y, width, height);
        let metrics = LayoutMetrics::compute(content).expect("layout");

        prop_assert!(metrics.scale_radius > 0.0);
        prop_assert!(metrics.stroke_width > 0.0);
        prop_assert!(metrics.needle_radius > 0.0);
        prop_assert!(content.contains(metrics.center_x, metrics.center_y));
        prop_assert_eq!(metrics, LayoutMetrics::compute(content).expect("layout again"));
    }

    #[test]
    fn rendered_height_never_exceeds_height_bound_area(
        width in 1.0f64..5_000.0,
        height_factor in 0.01f64..0.999
    ) {
        let height = width * height_factor;
        let metrics = LayoutMetrics::compute(Rect::new(0.0, 0.0, width, height)).expect("layout");

        prop_assert!(expected_height_from_width(metrics.size) <= height * (1.0 + 1e-12));
    }

    #[test]
    fn width_height_inverse_round_trip(width in 1.0f64..100_000.0) {
        let recovered = expected_width_from_height(expected_height_from_width(width));
        prop_assert!((recovered - width).abs() <= width * 1e-12);
    }
}
