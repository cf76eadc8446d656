use serde::{Deserialize, Serialize};

use crate::core::geometry::point_by_angle;
use crate::core::scale::SCALE_START_ANGLE;
use crate::core::types::Rect;
use crate::error::{GaugeError, GaugeResult};

pub const STROKE_WIDTH_MULTIPLIER: f64 = 0.1;
pub const NEEDLE_RADIUS_MULTIPLIER: f64 = 0.98;
pub const NEEDLE_HUB_RADIUS_MULTIPLIER: f64 = 0.1;
pub const SCALE_FONT_SIZE_MULTIPLIER: f64 = 0.1;
pub const VALUE_FONT_SIZE_MULTIPLIER: f64 = 0.3;

/// Pixel metrics of one gauge layout pass.
///
/// Every field is a deterministic function of the content rectangle, so two
/// passes over the same rectangle produce bit-identical metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Working diameter of the gauge, stroke included.
    pub size: f64,
    pub stroke_width: f64,
    pub scale_radius: f64,
    /// Bounding square of the arc's stroke centerline.
    pub scale_rect: Rect,
    pub center_x: f64,
    pub center_y: f64,
    pub needle_radius: f64,
    pub needle_hub_radius: f64,
    pub needle_base_half_width: f64,
    pub scale_font_size: f64,
    pub value_font_size: f64,
}

impl LayoutMetrics {
    /// Lays the gauge out inside `content` (the viewport minus padding).
    pub fn compute(content: Rect) -> GaugeResult<Self> {
        if !content.has_area() || !content.x.is_finite() || !content.y.is_finite() {
            return Err(GaugeError::DegenerateLayout {
                width: content.width,
                height: content.height,
            });
        }

        let size = working_size(content.width, content.height);
        let stroke_width = size * STROKE_WIDTH_MULTIPLIER;
        let scale_radius = (size - stroke_width) / 2.0;
        let scale_rect = Rect::new(
            content.x + stroke_width / 2.0,
            content.y + stroke_width / 2.0,
            scale_radius * 2.0,
            scale_radius * 2.0,
        );
        let needle_radius = (scale_radius - stroke_width / 2.0) * NEEDLE_RADIUS_MULTIPLIER;
        let needle_hub_radius = scale_radius * NEEDLE_HUB_RADIUS_MULTIPLIER;

        Ok(Self {
            size,
            stroke_width,
            scale_radius,
            scale_rect,
            center_x: scale_rect.x + scale_radius,
            center_y: scale_rect.y + scale_radius,
            needle_radius,
            needle_hub_radius,
            needle_base_half_width: needle_hub_radius / 2.0,
            scale_font_size: size * SCALE_FONT_SIZE_MULTIPLIER,
            value_font_size: needle_radius * VALUE_FONT_SIZE_MULTIPLIER,
        })
    }
}

/// Gauge diameter that fits a `width` x `height` area.
///
/// Width binds when the area is at least as tall as it is wide; otherwise the
/// diameter is chosen so the rendered height fills `height` exactly.
#[must_use]
pub fn working_size(width: f64, height: f64) -> f64 {
    if height >= width {
        width
    } else {
        expected_width_from_height(height)
    }
}

/// Total rendered height for a gauge `width` wide.
///
/// The bottom of the circle is never drawn: the gauge ends at the arc's start
/// point plus the stroke half width and the scale label line below it.
#[must_use]
pub fn expected_height_from_width(width: f64) -> f64 {
    width / 2.0
        + point_by_angle(width / 2.0, SCALE_START_ANGLE).y
        + width * SCALE_FONT_SIZE_MULTIPLIER
        + width * STROKE_WIDTH_MULTIPLIER / 2.0
}

/// Inverse of [`expected_height_from_width`].
#[must_use]
pub fn expected_width_from_height(height: f64) -> f64 {
    height / height_to_width_ratio()
}

fn height_to_width_ratio() -> f64 {
    SCALE_START_ANGLE.to_radians().sin() / 2.0
        + 0.5
        + SCALE_FONT_SIZE_MULTIPLIER
        + STROKE_WIDTH_MULTIPLIER / 2.0
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{LayoutMetrics, expected_height_from_width, working_size};
    use crate::core::types::Rect;

    #[test]
    fn tall_area_is_width_bound() {
        assert_eq!(working_size(400.0, 900.0), 400.0);
        assert_eq!(working_size(400.0, 400.0), 400.0);
    }

    #[test]
    fn wide_area_fills_height_exactly() {
        let size = working_size(1000.0, 360.0);
        assert_relative_eq!(expected_height_from_width(size), 360.0, epsilon = 1e-9);
    }

    #[test]
    fn metrics_follow_fixed_multipliers() {
        let metrics = LayoutMetrics::compute(Rect::new(0.0, 0.0, 500.0, 800.0)).expect("layout");
        assert_relative_eq!(metrics.stroke_width, 50.0, epsilon = 1e-12);
        assert_relative_eq!(metrics.scale_radius, 225.0, epsilon = 1e-12);
        assert_relative_eq!(metrics.scale_rect.x, 25.0, epsilon = 1e-12);
        assert_relative_eq!(metrics.center_x, 250.0, epsilon = 1e-12);
        assert_relative_eq!(metrics.center_y, 250.0, epsilon = 1e-12);
        assert_relative_eq!(metrics.needle_radius, 200.0 * 0.98, epsilon = 1e-12);
        assert_relative_eq!(metrics.needle_hub_radius, 22.5, epsilon = 1e-12);
        assert_relative_eq!(metrics.needle_base_half_width, 11.25, epsilon = 1e-12);
        assert_relative_eq!(metrics.scale_font_size, 50.0, epsilon = 1e-12);
        assert_relative_eq!(metrics.value_font_size, 196.0 * 0.3, epsilon = 1e-12);
    }
}
