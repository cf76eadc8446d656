use tracing::trace;

use crate::core::{LayoutMetrics, point_around, point_by_angle};
use crate::error::GaugeResult;
use crate::render::{
    ArcPrimitive, CirclePrimitive, ConicGradient, PolygonPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::GaugeEngine;

/// Label text for `value`, e.g. `"42 km/h"`.
#[must_use]
pub fn format_value_label(value: i64, unit_label: &str) -> String {
    if unit_label.is_empty() {
        value.to_string()
    } else {
        format!("{value} {unit_label}")
    }
}

impl<R: Renderer> GaugeEngine<R> {
    /// Materializes the scene for the current state.
    ///
    /// Returns `None` while there is no usable layout (no drawing area yet, or
    /// the latest one was degenerate).
    pub fn build_render_frame(&self) -> GaugeResult<Option<RenderFrame>> {
        let (Some(viewport), Some(metrics)) = (self.viewport(), self.drawable_metrics()) else {
            return Ok(None);
        };

        let [zero_label, max_label] = self.build_scale_labels(&metrics);
        let (hub, pointer) = self.build_needle(&metrics);
        let frame = RenderFrame::new(viewport)
            .with_arc(self.build_scale_arc(&metrics)?)
            .with_text(self.build_value_label(&metrics))
            .with_text(zero_label)
            .with_text(max_label)
            .with_circle(hub)
            .with_polygon(pointer);

        trace!(
            arcs = frame.arcs.len(),
            texts = frame.texts.len(),
            circles = frame.circles.len(),
            polygons = frame.polygons.len(),
            "built gauge frame"
        );
        Ok(Some(frame))
    }

    fn build_scale_arc(&self, metrics: &LayoutMetrics) -> GaugeResult<ArcPrimitive> {
        let gradient =
            ConicGradient::new(metrics.center_x, metrics.center_y, self.style.color_stops())?;
        Ok(ArcPrimitive {
            center_x: metrics.center_x,
            center_y: metrics.center_y,
            radius: metrics.scale_radius,
            start_angle: self.scale.start_angle(),
            sweep_angle: self.scale.sweep_angle(),
            stroke_width: metrics.stroke_width,
            gradient,
        })
    }

    /// Current value, centered horizontally, on the level of the arc's start.
    fn build_value_label(&self, metrics: &LayoutMetrics) -> TextPrimitive {
        let start = point_by_angle(metrics.scale_radius, self.scale.start_angle());
        TextPrimitive::new(
            format_value_label(self.current_value, &self.unit_label),
            metrics.center_x,
            metrics.center_y + start.y,
            metrics.value_font_size,
            self.style.text_color,
            TextHAlign::Center,
        )
    }

    /// Zero and max labels hanging just below the two ends of the arc.
    fn build_scale_labels(&self, metrics: &LayoutMetrics) -> [TextPrimitive; 2] {
        let zero_text = format_value_label(0, &self.unit_label);
        let zero_height = self
            .renderer
            .measure_text(&zero_text, metrics.scale_font_size)
            .height;
        let start = point_by_angle(metrics.scale_radius, self.scale.start_angle());
        let zero = TextPrimitive::new(
            zero_text,
            metrics.scale_rect.left(),
            metrics.center_y + start.y + metrics.stroke_width / 2.0 + zero_height,
            metrics.scale_font_size,
            self.style.text_color,
            TextHAlign::Left,
        );

        let max_text = format_value_label(self.max_value.get(), &self.unit_label);
        let max_height = self
            .renderer
            .measure_text(&max_text, metrics.scale_font_size)
            .height;
        let end = point_by_angle(metrics.scale_radius, self.scale.end_angle());
        let max = TextPrimitive::new(
            max_text,
            metrics.scale_rect.right(),
            metrics.center_y + end.y + metrics.stroke_width / 2.0 + max_height,
            metrics.scale_font_size,
            self.style.text_color,
            TextHAlign::Right,
        );

        [zero, max]
    }

    /// Hub circle plus the pointer triangle: two base vertices perpendicular
    /// to the needle direction and the apex on the needle radius.
    fn build_needle(&self, metrics: &LayoutMetrics) -> (CirclePrimitive, PolygonPrimitive) {
        let (cx, cy) = (metrics.center_x, metrics.center_y);
        let angle = self.needle_angle();
        let color = self.style.needle_color;

        let hub = CirclePrimitive::new(cx, cy, metrics.needle_hub_radius, color);
        let pointer = PolygonPrimitive::new(
            [
                point_around(cx, cy, metrics.needle_base_half_width, angle - 90.0),
                point_around(cx, cy, metrics.needle_base_half_width, angle + 90.0),
                point_around(cx, cy, metrics.needle_radius, angle),
            ],
            color,
        );
        (hub, pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::format_value_label;

    #[test]
    fn labels_join_value_and_unit() {
        assert_eq!(format_value_label(42, "km/h"), "42 km/h");
        assert_eq!(format_value_label(-3, "rpm"), "-3 rpm");
        assert_eq!(format_value_label(7, ""), "7");
    }
}
