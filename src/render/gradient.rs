use serde::{Deserialize, Serialize};

use crate::error::{GaugeError, GaugeResult};
use crate::render::Color;

/// Color at a normalized position along a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

impl ColorStop {
    #[must_use]
    pub const fn new(position: f64, color: Color) -> Self {
        Self { position, color }
    }
}

/// Checks the ramp invariants: at least two stops, positions non-decreasing,
/// first at 0.0 and last at 1.0.
pub fn validate_color_stops(stops: &[ColorStop]) -> GaugeResult<()> {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Err(GaugeError::InvalidData(
            "color ramp needs at least two stops".to_owned(),
        ));
    };
    if stops.len() < 2 {
        return Err(GaugeError::InvalidData(
            "color ramp needs at least two stops".to_owned(),
        ));
    }
    if first.position != 0.0 || last.position != 1.0 {
        return Err(GaugeError::InvalidData(
            "color ramp must start at 0.0 and end at 1.0".to_owned(),
        ));
    }
    for pair in stops.windows(2) {
        if !pair[1].position.is_finite() || pair[1].position < pair[0].position {
            return Err(GaugeError::InvalidData(
                "color stop positions must be non-decreasing".to_owned(),
            ));
        }
    }
    for stop in stops {
        stop.color.validate()?;
    }
    Ok(())
}

/// Angular gradient around a center covering the full circle.
///
/// Position 0 sits on the positive x axis and positions grow with the angle,
/// in the same direction `point_by_angle` turns, so an arc only shows the slice
/// of the ramp between its own start and end angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConicGradientRepr")]
pub struct ConicGradient {
    pub center_x: f64,
    pub center_y: f64,
    stops: Vec<ColorStop>,
}

/// Unchecked wire form; deserialization goes through [`ConicGradient::new`].
#[derive(Deserialize)]
struct ConicGradientRepr {
    center_x: f64,
    center_y: f64,
    stops: Vec<ColorStop>,
}

impl TryFrom<ConicGradientRepr> for ConicGradient {
    type Error = GaugeError;

    fn try_from(repr: ConicGradientRepr) -> GaugeResult<Self> {
        Self::new(repr.center_x, repr.center_y, repr.stops)
    }
}

impl ConicGradient {
    pub fn new(center_x: f64, center_y: f64, stops: Vec<ColorStop>) -> GaugeResult<Self> {
        validate_color_stops(&stops)?;
        Ok(Self {
            center_x,
            center_y,
            stops,
        })
    }

    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn validate(&self) -> GaugeResult<()> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(GaugeError::InvalidData(
                "gradient center must be finite".to_owned(),
            ));
        }
        validate_color_stops(&self.stops)
    }

    /// Ramp position of `angle_degrees`, wrapped into `[0, 1)`.
    #[must_use]
    pub fn position_at_angle(angle_degrees: f64) -> f64 {
        angle_degrees.rem_euclid(360.0) / 360.0
    }

    #[must_use]
    pub fn color_at_angle(&self, angle_degrees: f64) -> Color {
        self.color_at_position(Self::position_at_angle(angle_degrees))
    }

    /// Linearly interpolated color at `position`; positions outside `[0, 1]`
    /// take the nearest end color.
    #[must_use]
    pub fn color_at_position(&self, position: f64) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::TRANSPARENT;
        };
        if position <= first.position {
            return first.color;
        }

        for pair in self.stops.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if position <= to.position {
                let span = to.position - from.position;
                if span <= 0.0 {
                    return to.color;
                }
                return from.color.lerp(to.color, (position - from.position) / span);
            }
        }

        last.color
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{ColorStop, ConicGradient, validate_color_stops};
    use crate::render::Color;

    fn ramp() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, Color::GREEN),
            ColorStop::new(0.5, Color::RED),
            ColorStop::new(1.0, Color::GREEN),
        ]
    }

    #[test]
    fn angle_positions_wrap_around_the_circle() {
        assert_relative_eq!(ConicGradient::position_at_angle(-90.0), 0.75);
        assert_relative_eq!(ConicGradient::position_at_angle(450.0), 0.25);
        assert_relative_eq!(ConicGradient::position_at_angle(0.0), 0.0);
    }

    #[test]
    fn colors_interpolate_between_neighbor_stops() {
        let gradient = ConicGradient::new(0.0, 0.0, ramp()).expect("gradient");
        let quarter = gradient.color_at_angle(90.0);
        assert_relative_eq!(quarter.red, 0.5);
        assert_relative_eq!(quarter.green, 0.5);
        assert_eq!(gradient.color_at_angle(180.0), Color::RED);
    }

    #[test]
    fn ramp_must_start_at_zero_and_end_at_one() {
        let stops = vec![
            ColorStop::new(0.1, Color::GREEN),
            ColorStop::new(1.0, Color::RED),
        ];
        assert!(validate_color_stops(&stops).is_err());
        assert!(validate_color_stops(&[ColorStop::new(0.0, Color::RED)]).is_err());
    }

    #[test]
    fn decreasing_positions_are_rejected() {
        let stops = vec![
            ColorStop::new(0.0, Color::GREEN),
            ColorStop::new(0.6, Color::RED),
            ColorStop::new(0.4, Color::RED),
            ColorStop::new(1.0, Color::GREEN),
        ];
        assert!(validate_color_stops(&stops).is_err());
    }

    #[test]
    fn deserialized_gradient_keeps_ramp_invariants() {
        let err = serde_json::from_str::<ConicGradient>(
            r#"{"center_x": 0.0, "center_y": 0.0, "stops": []}"#,
        )
        .expect_err("empty ramp must fail");
        assert!(err.to_string().contains("at least two stops"));

        let gradient = ConicGradient::new(4.0, 8.0, ramp()).expect("gradient");
        let json = serde_json::to_string(&gradient).expect("serialize");
        let restored: ConicGradient = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, gradient);
    }

    #[test]
    fn empty_ramp_samples_transparent() {
        let gradient = ConicGradient {
            center_x: 0.0,
            center_y: 0.0,
            stops: Vec::new(),
        };
        assert_eq!(gradient.color_at_angle(45.0), Color::TRANSPARENT);
    }
}
