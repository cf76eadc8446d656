use serde::{Deserialize, Serialize};

/// Cartesian offset (or absolute position once translated) in pixel space.
///
/// Screen space is y-down, so positive angles turn clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Offset from the gauge center of the point at `radius` along `angle_degrees`.
///
/// Angle 0 is the positive x axis. NaN or infinite inputs propagate.
#[must_use]
pub fn point_by_angle(radius: f64, angle_degrees: f64) -> Point {
    let radians = angle_degrees.to_radians();
    Point::new(radius * radians.cos(), radius * radians.sin())
}

/// Absolute position of the point at `radius`/`angle_degrees` around `(center_x, center_y)`.
#[must_use]
pub fn point_around(center_x: f64, center_y: f64, radius: f64, angle_degrees: f64) -> Point {
    point_by_angle(radius, angle_degrees).offset_by(center_x, center_y)
}
