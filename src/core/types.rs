use serde::{Deserialize, Serialize};

use crate::error::{GaugeError, GaugeResult};

/// Full size of the host drawing area in pixels, padding included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Area left for drawing once `padding` is removed from every edge.
    ///
    /// The result may have non-positive extents when padding exceeds the
    /// viewport; the layout engine rejects such rectangles.
    #[must_use]
    pub fn content_rect(self, padding: Padding) -> Rect {
        let left = padding.left;
        let top = padding.top;
        let right = f64::from(self.width) - padding.right;
        let bottom = f64::from(self.height) - padding.bottom;
        Rect::new(left, top, right - left, bottom - top)
    }
}

/// Per-edge padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    /// Every edge must be finite and non-negative.
    pub fn validate(self) -> GaugeResult<()> {
        for (edge, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GaugeError::InvalidData(format!(
                    "padding `{edge}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    /// True when both extents are finite and strictly positive.
    #[must_use]
    pub fn has_area(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Padding, Viewport};

    #[test]
    fn content_rect_subtracts_padding_on_every_edge() {
        let rect = Viewport::new(400, 300).content_rect(Padding::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.right(), 370.0);
        assert_eq!(rect.bottom(), 260.0);
    }

    #[test]
    fn oversized_padding_yields_rect_without_area() {
        let rect = Viewport::new(40, 40).content_rect(Padding::uniform(25.0));
        assert!(!rect.has_area());
    }

    #[test]
    fn padding_edges_must_be_finite_and_non_negative() {
        assert!(Padding::uniform(0.0).validate().is_ok());
        assert!(Padding::new(4.0, 0.0, 4.0, 12.5).validate().is_ok());
        assert!(Padding::new(-1.0, 0.0, 0.0, 0.0).validate().is_err());
        assert!(Padding::new(0.0, 0.0, 0.0, f64::INFINITY).validate().is_err());
        assert!(Padding::new(0.0, f64::NAN, 0.0, 0.0).validate().is_err());
    }
}
