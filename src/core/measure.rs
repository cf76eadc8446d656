//! Size negotiation with host layout systems.
//!
//! Hosts that size widgets from constraints (GTK `measure`, a dashboard grid,
//! a test harness) ask the gauge for its preferred box. The gauge is a
//! flattened square because the bottom of the circle is never drawn, so the
//! preferred height follows from the width and vice versa.

use serde::{Deserialize, Serialize};

use crate::core::layout::{expected_height_from_width, expected_width_from_height};
use crate::core::types::Padding;

/// Constraint imposed by the host on one dimension, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MeasureSpec {
    /// The host dictates the size.
    Exactly(f64),
    /// The gauge may use up to this size.
    AtMost(f64),
    /// No constraint; the value is a hint and may be zero.
    Unspecified(f64),
}

impl MeasureSpec {
    #[must_use]
    pub fn size(self) -> f64 {
        match self {
            Self::Exactly(size) | Self::AtMost(size) | Self::Unspecified(size) => size,
        }
    }

    /// Reconciles a desired size with this constraint.
    #[must_use]
    pub fn resolve(self, desired: f64) -> f64 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(size) => desired.min(size),
            Self::Unspecified(_) => desired,
        }
    }
}

/// Host-supplied context for one measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasureRequest {
    pub padding: Padding,
    pub min_width: f64,
    pub min_height: f64,
    /// Used for an unconstrained dimension that arrives without a usable size,
    /// typically the display size.
    pub fallback_width: f64,
    pub fallback_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasuredSize {
    pub width: f64,
    pub height: f64,
}

/// Preferred outer size of the gauge (padding included) under the given constraints.
#[must_use]
pub fn measure_gauge(
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
    request: &MeasureRequest,
) -> MeasuredSize {
    let padding = request.padding;
    let mut available_width = width_spec.size() - padding.horizontal();
    let mut available_height = height_spec.size() - padding.vertical();

    if available_width <= 0.0 && matches!(width_spec, MeasureSpec::Unspecified(_)) {
        available_width = request.fallback_width - padding.horizontal();
    }
    if available_height <= 0.0 && matches!(height_spec, MeasureSpec::Unspecified(_)) {
        available_height = request.fallback_height - padding.vertical();
    }

    let (content_width, content_height) = if available_height >= available_width {
        (available_width, expected_height_from_width(available_width))
    } else {
        (expected_width_from_height(available_height), available_height)
    };

    let desired_width = (content_width + padding.horizontal()).max(request.min_width);
    let desired_height = (content_height + padding.vertical()).max(request.min_height);

    MeasuredSize {
        width: width_spec.resolve(desired_width),
        height: height_spec.resolve(desired_height),
    }
}
