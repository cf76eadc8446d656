use serde::{Deserialize, Serialize};

use crate::error::{GaugeError, GaugeResult};

/// Angle (degrees) where the scale arc starts; value 0 points here.
pub const SCALE_START_ANGLE: f64 = -210.0;
/// Angular extent (degrees) of the scale arc.
pub const SCALE_SWEEP_ANGLE: f64 = 240.0;

/// How values outside `[0, max_value]` move the needle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueOverflowPolicy {
    /// The needle keeps rotating past either end of the arc.
    #[default]
    PassThrough,
    /// The needle stops at the arc ends.
    Clamp,
}

/// Upper bound of the gauge scale, guaranteed to be > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct MaxValue(i64);

impl MaxValue {
    pub const DEFAULT: Self = Self(300);

    pub fn new(value: i64) -> GaugeResult<Self> {
        if value <= 0 {
            return Err(GaugeError::Configuration { max_value: value });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Default for MaxValue {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for MaxValue {
    type Error = GaugeError;

    fn try_from(value: i64) -> GaugeResult<Self> {
        Self::new(value)
    }
}

impl From<MaxValue> for i64 {
    fn from(value: MaxValue) -> Self {
        value.0
    }
}

/// Maps gauge values onto needle angles along the fixed scale arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeScale {
    start_angle: f64,
    sweep_angle: f64,
}

impl Default for GaugeScale {
    fn default() -> Self {
        Self {
            start_angle: SCALE_START_ANGLE,
            sweep_angle: SCALE_SWEEP_ANGLE,
        }
    }
}

impl GaugeScale {
    #[must_use]
    pub fn start_angle(self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn sweep_angle(self) -> f64 {
        self.sweep_angle
    }

    #[must_use]
    pub fn end_angle(self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Needle angle in degrees for `value` on a `0..=max_value` scale.
    #[must_use]
    pub fn needle_angle(
        self,
        value: i64,
        max_value: MaxValue,
        policy: ValueOverflowPolicy,
    ) -> f64 {
        let max_value = max_value.get();
        let value = match policy {
            ValueOverflowPolicy::PassThrough => value,
            ValueOverflowPolicy::Clamp => value.clamp(0, max_value),
        };
        let fraction = value as f64 / max_value as f64;
        self.start_angle + self.sweep_angle * fraction
    }
}
