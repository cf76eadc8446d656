use serde::{Deserialize, Serialize};

use crate::core::{MaxValue, Padding, ValueOverflowPolicy, Viewport};
use crate::error::{GaugeError, GaugeResult};
use crate::render::{Color, ColorStop, validate_color_stops};

/// Per-instance colors of one gauge.
///
/// Each engine owns its style; nothing is shared between gauges, so two
/// gauges with different ramps never repaint each other's scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeStyle {
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    #[serde(default = "default_needle_color")]
    pub needle_color: Color,
    #[serde(default = "default_low_value_color")]
    pub low_value_color: Color,
    #[serde(default = "default_medium_value_color")]
    pub medium_value_color: Color,
    #[serde(default = "default_high_value_color")]
    pub high_value_color: Color,
    /// Explicit full-circle ramp. When absent, the ramp is built from the
    /// low/medium/high colors, see [`GaugeStyle::color_stops`].
    #[serde(default)]
    pub custom_color_stops: Option<Vec<ColorStop>>,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            text_color: default_text_color(),
            needle_color: default_needle_color(),
            low_value_color: default_low_value_color(),
            medium_value_color: default_medium_value_color(),
            high_value_color: default_high_value_color(),
            custom_color_stops: None,
        }
    }
}

impl GaugeStyle {
    /// Stops of the scale's angular gradient.
    ///
    /// The default ramp is spread evenly over the whole circle as
    /// high, low, low, medium, high. With the scale starting at -210 degrees,
    /// the visible arc then reads low, medium, high from left to right.
    #[must_use]
    pub fn color_stops(&self) -> Vec<ColorStop> {
        if let Some(stops) = &self.custom_color_stops {
            return stops.clone();
        }
        vec![
            ColorStop::new(0.0, self.high_value_color),
            ColorStop::new(0.25, self.low_value_color),
            ColorStop::new(0.5, self.low_value_color),
            ColorStop::new(0.75, self.medium_value_color),
            ColorStop::new(1.0, self.high_value_color),
        ]
    }

    pub fn validate(&self) -> GaugeResult<()> {
        for color in [
            self.text_color,
            self.needle_color,
            self.low_value_color,
            self.medium_value_color,
            self.high_value_color,
        ] {
            color.validate()?;
        }
        validate_color_stops(&self.color_stops())
    }
}

fn default_text_color() -> Color {
    Color::BLACK
}

fn default_needle_color() -> Color {
    Color::RED
}

fn default_low_value_color() -> Color {
    Color::RED
}

fn default_medium_value_color() -> Color {
    Color::YELLOW
}

fn default_high_value_color() -> Color {
    Color::GREEN
}

/// Public gauge bootstrap configuration.
///
/// Serializable so hosts can keep gauge setup in JSON next to the rest of
/// their settings. Every field has a default, so partial documents load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfig {
    #[serde(default = "default_max_value")]
    pub max_value: i64,
    #[serde(default)]
    pub current_value: i64,
    #[serde(default = "default_unit_label")]
    pub unit_label: String,
    #[serde(default)]
    pub value_policy: ValueOverflowPolicy,
    #[serde(default)]
    pub style: GaugeStyle,
    #[serde(default)]
    pub padding: Padding,
    /// Initial drawing area, when already known at construction time.
    #[serde(default)]
    pub viewport: Option<Viewport>,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            max_value: default_max_value(),
            current_value: 0,
            unit_label: default_unit_label(),
            value_policy: ValueOverflowPolicy::default(),
            style: GaugeStyle::default(),
            padding: Padding::default(),
            viewport: None,
        }
    }
}

impl GaugeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }

    #[must_use]
    pub fn with_current_value(mut self, current_value: i64) -> Self {
        self.current_value = current_value;
        self
    }

    #[must_use]
    pub fn with_unit_label(mut self, unit_label: impl Into<String>) -> Self {
        self.unit_label = unit_label.into();
        self
    }

    #[must_use]
    pub fn with_value_policy(mut self, value_policy: ValueOverflowPolicy) -> Self {
        self.value_policy = value_policy;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: GaugeStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Checks every option and returns the validated max value.
    pub fn validate(&self) -> GaugeResult<MaxValue> {
        let max_value = MaxValue::new(self.max_value)?;
        self.style.validate()?;
        self.padding.validate()?;
        Ok(max_value)
    }

    pub fn from_json_str(input: &str) -> GaugeResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| GaugeError::InvalidData(format!("failed to parse gauge config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> GaugeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GaugeError::InvalidData(format!("failed to serialize gauge config: {e}")))
    }
}

fn default_max_value() -> i64 {
    MaxValue::DEFAULT.get()
}

fn default_unit_label() -> String {
    "km/h".to_owned()
}
