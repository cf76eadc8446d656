use crate::core::Viewport;
use crate::error::{GaugeError, GaugeResult};
use crate::render::{ArcPrimitive, CirclePrimitive, PolygonPrimitive, TextPrimitive};

/// Backend-agnostic scene for one gauge draw pass.
///
/// Backends paint arcs first, then labels, then circles and polygons, so the
/// needle always ends up on top of the scale.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub arcs: Vec<ArcPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            arcs: Vec::new(),
            texts: Vec::new(),
            circles: Vec::new(),
            polygons: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arc(mut self, arc: ArcPrimitive) -> Self {
        self.arcs.push(arc);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    pub fn validate(&self) -> GaugeResult<()> {
        if !self.viewport.is_valid() {
            return Err(GaugeError::DegenerateLayout {
                width: f64::from(self.viewport.width),
                height: f64::from(self.viewport.height),
            });
        }

        for arc in &self.arcs {
            arc.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.arcs.len() + self.texts.len() + self.circles.len() + self.polygons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
