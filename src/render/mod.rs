mod frame;
mod gradient;
mod null_renderer;
mod primitives;
mod text;

pub use frame::RenderFrame;
pub use gradient::{ColorStop, ConicGradient, validate_color_stops};
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, CirclePrimitive, Color, PolygonPrimitive, TextHAlign, TextPrimitive,
};
pub use text::{
    ESTIMATED_GLYPH_ADVANCE_EM, ESTIMATED_INK_HEIGHT_EM, TextMetrics, estimate_text_metrics,
};

use crate::error::GaugeResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from gauge layout and state. Label placement
/// depends on text size, so backends may also report real font metrics.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GaugeResult<()>;

    /// Ink bounds of `text` at `font_size_px`. Defaults to a font-independent
    /// estimate.
    fn measure_text(&self, text: &str, font_size_px: f64) -> TextMetrics {
        estimate_text_metrics(text, font_size_px)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
