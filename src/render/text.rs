/// Average advance of a label glyph, in ems. Gauge labels are digits plus a
/// short unit, which sit close to this width in common sans fonts.
pub const ESTIMATED_GLYPH_ADVANCE_EM: f64 = 0.6;
/// Ink height of digits and capitals, in ems.
pub const ESTIMATED_INK_HEIGHT_EM: f64 = 0.72;

/// Ink bounds of a rendered string in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Deterministic font-independent text bounds used by headless renderers.
#[must_use]
pub fn estimate_text_metrics(text: &str, font_size_px: f64) -> TextMetrics {
    TextMetrics {
        width: text.chars().count() as f64 * font_size_px * ESTIMATED_GLYPH_ADVANCE_EM,
        height: font_size_px * ESTIMATED_INK_HEIGHT_EM,
    }
}
