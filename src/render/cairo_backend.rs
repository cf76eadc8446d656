use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, LineCap};
use pango::FontDescription;

use crate::error::{GaugeError, GaugeResult};
use crate::render::{
    ArcPrimitive, Color, RenderFrame, Renderer, TextHAlign, TextMetrics, estimate_text_metrics,
};

/// Upper bound for the angular size of one gradient slice of an arc.
const MAX_GRADIENT_SLICE_DEGREES: f64 = 1.5;
/// Slices overlap slightly so antialiasing does not leave hairline seams.
const GRADIENT_SLICE_OVERLAP_DEGREES: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub arcs_drawn: usize,
    pub arc_slices_drawn: usize,
    pub texts_drawn: usize,
    pub circles_drawn: usize,
    pub polygons_drawn: usize,
}

/// Extension trait for renderers that can draw into an external Cairo context
/// (for example a GTK `DrawingArea` draw function).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GaugeResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders either into an owned offscreen image surface through
/// `Renderer::render`, or in place on a host context through
/// `CairoContextRenderer`. Cairo has no angular gradient, so the scale arc is
/// stroked as thin slices, each colored from the gradient at its mid angle.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Option<Color>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> GaugeResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GaugeError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Some(Color::WHITE),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    /// `None` leaves the target untouched before drawing, which suits host
    /// contexts that already painted a background.
    pub fn set_clear_color(&mut self, color: Option<Color>) -> GaugeResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> GaugeResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            GaugeError::Backend(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface.flush();
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| GaugeError::Backend(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> GaugeResult<()> {
        frame.validate()?;

        if let Some(clear_color) = self.clear_color {
            apply_color(context, clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }

        let mut stats = CairoRenderStats::default();

        for arc in &frame.arcs {
            stats.arc_slices_drawn += stroke_gradient_arc(context, arc)?;
            stats.arcs_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            layout.set_font_description(Some(&font_description(text.font_size_px)));
            layout.set_text(&text.text);

            let (ink, _logical) = layout.pixel_extents();
            let x = aligned_layout_x(
                text.h_align,
                text.x,
                f64::from(ink.x()),
                f64::from(ink.width()),
            );
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

            apply_color(context, text.color);
            context.move_to(x, text.y - baseline);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        for circle in &frame.circles {
            apply_color(context, circle.color);
            context.new_path();
            context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, TAU);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
            stats.circles_drawn += 1;
        }

        for polygon in &frame.polygons {
            apply_color(context, polygon.color);
            context.new_path();
            let mut vertices = polygon.points.iter();
            if let Some(first) = vertices.next() {
                context.move_to(first.x, first.y);
            }
            for vertex in vertices {
                context.line_to(vertex.x, vertex.y);
            }
            context.close_path();
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill polygon", err))?;
            stats.polygons_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GaugeResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }

    fn measure_text(&self, text: &str, font_size_px: f64) -> TextMetrics {
        let Ok(context) = Context::new(&self.surface) else {
            return estimate_text_metrics(text, font_size_px);
        };
        let layout = pangocairo::functions::create_layout(&context);
        layout.set_font_description(Some(&font_description(font_size_px)));
        layout.set_text(text);

        let (ink, _logical) = layout.pixel_extents();
        TextMetrics {
            width: f64::from(ink.width()),
            height: f64::from(ink.height()),
        }
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GaugeResult<()> {
        self.render_with_context(context, frame)
    }
}

fn stroke_gradient_arc(context: &Context, arc: &ArcPrimitive) -> GaugeResult<usize> {
    let slices = (arc.sweep_angle.abs() / MAX_GRADIENT_SLICE_DEGREES)
        .ceil()
        .max(1.0) as usize;
    let step = arc.sweep_angle / slices as f64;
    let overlap = GRADIENT_SLICE_OVERLAP_DEGREES.min(step.abs()).copysign(step);

    context.set_line_width(arc.stroke_width);
    context.set_line_cap(LineCap::Butt);

    for index in 0..slices {
        let from = arc.start_angle + step * index as f64;
        let to = if index + 1 == slices {
            from + step
        } else {
            from + step + overlap
        };

        apply_color(context, arc.gradient.color_at_angle(from + step / 2.0));
        context.new_path();
        if step >= 0.0 {
            context.arc(
                arc.center_x,
                arc.center_y,
                arc.radius,
                from.to_radians(),
                to.to_radians(),
            );
        } else {
            context.arc_negative(
                arc.center_x,
                arc.center_y,
                arc.radius,
                from.to_radians(),
                to.to_radians(),
            );
        }
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke arc slice", err))?;
    }

    Ok(slices)
}

/// Layout origin that puts the ink bounds of a label on `anchor_x`.
///
/// `ink_x` is the ink offset from the layout origin, so glyph side bearings do
/// not shift the visible edge away from the anchor.
fn aligned_layout_x(h_align: TextHAlign, anchor_x: f64, ink_x: f64, ink_width: f64) -> f64 {
    match h_align {
        TextHAlign::Left => anchor_x - ink_x,
        TextHAlign::Center => anchor_x - ink_x - ink_width / 2.0,
        TextHAlign::Right => anchor_x - ink_x - ink_width,
    }
}

fn font_description(font_size_px: f64) -> FontDescription {
    let mut description = FontDescription::from_string("Sans");
    description.set_absolute_size(font_size_px * f64::from(pango::SCALE));
    description
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> GaugeError {
    GaugeError::Backend(format!("{prefix}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::aligned_layout_x;
    use crate::render::TextHAlign;

    #[test]
    fn labels_align_on_ink_bounds() {
        assert_eq!(aligned_layout_x(TextHAlign::Left, 40.0, 2.0, 60.0), 38.0);
        assert_eq!(aligned_layout_x(TextHAlign::Center, 100.0, 2.0, 60.0), 68.0);
        assert_eq!(aligned_layout_x(TextHAlign::Right, 300.0, 2.0, 60.0), 238.0);
    }
}
