use crate::error::GaugeResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid geometry without a
/// real backend, and keeps the last accepted frame for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_arc_count: usize,
    pub last_text_count: usize,
    pub last_circle_count: usize,
    pub last_polygon_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GaugeResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_arc_count = frame.arcs.len();
        self.last_text_count = frame.texts.len();
        self.last_circle_count = frame.circles.len();
        self.last_polygon_count = frame.polygons.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
