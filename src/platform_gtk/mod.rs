use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::GaugeEngine;
use crate::core::{Viewport, expected_height_from_width};
use crate::error::GaugeResult;
use crate::render::{CairoContextRenderer, Renderer};

/// Embeds a [`GaugeEngine`] into a GTK4 `DrawingArea`.
///
/// Every draw callback reports the allocated size to the engine before
/// painting, so resizes reach the layout engine without a separate signal.
/// Value changes only queue a redraw; GTK merges queued draws into one frame.
pub struct GtkGaugeAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: Rc<RefCell<GaugeEngine<R>>>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkGaugeAdapter<R> {
    #[must_use]
    pub fn new(engine: GaugeEngine<R>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        let draw_engine = Rc::clone(&engine);
        drawing_area.set_draw_func(move |_area, context, width, height| {
            let mut engine = draw_engine.borrow_mut();
            engine.set_viewport(Viewport::new(
                u32::try_from(width).unwrap_or(0),
                u32::try_from(height).unwrap_or(0),
            ));
            if let Err(err) = engine.render_on_cairo_context(context) {
                warn!(error = %err, "gauge draw failed");
            }
        });

        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<GaugeEngine<R>>> {
        Rc::clone(&self.engine)
    }

    pub fn set_current_value(&self, value: i64) {
        self.engine.borrow_mut().set_current_value(value);
        self.drawing_area.queue_draw();
    }

    pub fn set_max_value(&self, max_value: i64) -> GaugeResult<()> {
        self.engine.borrow_mut().set_max_value(max_value)?;
        self.drawing_area.queue_draw();
        Ok(())
    }

    /// Requests the content height matching `width`, so the gauge is not
    /// stretched into empty space below the arc.
    pub fn request_height_for_width(&self, width: i32) {
        let padding = self.engine.borrow().padding();
        let content_width = f64::from(width) - padding.horizontal();
        if content_width <= 0.0 {
            return;
        }
        let height = expected_height_from_width(content_width) + padding.vertical();
        self.drawing_area.set_content_width(width);
        self.drawing_area.set_content_height(height.ceil() as i32);
    }
}
