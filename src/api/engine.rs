use tracing::{debug, trace, warn};

use crate::core::{
    GaugeScale, LayoutMetrics, MaxValue, MeasureRequest, MeasureSpec, MeasuredSize, Padding,
    ValueOverflowPolicy, Viewport, measure_gauge,
};
use crate::error::GaugeResult;
use crate::render::Renderer;

use super::{GaugeConfig, GaugeStateSnapshot, GaugeStyle, InvalidationLevel, RenderOutcome};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main facade consumed by host applications.
///
/// `GaugeEngine` owns the gauge state, recomputes layout when the drawing
/// area changes, coalesces repaint requests and hands finished frames to the
/// renderer. It is meant to live on a single UI thread.
pub struct GaugeEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) scale: GaugeScale,
    pub(super) max_value: MaxValue,
    pub(super) current_value: i64,
    pub(super) unit_label: String,
    pub(super) value_policy: ValueOverflowPolicy,
    pub(super) style: GaugeStyle,
    viewport: Option<Viewport>,
    padding: Padding,
    pub(super) metrics: Option<LayoutMetrics>,
    layout_degenerate: bool,
    pending: InvalidationLevel,
}

impl<R: Renderer> GaugeEngine<R> {
    pub fn new(renderer: R, config: GaugeConfig) -> GaugeResult<Self> {
        let max_value = config.validate()?;

        let mut engine = Self {
            renderer,
            scale: GaugeScale::default(),
            max_value,
            current_value: config.current_value,
            unit_label: config.unit_label,
            value_policy: config.value_policy,
            style: config.style,
            viewport: config.viewport,
            padding: config.padding,
            metrics: None,
            layout_degenerate: false,
            pending: InvalidationLevel::Layout,
        };
        engine.relayout();
        Ok(engine)
    }

    #[must_use]
    pub fn current_value(&self) -> i64 {
        self.current_value
    }

    /// Stores the value as given; values outside `[0, max_value]` are kept and
    /// drawn according to the configured [`ValueOverflowPolicy`].
    pub fn set_current_value(&mut self, value: i64) {
        trace!(value, previous = self.current_value, "set current value");
        self.current_value = value;
        self.invalidate(InvalidationLevel::Value);
    }

    #[must_use]
    pub fn max_value(&self) -> i64 {
        self.max_value.get()
    }

    /// Replaces the max value. Non-positive values are rejected and leave the
    /// engine untouched.
    pub fn set_max_value(&mut self, max_value: i64) -> GaugeResult<()> {
        let validated = MaxValue::new(max_value).inspect_err(|err| {
            warn!(error = %err, "rejecting max value");
        })?;
        debug!(max_value, "set max value");
        self.max_value = validated;
        self.invalidate(InvalidationLevel::Value);
        Ok(())
    }

    #[must_use]
    pub fn scale(&self) -> GaugeScale {
        self.scale
    }

    #[must_use]
    pub fn value_policy(&self) -> ValueOverflowPolicy {
        self.value_policy
    }

    pub fn set_value_policy(&mut self, policy: ValueOverflowPolicy) {
        self.value_policy = policy;
        self.invalidate(InvalidationLevel::Value);
    }

    #[must_use]
    pub fn unit_label(&self) -> &str {
        &self.unit_label
    }

    #[must_use]
    pub fn style(&self) -> &GaugeStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: GaugeStyle) -> GaugeResult<()> {
        style.validate()?;
        self.style = style;
        self.invalidate(InvalidationLevel::Layout);
        Ok(())
    }

    /// Current needle angle in degrees.
    #[must_use]
    pub fn needle_angle(&self) -> f64 {
        self.scale.needle_angle(self.current_value, self.max_value, self.value_policy)
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Notifies the engine that the host drawing area changed.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == Some(viewport) && !self.layout_degenerate && self.metrics.is_some() {
            return;
        }
        self.viewport = Some(viewport);
        self.relayout();
    }

    #[must_use]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Replaces the padding. Negative or non-finite edges are rejected and
    /// leave the engine untouched.
    pub fn set_padding(&mut self, padding: Padding) -> GaugeResult<()> {
        padding.validate().inspect_err(|err| {
            warn!(error = %err, "rejecting padding");
        })?;
        if self.padding == padding {
            return Ok(());
        }
        self.padding = padding;
        self.relayout();
        Ok(())
    }

    /// Last successfully computed metrics.
    ///
    /// Still returns the previous metrics while the current area is degenerate.
    #[must_use]
    pub fn layout_metrics(&self) -> Option<LayoutMetrics> {
        self.metrics
    }

    #[must_use]
    pub fn is_layout_degenerate(&self) -> bool {
        self.layout_degenerate
    }

    /// Preferred outer size under host constraints, using this gauge's padding.
    #[must_use]
    pub fn preferred_size(
        &self,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        request: MeasureRequest,
    ) -> MeasuredSize {
        let request = MeasureRequest {
            padding: self.padding,
            ..request
        };
        measure_gauge(width_spec, height_spec, &request)
    }

    fn relayout(&mut self) {
        let Some(viewport) = self.viewport else {
            return;
        };

        let content = viewport.content_rect(self.padding);
        match LayoutMetrics::compute(content) {
            Ok(metrics) => {
                debug!(
                    width = viewport.width,
                    height = viewport.height,
                    size = metrics.size,
                    center_x = metrics.center_x,
                    center_y = metrics.center_y,
                    "gauge layout updated"
                );
                self.metrics = Some(metrics);
                self.layout_degenerate = false;
                self.invalidate(InvalidationLevel::Layout);
            }
            Err(err) => {
                warn!(
                    error = %err,
                    has_previous = self.metrics.is_some(),
                    "skipping layout for degenerate area; keeping last metrics"
                );
                self.layout_degenerate = true;
            }
        }
    }

    /// Metrics usable for drawing right now, if any.
    pub(super) fn drawable_metrics(&self) -> Option<LayoutMetrics> {
        if self.layout_degenerate {
            return None;
        }
        self.metrics
    }

    pub fn invalidate(&mut self, level: InvalidationLevel) {
        self.pending = self.pending.max(level);
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationLevel {
        self.pending
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        !self.pending.is_none()
    }

    /// Builds and submits a frame for the current state.
    ///
    /// Without a usable layout the frame is skipped rather than drawn with
    /// non-finite geometry; pending invalidation then stays set.
    pub fn render(&mut self) -> GaugeResult<RenderOutcome> {
        let Some(frame) = self.build_render_frame()? else {
            debug!("no usable gauge layout; frame skipped");
            return Ok(RenderOutcome::Skipped);
        };
        self.renderer.render(&frame)?;
        self.pending = InvalidationLevel::None;
        trace!(primitives = frame.primitive_count(), "gauge frame rendered");
        Ok(RenderOutcome::Drawn)
    }

    /// Renders only when something changed since the last drawn frame.
    pub fn render_if_invalidated(&mut self) -> GaugeResult<RenderOutcome> {
        if self.pending.is_none() {
            return Ok(RenderOutcome::UpToDate);
        }
        self.render()
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
    ) -> GaugeResult<RenderOutcome>
    where
        R: CairoContextRenderer,
    {
        let Some(frame) = self.build_render_frame()? else {
            return Ok(RenderOutcome::Skipped);
        };
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.pending = InvalidationLevel::None;
        Ok(RenderOutcome::Drawn)
    }

    #[must_use]
    pub fn snapshot_state(&self) -> GaugeStateSnapshot {
        GaugeStateSnapshot::new(self.current_value)
    }

    pub fn restore_state(&mut self, snapshot: GaugeStateSnapshot) {
        debug!(current_value = snapshot.current_value, "restore gauge state");
        self.set_current_value(snapshot.current_value);
    }

    pub fn restore_state_json(&mut self, input: &str) -> GaugeResult<()> {
        let snapshot = GaugeStateSnapshot::from_json_compat_str(input)?;
        self.restore_state(snapshot);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R: Renderer> std::fmt::Debug for GaugeEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GaugeEngine")
            .field("current_value", &self.current_value)
            .field("max_value", &self.max_value.get())
            .field("viewport", &self.viewport)
            .field("layout_degenerate", &self.layout_degenerate)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
