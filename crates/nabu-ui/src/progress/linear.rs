use nabu_engine::coords::Rect;
use nabu_engine::paint::{Color, Paint};

use crate::painter::Canvas;

use super::cap::{emit_cap, CapEnd};
use super::delegate::DrawingDelegate;
use super::segment::{fill_span, full_track_span, FillSpan};
use super::spec::{Segment, TrackSpec, ViewportSpec};
use super::viewport::{self, DisplayState};

/// Horizontal track with rounded ends.
///
/// Holds its own copy of the configuration; build a new delegate when the
/// configuration changes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearDrawingDelegate {
    spec: TrackSpec,
}

impl LinearDrawingDelegate {
    pub fn new(spec: TrackSpec) -> Self {
        Self { spec }
    }

    #[inline]
    pub fn spec(&self) -> &TrackSpec {
        &self.spec
    }

    /// Body rect over `span` plus a cap at each end.
    fn fill_run(canvas: &mut dyn Canvas, display: &DisplayState, span: FillSpan, paint: &Paint) {
        let thickness = display.displayed_thickness;
        let radius = display.displayed_corner_radius;
        let half = thickness / 2.0;

        canvas.fill_rect(Rect::from_ltrb(span.start_x, -half, span.end_x, half), paint);
        emit_cap(canvas, thickness, radius, span.start_x, CapEnd::Leading, paint);
        emit_cap(canvas, thickness, radius, span.end_x, CapEnd::Trailing, paint);
    }
}

impl Default for LinearDrawingDelegate {
    fn default() -> Self {
        Self::new(TrackSpec::default())
    }
}

impl DrawingDelegate for LinearDrawingDelegate {
    fn preferred_thickness(&self) -> f32 {
        self.spec.thickness
    }

    fn preferred_length(&self) -> Option<f32> {
        None
    }

    fn configure_viewport(
        &self,
        canvas: &mut dyn Canvas,
        bounds: Rect,
        size_fraction: f32,
    ) -> DisplayState {
        viewport::configure(canvas, &ViewportSpec::new(bounds, &self.spec), size_fraction)
    }

    fn fill_segment(&self, canvas: &mut dyn Canvas, display: &DisplayState, segment: &Segment) {
        let Some(span) = fill_span(segment.start_fraction, segment.end_fraction, display) else {
            return;
        };
        Self::fill_run(canvas, display, span, &Paint::fill(segment.color));
    }

    fn fill_full_track(&self, canvas: &mut dyn Canvas, display: &DisplayState, color: Color) {
        Self::fill_run(canvas, display, full_track_span(display), &Paint::fill(color));
    }
}
