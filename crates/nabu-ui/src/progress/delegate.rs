use nabu_engine::coords::Rect;
use nabu_engine::paint::Color;

use crate::painter::Canvas;

use super::spec::Segment;
use super::viewport::DisplayState;

/// Shape-specific drawing for a progress indicator.
///
/// A draw pass calls [`configure_viewport`](Self::configure_viewport) once,
/// then fills the track and any number of segments with the returned
/// [`DisplayState`]. Callers wrap the pass in `save` / `restore` so the
/// viewport transform does not leak into later drawing.
pub trait DrawingDelegate {
    /// Thickness the host should reserve across the track, in px.
    fn preferred_thickness(&self) -> f32;

    /// Preferred length along the track. `None` = fill whatever is available.
    fn preferred_length(&self) -> Option<f32>;

    /// Sets up the canvas for `bounds` and returns this pass's display state.
    fn configure_viewport(
        &self,
        canvas: &mut dyn Canvas,
        bounds: Rect,
        size_fraction: f32,
    ) -> DisplayState;

    /// Fills one run of the indicator. Zero-length runs draw nothing.
    fn fill_segment(&self, canvas: &mut dyn Canvas, display: &DisplayState, segment: &Segment);

    /// Fills the whole track with `color`.
    fn fill_full_track(&self, canvas: &mut dyn Canvas, display: &DisplayState, color: Color);
}
