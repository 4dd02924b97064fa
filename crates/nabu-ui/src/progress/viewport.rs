use nabu_engine::coords::{Rect, Transform2D, Vec2};

use crate::painter::Canvas;

use super::spec::{GrowMode, ViewportSpec};

/// Per-pass display parameters shared by segment and cap geometry.
///
/// Recomputed on every pass; never cached across size-fraction changes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayState {
    /// Track length along X in px (the output width).
    pub track_length: f32,
    /// `thickness × size_fraction`.
    pub displayed_thickness: f32,
    /// `corner_radius × size_fraction`.
    pub displayed_corner_radius: f32,
}

impl DisplayState {
    #[inline]
    pub fn half_length(&self) -> f32 {
        self.track_length / 2.0
    }
}

/// Canvas setup for one pass, computed without touching a canvas.
///
/// [`apply`](Self::apply) issues, in order: translate to `origin`, the
/// horizontal mirror, the vertical mirror, the grow offset, then the clip.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportFrame {
    /// Track center in the caller's coordinates.
    pub origin: Vec2,
    /// Scale X by −1 (inverse direction).
    pub mirror_x: bool,
    /// Scale Y by −1 (growing from the trailing edge).
    pub mirror_y: bool,
    /// Vertical slide for edge-anchored grow modes; `None` in place.
    pub grow_offset: Option<f32>,
    /// Clip in the transformed frame: the full-size track box.
    pub clip: Rect,
    pub display: DisplayState,
}

impl ViewportFrame {
    pub fn compute(viewport: &ViewportSpec, size_fraction: f32) -> Self {
        let bounds = viewport.bounds;
        let length = bounds.width();
        let height = bounds.height();
        let thickness = viewport.thickness;

        // Taller outputs push the track down so it never rises above the top edge.
        let origin = Vec2::new(
            bounds.origin.x + length / 2.0,
            bounds.origin.y + height / 2.0 + ((height - thickness) / 2.0).max(0.0),
        );

        let grow_offset = viewport
            .grow_mode
            .is_anchored()
            .then(|| thickness * (size_fraction - 1.0) / 2.0);

        Self {
            origin,
            mirror_x: viewport.inverse,
            mirror_y: viewport.grow_mode == GrowMode::FromTrailingEdge,
            grow_offset,
            clip: Rect::from_ltrb(-length / 2.0, -thickness / 2.0, length / 2.0, thickness / 2.0),
            display: DisplayState {
                track_length: length,
                displayed_thickness: thickness * size_fraction,
                displayed_corner_radius: viewport.corner_radius * size_fraction,
            },
        }
    }

    /// Issues the transform and clip operations on `canvas`.
    pub fn apply(&self, canvas: &mut dyn Canvas) {
        canvas.translate(self.origin.x, self.origin.y);
        if self.mirror_x {
            canvas.scale(-1.0, 1.0);
        }
        if self.mirror_y {
            canvas.scale(1.0, -1.0);
        }
        if let Some(dy) = self.grow_offset {
            canvas.translate(0.0, dy);
        }
        canvas.clip_rect(self.clip);
    }

    /// The transform [`apply`](Self::apply) pre-concatenates.
    pub fn transform(&self) -> Transform2D {
        let mut t = Transform2D::translation(self.origin.x, self.origin.y);
        if self.mirror_x {
            t.pre_scale(-1.0, 1.0);
        }
        if self.mirror_y {
            t.pre_scale(1.0, -1.0);
        }
        if let Some(dy) = self.grow_offset {
            t.pre_translate(0.0, dy);
        }
        t
    }
}

/// Computes the frame for this pass, applies it to `canvas` and returns the
/// display state for subsequent fills.
pub fn configure(canvas: &mut dyn Canvas, viewport: &ViewportSpec, size_fraction: f32) -> DisplayState {
    let frame = ViewportFrame::compute(viewport, size_fraction);
    frame.apply(canvas);
    log::trace!(
        "track viewport: origin={:?} mirror=({}, {}) grow={:?} display={:?}",
        frame.origin,
        frame.mirror_x,
        frame.mirror_y,
        frame.grow_offset,
        frame.display,
    );
    frame.display
}
