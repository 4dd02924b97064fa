//! Rounded ends built from one bridge rectangle and two quarter-circle wedges.
//!
//! The leading cap is described in its own local frame, with the cap position
//! at the origin and the cap bulging toward −X:
//!
//! ```text
//!        ╭─┐   upper wedge: 180° → 270°
//!        │ │   bridge:      x ∈ [−r, 0], y ∈ [−t/2 + r, t/2 − r]
//!        ╰─┘   lower wedge: 180° → 90°
//! ```
//!
//! The trailing cap reuses the same geometry under a half-turn.

use nabu_engine::coords::{Rect, Vec2};
use nabu_engine::paint::Paint;

use crate::painter::Canvas;

const CORNER_START_ANGLE: f32 = 180.0;
const CORNER_SWEEP_ANGLE: f32 = 90.0;

/// Which end of a run a cap closes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CapEnd {
    /// The start of the run; drawn as described in the local frame.
    Leading,
    /// The end of the run; the local frame is rotated by 180°.
    Trailing,
}

/// A filled quarter-circle wedge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcGeometry {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl ArcGeometry {
    /// Bounding square of the full circle.
    #[inline]
    pub fn oval(&self) -> Rect {
        Rect::from_center_radius(self.center, self.radius)
    }
}

/// Rect + arc decomposition of a leading cap, in the cap's local frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CapGeometry {
    pub bridge: Rect,
    pub upper: ArcGeometry,
    pub lower: ArcGeometry,
}

impl CapGeometry {
    /// Returns `None` when `corner_radius` is zero: square ends need no patch.
    ///
    /// Expects `corner_radius <= thickness / 2`; larger radii produce an
    /// inverted bridge and overlapping wedges.
    pub fn new(thickness: f32, corner_radius: f32) -> Option<Self> {
        if corner_radius == 0.0 {
            return None;
        }

        let inset = thickness / 2.0 - corner_radius;
        let wedge = |center_y: f32, sweep: f32| ArcGeometry {
            center: Vec2::new(0.0, center_y),
            radius: corner_radius,
            start_angle: CORNER_START_ANGLE,
            sweep_angle: sweep,
        };

        Some(Self {
            bridge: Rect::from_ltrb(-corner_radius, -inset, 0.0, inset),
            upper: wedge(-inset, CORNER_SWEEP_ANGLE),
            lower: wedge(inset, -CORNER_SWEEP_ANGLE),
        })
    }

    /// Fills the decomposition into `canvas`'s current frame.
    pub fn fill(&self, canvas: &mut dyn Canvas, paint: &Paint) {
        canvas.fill_rect(self.bridge, paint);
        for arc in [self.upper, self.lower] {
            canvas.fill_arc(arc.oval(), arc.start_angle, arc.sweep_angle, paint);
        }
    }
}

/// Draws the rounded patch for one end of a run located at `x`.
///
/// Emits nothing when `corner_radius` is zero.
pub fn emit_cap(
    canvas: &mut dyn Canvas,
    thickness: f32,
    corner_radius: f32,
    x: f32,
    end: CapEnd,
    paint: &Paint,
) {
    let Some(geometry) = CapGeometry::new(thickness, corner_radius) else { return; };

    canvas.save();
    canvas.translate(x, 0.0);
    if end == CapEnd::Trailing {
        canvas.rotate(180.0);
    }
    geometry.fill(canvas, paint);
    canvas.restore();
}
