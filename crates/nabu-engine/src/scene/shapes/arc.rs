use crate::coords::{Rect, Transform2D, Vec2};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

/// Filled pie-wedge draw payload.
///
/// The wedge is bounded by the ellipse inscribed in `oval` and by the two
/// radii at `start_angle` and `start_angle + sweep_angle`. Angles are in
/// degrees, measured from +X toward +Y; a negative sweep runs the other way.
/// A sweep of 360° or more fills the whole ellipse.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub oval: Rect,
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub paint: Paint,
}

impl ArcCmd {
    #[inline]
    pub fn new(oval: Rect, start_angle: f32, sweep_angle: f32, paint: Paint) -> Self {
        Self { oval, start_angle, sweep_angle, paint }
    }

    /// Returns `true` if local point `p` lies inside the wedge.
    pub fn contains(&self, p: Vec2) -> bool {
        let oval = self.oval.normalized();
        let rx = oval.size.x * 0.5;
        let ry = oval.size.y * 0.5;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }

        let c = oval.center();
        let nx = (p.x - c.x) / rx;
        let ny = (p.y - c.y) / ry;
        if nx * nx + ny * ny > 1.0 {
            return false;
        }

        let span = self.sweep_angle.abs();
        if span >= 360.0 {
            return true;
        }
        let from = if self.sweep_angle >= 0.0 {
            self.start_angle
        } else {
            self.start_angle + self.sweep_angle
        };
        let angle = ny.atan2(nx).to_degrees();
        (angle - from).rem_euclid(360.0) <= span
    }
}

impl DrawList {
    /// Records a filled arc (pie wedge) draw command.
    #[inline]
    pub fn push_arc(
        &mut self,
        arc: ArcCmd,
        transform: Transform2D,
        clip_rect: Option<Rect>,
    ) {
        self.push(DrawCmd::Arc(arc), transform, clip_rect);
    }
}
