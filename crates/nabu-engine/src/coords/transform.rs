use kurbo::{Affine, Point};

use super::{Rect, Vec2};

/// 2-D affine transform in logical pixel space, backed by [`kurbo::Affine`].
///
/// Coefficients follow kurbo's `[a, b, c, d, e, f]` layout, so that
/// `x' = a·x + c·y + e` and `y' = b·x + d·y + f`.
///
/// Canvas-style operations (`pre_translate`, `pre_scale`, `pre_rotate`) are
/// pre-concatenated: the new operation acts on local coordinates first, then
/// the existing transform maps the result to device space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D(Affine);

impl Transform2D {
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    #[inline]
    pub fn translation(dx: f32, dy: f32) -> Self {
        Self(Affine::translate((dx as f64, dy as f64)))
    }

    #[inline]
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self(Affine::scale_non_uniform(sx as f64, sy as f64))
    }

    /// Rotation by `degrees`, positive from +X toward +Y.
    ///
    /// Multiples of 90° produce exact matrices (no `sin(π)` residue), so a
    /// half-turn maps axis-aligned geometry onto axis-aligned geometry exactly.
    pub fn rotation(degrees: f32) -> Self {
        let quarter_turns = degrees / 90.0;
        if quarter_turns.fract() != 0.0 || !quarter_turns.is_finite() {
            return Self(Affine::rotate((degrees as f64).to_radians()));
        }
        let (sin, cos) = match (quarter_turns as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        };
        Self(Affine::new([cos, sin, -sin, cos, 0.0, 0.0]))
    }

    /// Returns `self × local`: `local` is applied first, then `self`.
    #[inline]
    pub fn concat(&self, local: &Transform2D) -> Transform2D {
        Self(self.0 * local.0)
    }

    #[inline]
    pub fn pre_translate(&mut self, dx: f32, dy: f32) {
        *self = self.concat(&Self::translation(dx, dy));
    }

    #[inline]
    pub fn pre_scale(&mut self, sx: f32, sy: f32) {
        *self = self.concat(&Self::scale(sx, sy));
    }

    #[inline]
    pub fn pre_rotate(&mut self, degrees: f32) {
        *self = self.concat(&Self::rotation(degrees));
    }

    /// Maps a local point to the transformed space.
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        let q = self.0 * Point::new(p.x as f64, p.y as f64);
        Vec2::new(q.x as f32, q.y as f32)
    }

    /// Inverse transform, or `None` when the matrix is singular (e.g. a zero scale).
    pub fn inverse(&self) -> Option<Transform2D> {
        let det = self.0.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(Self(self.0.inverse()))
    }

    /// Axis-aligned bounds of `rect` after transformation.
    pub fn map_rect_bounds(&self, rect: Rect) -> Rect {
        let (min, max) = (rect.min(), rect.max());
        let local = kurbo::Rect::new(min.x as f64, min.y as f64, max.x as f64, max.y as f64);
        let b = self.0.transform_rect_bbox(local.abs());
        Rect::from_ltrb(b.x0 as f32, b.y0 as f32, b.x1 as f32, b.y1 as f32)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn quarter_turn_rotates_x_onto_y() {
        let t = Transform2D::rotation(90.0);
        assert_eq!(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn half_turn_is_exact() {
        let t = Transform2D::rotation(180.0);
        assert_eq!(t, Transform2D::scale(-1.0, -1.0));
        assert_eq!(Transform2D::rotation(-180.0), t);
    }

    #[test]
    fn arbitrary_rotation_uses_trig() {
        let t = Transform2D::rotation(45.0);
        let h = core::f32::consts::FRAC_1_SQRT_2;
        assert!(approx(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(h, h)));
    }

    // ── concatenation ─────────────────────────────────────────────────────

    #[test]
    fn pre_ops_apply_to_local_coordinates_first() {
        let mut t = Transform2D::IDENTITY;
        t.pre_translate(100.0, 20.0);
        t.pre_scale(-1.0, 1.0);
        // Local (10, 0) is mirrored first, then translated.
        assert_eq!(t.apply(Vec2::new(10.0, 0.0)), Vec2::new(90.0, 20.0));
    }

    #[test]
    fn concat_with_identity_is_noop() {
        let t = Transform2D::translation(3.0, 4.0).concat(&Transform2D::rotation(30.0));
        assert_eq!(t.concat(&Transform2D::IDENTITY), t);
        assert_eq!(Transform2D::IDENTITY.concat(&t), t);
    }

    // ── inverse ───────────────────────────────────────────────────────────

    #[test]
    fn inverse_round_trips_point() {
        let mut t = Transform2D::translation(12.0, -3.0);
        t.pre_rotate(30.0);
        t.pre_scale(2.0, -0.5);
        let inv = t.inverse().unwrap();
        let p = Vec2::new(7.0, 11.0);
        assert!(approx(inv.apply(t.apply(p)), p));
    }

    #[test]
    fn zero_scale_is_singular() {
        assert!(Transform2D::scale(0.0, 1.0).inverse().is_none());
    }

    // ── map_rect_bounds ───────────────────────────────────────────────────

    #[test]
    fn mirrored_rect_bounds_stay_ordered() {
        let t = Transform2D::scale(-1.0, 1.0);
        let b = t.map_rect_bounds(Rect::new(2.0, 0.0, 3.0, 4.0));
        assert_eq!(b, Rect::new(-5.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn reversed_rect_maps_like_its_normalized_form() {
        let t = Transform2D::translation(1.0, 1.0);
        let reversed = Rect::from_ltrb(5.0, 0.0, 2.0, 4.0);
        assert_eq!(t.map_rect_bounds(reversed), Rect::new(3.0, 1.0, 3.0, 4.0));
    }
}
