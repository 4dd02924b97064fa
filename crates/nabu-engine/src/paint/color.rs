/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from a packed `0xAARRGGBB` value.
    #[inline]
    pub fn from_argb_u32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_srgb_u8(r, g, b, a)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha 8-bit channels, rounded to nearest.
    pub fn to_rgba8(self) -> [u8; 4] {
        let (r, g, b, a) = self.clamped().to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }

    /// Multiplies the color's opacity by `alpha` (clamped to [0, 1]).
    ///
    /// Used to composite a configured color with a host-supplied opacity,
    /// e.g. a fading drawable.
    #[inline]
    pub fn with_alpha_scaled(self, alpha: f32) -> Self {
        let k = alpha.clamp(0.0, 1.0);
        Self { r: self.r * k, g: self.g * k, b: self.b * k, a: self.a * k }
    }

    /// Source-over composite of `self` onto `dst`, with `self` weighted by `coverage`.
    #[inline]
    pub fn over(self, dst: Color, coverage: f32) -> Color {
        let src = self.with_alpha_scaled(coverage);
        let k = 1.0 - src.a;
        Color {
            r: src.r + dst.r * k,
            g: src.g + dst.g * k,
            b: src.b + dst.b * k,
            a: src.a + dst.a * k,
        }
    }

    /// Clamps all channels to [0, 1] and enforces premultiplication.
    #[inline]
    pub fn clamped(self) -> Self {
        let a = self.a.clamp(0.0, 1.0);

        // Clamp premultiplied rgb so it cannot exceed alpha.
        let r = self.r.clamp(0.0, a);
        let g = self.g.clamp(0.0, a);
        let b = self.b.clamp(0.0, a);

        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_unpacks_channels() {
        let c = Color::from_argb_u32(0xFF_FF_00_00);
        assert_eq!(c, Color::from_premul(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::from_argb_u32(0x00_12_34_56), Color::transparent());
    }

    #[test]
    fn alpha_scaling_keeps_premultiplication() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 1.0).with_alpha_scaled(0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
        assert_eq!(c.to_straight(), (1.0, 0.5, 0.0, 0.5));
    }

    #[test]
    fn alpha_scaling_is_clamped() {
        let c = Color::from_straight(0.2, 0.4, 0.6, 1.0);
        assert_eq!(c.with_alpha_scaled(3.0), c);
        assert_eq!(c.with_alpha_scaled(-1.0).a, 0.0);
    }

    #[test]
    fn opaque_over_replaces_destination() {
        let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
        let blue = Color::from_straight(0.0, 0.0, 1.0, 1.0);
        assert_eq!(red.over(blue, 1.0), red);
        assert_eq!(red.over(blue, 0.0), blue);
    }

    #[test]
    fn rgba8_is_straight_alpha() {
        let c = Color::from_straight(1.0, 0.0, 0.0, 0.5);
        assert_eq!(c.to_rgba8(), [255, 0, 0, 128]);
    }
}
