//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - fill paint (solid color + anti-aliasing)
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;

/// Paint used to fill geometry.
///
/// Painting is always a fill with a solid color. `anti_alias` asks the
/// rasterizer to supersample edge pixels instead of using a single
/// center sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub anti_alias: bool,
}

impl Paint {
    /// Anti-aliased solid fill.
    #[inline]
    pub fn fill(color: Color) -> Self {
        Self { color, anti_alias: true }
    }

    #[inline]
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}
