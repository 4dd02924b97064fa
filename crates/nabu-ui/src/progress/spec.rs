use nabu_engine::coords::Rect;
use nabu_engine::paint::Color;

/// How the track's thickness animates relative to a fixed edge.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum GrowMode {
    /// Scales in place around the centerline.
    #[default]
    None,
    /// Grows out of the leading (top) edge.
    FromLeadingEdge,
    /// Grows out of the trailing (bottom) edge; the canvas is flipped vertically.
    FromTrailingEdge,
}

impl GrowMode {
    /// Returns `true` when the bar slides in from one edge as it grows.
    #[inline]
    pub fn is_anchored(self) -> bool {
        matches!(self, GrowMode::FromLeadingEdge | GrowMode::FromTrailingEdge)
    }
}

/// Track configuration supplied by the host.
///
/// Invariants expected from the caller (not enforced):
/// - `thickness >= 0`
/// - `corner_radius <= thickness / 2`
///
/// # Example
/// ```rust,ignore
/// TrackSpec::new()
///     .thickness(8.0)
///     .corner_radius(4.0)
///     .inverse(true)
///     .grow_mode(GrowMode::FromTrailingEdge)
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrackSpec {
    /// Full track thickness in px.
    pub thickness: f32,
    /// Corner radius in px at full size.
    pub corner_radius: f32,
    pub track_color: Color,
    /// Mirrors start/end horizontally (right-to-left layouts).
    pub inverse: bool,
    pub grow_mode: GrowMode,
}

impl TrackSpec {
    pub fn new() -> Self {
        Self {
            thickness: 4.0,
            corner_radius: 0.0,
            track_color: Color::from_straight(0.15, 0.2, 0.3, 1.0),
            inverse: false,
            grow_mode: GrowMode::None,
        }
    }

    pub fn thickness(mut self, v: f32) -> Self { self.thickness = v; self }
    pub fn corner_radius(mut self, v: f32) -> Self { self.corner_radius = v; self }
    pub fn track_color(mut self, v: Color) -> Self { self.track_color = v; self }
    pub fn inverse(mut self, v: bool) -> Self { self.inverse = v; self }
    pub fn grow_mode(mut self, v: GrowMode) -> Self { self.grow_mode = v; self }

    /// Track color composited with the drawable's current opacity.
    #[inline]
    pub fn track_color_with_alpha(&self, alpha: f32) -> Color {
        self.track_color.with_alpha_scaled(alpha)
    }
}

impl Default for TrackSpec { fn default() -> Self { Self::new() } }

/// Everything the viewport adapter needs for one draw pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportSpec {
    /// Output rectangle in canvas coordinates.
    pub bounds: Rect,
    pub inverse: bool,
    pub grow_mode: GrowMode,
    /// Raw (unscaled) track thickness.
    pub thickness: f32,
    /// Raw (unscaled) corner radius.
    pub corner_radius: f32,
}

impl ViewportSpec {
    pub fn new(bounds: Rect, spec: &TrackSpec) -> Self {
        Self {
            bounds,
            inverse: spec.inverse,
            grow_mode: spec.grow_mode,
            thickness: spec.thickness,
            corner_radius: spec.corner_radius,
        }
    }
}

/// One filled run along the track.
///
/// Fractions are positions along the track in [0, 1]. They are neither
/// clamped nor required to be ordered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start_fraction: f32,
    pub end_fraction: f32,
    pub color: Color,
}

impl Segment {
    #[inline]
    pub fn new(start_fraction: f32, end_fraction: f32, color: Color) -> Self {
        Self { start_fraction, end_fraction, color }
    }

    /// Returns `true` when the segment covers no length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_fraction == self.end_fraction
    }
}
