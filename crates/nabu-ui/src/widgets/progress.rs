use nabu_engine::coords::{Rect, Vec2};
use nabu_engine::paint::Color;

use crate::painter::Canvas;
use crate::progress::{DrawingDelegate, LinearDrawingDelegate, Segment, TrackSpec};

/// A non-interactive horizontal progress bar.
///
/// Draws the track, then either the `[0, value]` run or an explicit list of
/// segments (for multi-segment indicators).
///
/// # Example
/// ```rust,ignore
/// ProgressBar::new()
///     .value(0.7)
///     .indicator_color(Color::from_straight(0.1, 0.8, 0.5, 1.0))
///     .track(TrackSpec::new().thickness(6.0).corner_radius(3.0))
/// ```
pub struct ProgressBar {
    /// Current progress in [0, 1].
    value: f32,
    indicator_color: Color,
    delegate: LinearDrawingDelegate,
    /// Appear/disappear animation scalar in [0, 1].
    size_fraction: f32,
    /// Opacity applied to the track color.
    track_alpha: f32,
    segments: Option<Vec<Segment>>,
}

impl ProgressBar {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            indicator_color: Color::from_straight(0.2, 0.65, 1.0, 1.0),
            delegate: LinearDrawingDelegate::new(TrackSpec::new().thickness(6.0).corner_radius(3.0)),
            size_fraction: 1.0,
            track_alpha: 1.0,
            segments: None,
        }
    }

    pub fn value(mut self, v: f32) -> Self { self.value = v.clamp(0.0, 1.0); self }
    pub fn indicator_color(mut self, v: Color) -> Self { self.indicator_color = v; self }
    pub fn track(mut self, v: TrackSpec) -> Self { self.delegate = LinearDrawingDelegate::new(v); self }
    pub fn size_fraction(mut self, v: f32) -> Self { self.size_fraction = v; self }
    pub fn track_alpha(mut self, v: f32) -> Self { self.track_alpha = v; self }
    pub fn segments(mut self, v: Vec<Segment>) -> Self { self.segments = Some(v); self }

    /// Size the bar wants: all available length, preferred thickness.
    pub fn measure(&self, max_length: f32) -> Vec2 {
        let w = self
            .delegate
            .preferred_length()
            .unwrap_or(if max_length.is_finite() { max_length } else { 200.0 });
        Vec2::new(w, self.delegate.preferred_thickness())
    }

    /// Draws the bar into `bounds`. The canvas state is restored afterwards.
    pub fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        canvas.save();
        let display = self.delegate.configure_viewport(canvas, bounds, self.size_fraction);

        // Track
        let track_color = self.delegate.spec().track_color_with_alpha(self.track_alpha);
        self.delegate.fill_full_track(canvas, &display, track_color);

        // Fill
        match &self.segments {
            Some(segments) => {
                for segment in segments {
                    self.delegate.fill_segment(canvas, &display, segment);
                }
            }
            None => {
                let run = Segment::new(0.0, self.value, self.indicator_color);
                self.delegate.fill_segment(canvas, &display, &run);
            }
        }

        canvas.restore();
    }
}

impl Default for ProgressBar { fn default() -> Self { Self::new() } }
