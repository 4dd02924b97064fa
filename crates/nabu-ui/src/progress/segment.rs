use super::viewport::DisplayState;

/// Horizontal extent of a filled run in the track frame.
///
/// `start_x` / `end_x` follow the fraction order, so `start_x > end_x` when
/// the fractions were reversed. Use [`left`](Self::left) / [`right`](Self::right)
/// when an ordered pair is needed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillSpan {
    pub start_x: f32,
    pub end_x: f32,
}

impl FillSpan {
    #[inline]
    pub fn left(&self) -> f32 {
        self.start_x.min(self.end_x)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.start_x.max(self.end_x)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right() - self.left()
    }
}

/// Maps a track fraction to an X position.
///
/// Travel is shortened by one displayed corner radius at each end, so a cap
/// drawn at `f = 0` or `f = 1` sits flush with the track's own cap.
#[inline]
pub fn fraction_to_x(fraction: f32, display: &DisplayState) -> f32 {
    let cr = display.displayed_corner_radius;
    -display.half_length() + cr + fraction * (display.track_length - 2.0 * cr)
}

/// Extent of the run `[start, end]`, or `None` for a zero-length run.
///
/// Fractions are neither clamped nor reordered.
pub fn fill_span(start_fraction: f32, end_fraction: f32, display: &DisplayState) -> Option<FillSpan> {
    if start_fraction == end_fraction {
        return None;
    }
    Some(FillSpan {
        start_x: fraction_to_x(start_fraction, display),
        end_x: fraction_to_x(end_fraction, display),
    })
}

/// Extent of the whole track, inset by the displayed corner radius at both ends.
#[inline]
pub fn full_track_span(display: &DisplayState) -> FillSpan {
    let start_x = -display.half_length() + display.displayed_corner_radius;
    FillSpan { start_x, end_x: -start_x }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(length: f32, cr: f32) -> DisplayState {
        DisplayState { track_length: length, displayed_thickness: 2.0 * cr, displayed_corner_radius: cr }
    }

    // ── fill_span ─────────────────────────────────────────────────────────

    #[test]
    fn equal_fractions_emit_nothing() {
        let d = display(300.0, 5.0);
        for f in [0.0, 0.3, 1.0, 1.7] {
            assert_eq!(fill_span(f, f, &d), None);
        }
    }

    #[test]
    fn full_range_is_flush_with_track_caps() {
        let d = display(300.0, 5.0);
        let span = fill_span(0.0, 1.0, &d).unwrap();
        assert_eq!(span, FillSpan { start_x: -145.0, end_x: 145.0 });
        assert_eq!(span, full_track_span(&d));
    }

    #[test]
    fn quarter_to_three_quarters() {
        // -150 + 5 + f × 290
        let span = fill_span(0.25, 0.75, &display(300.0, 5.0)).unwrap();
        assert_eq!(span.start_x, -72.5);
        assert_eq!(span.end_x, 72.5);
        assert_eq!(span.width(), 145.0);
    }

    #[test]
    fn reversed_fractions_keep_order() {
        let span = fill_span(0.75, 0.25, &display(300.0, 5.0)).unwrap();
        assert_eq!(span.start_x, 72.5);
        assert_eq!(span.end_x, -72.5);
        assert_eq!(span.left(), -72.5);
        assert_eq!(span.right(), 72.5);
    }

    #[test]
    fn square_corners_use_full_length() {
        let span = fill_span(0.0, 0.5, &display(200.0, 0.0)).unwrap();
        assert_eq!(span, FillSpan { start_x: -100.0, end_x: 0.0 });
    }

    #[test]
    fn fractions_are_not_clamped() {
        let d = display(100.0, 0.0);
        assert_eq!(fraction_to_x(-0.5, &d), -100.0);
        assert_eq!(fraction_to_x(1.5, &d), 100.0);
    }

    #[test]
    fn zero_length_track_is_degenerate_but_finite() {
        let span = fill_span(0.0, 1.0, &display(0.0, 0.0)).unwrap();
        assert_eq!(span.width(), 0.0);
    }
}
