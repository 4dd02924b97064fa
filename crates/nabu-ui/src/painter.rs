use nabu_engine::coords::{Rect, Transform2D};
use nabu_engine::paint::Paint;
use nabu_engine::scene::{ArcCmd, DrawList};

/// 2-D drawing surface consumed by drawing delegates.
///
/// Transform operations pre-concatenate onto the current matrix, so each call
/// affects the coordinates of everything drawn after it. `save` / `restore`
/// snapshot both the transform and the clip.
///
/// The trait is object-safe; delegates take `&mut dyn Canvas`.
pub trait Canvas {
    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);
    fn scale(&mut self, sx: f32, sy: f32);
    /// Rotates by `degrees`, positive from +X toward +Y.
    fn rotate(&mut self, degrees: f32);

    /// Intersects the current clip with `rect` (local coordinates).
    fn clip_rect(&mut self, rect: Rect);

    /// Fills `rect`. Reversed edges are accepted and drawn using min/max.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);

    /// Fills the pie wedge of the ellipse inscribed in `oval`.
    fn fill_arc(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32, paint: &Paint);
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct CanvasState {
    transform: Transform2D,
    /// Effective clip in device pixels, already intersected with all parents.
    clip: Option<Rect>,
}

/// Recording [`Canvas`] over an engine [`DrawList`].
///
/// Every fill is stored in local coordinates along with the transform and
/// clip current at the time of the call, so the list can be inspected in
/// tests or handed to `nabu_engine::render::Rasterizer`.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    state: CanvasState,
    stack: Vec<CanvasState>,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self {
            draw_list,
            state: CanvasState { transform: Transform2D::IDENTITY, clip: None },
            stack: Vec::new(),
        }
    }

    /// Current local-to-device transform.
    #[inline]
    pub fn transform(&self) -> Transform2D {
        self.state.transform
    }

    /// Current clip in device pixels. `None` = unclipped.
    #[inline]
    pub fn clip(&self) -> Option<Rect> {
        self.state.clip
    }

    /// Number of `save` calls not yet matched by `restore`.
    #[inline]
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }
}

impl Canvas for Painter<'_> {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::debug!("Painter: restore called without matching save"),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.transform.pre_translate(dx, dy);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.state.transform.pre_scale(sx, sy);
    }

    fn rotate(&mut self, degrees: f32) {
        self.state.transform.pre_rotate(degrees);
    }

    fn clip_rect(&mut self, rect: Rect) {
        let device = self.state.transform.map_rect_bounds(rect);
        let effective = match self.state.clip {
            None => device,
            // No overlap with the parent: a zero-area clip makes the
            // rasterizer skip everything drawn under it.
            Some(parent) => parent.intersect(device).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.state.clip = Some(effective);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.draw_list
            .push_rect(rect.normalized(), *paint, self.state.transform, self.state.clip);
    }

    fn fill_arc(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32, paint: &Paint) {
        self.draw_list.push_arc(
            ArcCmd::new(oval, start_angle, sweep_angle, *paint),
            self.state.transform,
            self.state.clip,
        );
    }
}
