use crate::coords::{Rect, Transform2D};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint) -> Self {
        Self { rect, paint }
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(
        &mut self,
        rect: Rect,
        paint: Paint,
        transform: Transform2D,
        clip_rect: Option<Rect>,
    ) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, paint)), transform, clip_rect);
    }
}
