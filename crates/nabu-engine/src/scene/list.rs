use crate::coords::{Rect, Transform2D};

use super::DrawCmd;

/// A single draw item: command + transform + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    /// Geometry in local coordinates.
    pub cmd: DrawCmd,
    /// Local-to-device transform current when the command was recorded.
    pub transform: Transform2D,
    /// Scissor rect in device pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

impl DrawItem {
    /// Bounding box of the command in device pixels, ignoring the clip.
    #[inline]
    pub fn device_bounds(&self) -> Rect {
        self.transform.map_rect_bounds(self.cmd.local_bounds())
    }
}

/// Recorded draw stream for a frame.
///
/// Items are kept in insertion order, which is also paint order
/// (back-to-front). `push()` is O(1); `clear()` keeps allocated capacity so
/// a list can be reused across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command recorded under `transform` and `clip_rect`.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd, transform: Transform2D, clip_rect: Option<Rect>) {
        self.items.push(DrawItem { cmd, transform, clip_rect });
    }
}
