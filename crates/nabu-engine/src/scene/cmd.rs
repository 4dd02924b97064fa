use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::shapes::arc::ArcCmd;
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::Rasterizer` how to cover it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Arc(ArcCmd),
}

impl DrawCmd {
    /// Bounding box in the command's local coordinates.
    pub fn local_bounds(&self) -> Rect {
        match self {
            DrawCmd::Rect(cmd) => cmd.rect.normalized(),
            DrawCmd::Arc(cmd) => cmd.oval.normalized(),
        }
    }

    #[inline]
    pub fn paint(&self) -> &Paint {
        match self {
            DrawCmd::Rect(cmd) => &cmd.paint,
            DrawCmd::Arc(cmd) => &cmd.paint,
        }
    }
}
