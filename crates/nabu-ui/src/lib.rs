//! Nabu UI: progress-track drawing on top of `nabu-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use nabu_ui::prelude::*;
//!
//! let mut list = DrawList::new();
//! let mut painter = Painter::new(&mut list);
//!
//! ProgressBar::new()
//!     .value(0.4)
//!     .track(TrackSpec::new().thickness(8.0).corner_radius(4.0))
//!     .paint(&mut painter, Rect::new(0.0, 0.0, 320.0, 8.0));
//!
//! // Hand `list` to `nabu_engine::render::Rasterizer`.
//! ```
//!
//! # Custom indicator shapes
//!
//! Implement [`DrawingDelegate`](progress::DrawingDelegate) for a new shape;
//! it only needs a [`Canvas`](painter::Canvas) that can fill rects and arcs.

pub mod painter;
pub mod progress;
pub mod widgets;

/// Everything needed to configure and draw a progress track.
pub mod prelude {
    pub use crate::painter::{Canvas, Painter};
    pub use crate::progress::{
        DisplayState, DrawingDelegate, GrowMode, LinearDrawingDelegate, Segment, TrackSpec,
        ViewportSpec,
    };
    pub use crate::widgets::progress::ProgressBar;

    // Re-export the engine primitives everyone needs.
    pub use nabu_engine::coords::{Rect, Vec2};
    pub use nabu_engine::paint::{Color, Paint};
    pub use nabu_engine::scene::DrawList;
}
