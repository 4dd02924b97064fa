//! Linear progress-track geometry.
//!
//! A track is drawn as filled rectangles plus quarter-circle arcs only, so it
//! renders on any [`Canvas`](crate::painter::Canvas) that can fill rects and
//! pie wedges. Per draw pass:
//!
//! 1. [`viewport`] centers and orients the canvas on the output bounds and
//!    produces the [`DisplayState`] for the pass.
//! 2. [`segment`] maps start/end fractions to horizontal extents.
//! 3. [`cap`] adds the rounded ends at those extents.
//!
//! [`LinearDrawingDelegate`] ties the three together behind the
//! [`DrawingDelegate`] interface.

pub mod cap;
pub mod delegate;
pub mod linear;
pub mod segment;
pub mod spec;
pub mod viewport;

pub use cap::{ArcGeometry, CapEnd, CapGeometry};
pub use delegate::DrawingDelegate;
pub use linear::LinearDrawingDelegate;
pub use segment::FillSpan;
pub use spec::{GrowMode, Segment, TrackSpec, ViewportSpec};
pub use viewport::{DisplayState, ViewportFrame};
