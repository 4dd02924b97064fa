//! Coordinate and geometry types shared across the rasterizer and UI.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are in degrees, measured from +X toward +Y (clockwise on screen).

mod rect;
mod transform;
mod vec2;

pub use rect::Rect;
pub use transform::Transform2D;
pub use vec2::Vec2;
