//! CPU rendering subsystem.
//!
//! The rasterizer consumes `scene` draw streams and writes premultiplied
//! pixels into a [`Pixmap`].
//!
//! Convention:
//! - Device pixel `(x, y)` covers the square `[x, x+1) × [y, y+1)`.
//! - Commands are tested in their local space through the inverse of the
//!   recorded transform, so any affine transform renders correctly.

mod pixmap;
mod raster;

pub use pixmap::Pixmap;
pub use raster::Rasterizer;
