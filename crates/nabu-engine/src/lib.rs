//! Nabu engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by higher layers:
//! geometry, paint, the recorded draw stream and a CPU rasterizer for it.

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
