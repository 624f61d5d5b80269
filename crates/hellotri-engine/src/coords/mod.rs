//! Screen-space types.
//!
//! Positions fed to the vertex stage are already in clip space; the only
//! CPU-side coordinate type is the rasterizer viewport, in physical pixels.

mod viewport;

pub use viewport::Viewport;
