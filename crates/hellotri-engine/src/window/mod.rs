//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, starts the render thread once the
//! window exists and tears it down when the window closes.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeEvent};
