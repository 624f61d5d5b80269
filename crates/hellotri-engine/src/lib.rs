//! Hello-triangle engine crate.
//!
//! Opens a window, builds a fixed wgpu pipeline and draws one yellow
//! triangle per frame on a dedicated render thread.

pub mod device;
pub mod window;
pub mod time;

pub mod error;
pub mod logging;
pub mod coords;
pub mod geometry;
pub mod paint;
pub mod render;
pub mod shader;

pub use error::{RenderError, SetupError};
