//! GPU rendering subsystem.
//!
//! `setup` builds a [`RenderContext`] that owns every GPU object. The context
//! is then moved onto a [`RenderThread`], which runs [`run_frames`] until the
//! exit signal is set, and comes back for [`teardown`].
//!
//! Convention:
//! - Vertex positions are already in clip space; the viewport covers the window.
//! - The render thread never touches the window, only the surface.

mod context;
mod frame_loop;
mod pipeline;
mod signal;
mod target;
mod thread;

use std::sync::Arc;

use winit::window::Window;

use crate::error::SetupError;

pub use context::{RenderContext, SetupOptions, RELEASE_ORDER};
pub use frame_loop::{run_frames, FrameLoopConfig, LoopStats, CLEAR_COLOR, FRAME_INTERVAL};
pub use signal::ExitSignal;
pub use target::{FrameStatus, FrameTarget, Release, ResourceKind};
pub use thread::{teardown, RenderThread, TeardownReport};

/// Builds the full render context for `window`.
pub fn setup(window: Arc<Window>, options: &SetupOptions) -> Result<RenderContext, SetupError> {
    RenderContext::setup(window, options)
}
