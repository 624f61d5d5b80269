use std::fmt;

use crate::error::RenderError;
use crate::paint::Color;

/// Outcome of starting a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStatus {
    /// A back buffer was acquired; clear/draw/present may follow.
    Ready,
    /// No back buffer this time; the frame is dropped.
    Skipped,
}

/// Immediate-mode command sink driven by the frame loop.
///
/// Per frame the loop calls `begin_frame`, then `clear`, `draw` and `present`
/// exactly once each, in that order.
pub trait FrameTarget {
    fn begin_frame(&mut self) -> Result<FrameStatus, RenderError>;

    /// Clears the whole render target to `color`.
    fn clear(&mut self, color: Color) -> Result<(), RenderError>;

    /// Draws `vertex_count` non-indexed vertices starting at `first_vertex`.
    fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<(), RenderError>;

    /// Submits the frame and hands the back buffer to the display.
    fn present(&mut self) -> Result<(), RenderError>;
}

/// GPU resources released at teardown, in release order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ResourceKind {
    Pipeline,
    VertexStaging,
    VertexBuffer,
    InputLayout,
    InputSignature,
    VertexShader,
    PixelShader,
    RenderTargetView,
    SwapChain,
    Device,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Pipeline => "pipeline",
            ResourceKind::VertexStaging => "vertex staging stream",
            ResourceKind::VertexBuffer => "vertex buffer",
            ResourceKind::InputLayout => "input layout",
            ResourceKind::InputSignature => "input signature",
            ResourceKind::VertexShader => "vertex shader",
            ResourceKind::PixelShader => "pixel shader",
            ResourceKind::RenderTargetView => "render target view",
            ResourceKind::SwapChain => "swap chain",
            ResourceKind::Device => "device",
        })
    }
}

/// Something that owns GPU resources and can give them all back at once.
///
/// Consuming `self` makes a second release impossible.
pub trait Release {
    /// Releases every resource and returns what was released, in order.
    fn release(self) -> Vec<ResourceKind>;
}
