//! GPU device + swap chain management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swap chain)
//! - describing the render target view over the back buffers
//! - classifying surface errors

mod error;
mod gpu;
mod init;
mod surface;
mod swap_chain;

pub use error::{classify_surface_error, SurfaceErrorAction};
pub use gpu::Gpu;
pub use init::GpuInit;
pub use swap_chain::{RenderTargetView, SwapChain};
