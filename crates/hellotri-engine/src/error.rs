//! Error types.
//!
//! Setup failures are fatal: nothing is retried and no partially built
//! pipeline is ever presented. Frame-time failures stop the render loop.

use std::path::PathBuf;

use thiserror::Error;

use crate::shader::ShaderStage;

/// Failure while building the rendering pipeline.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("window surface has zero size ({width}x{height})")]
    ZeroSizedSurface { width: u32, height: u32 },

    #[error("device creation failed: {0}")]
    DeviceCreationFailed(String),

    #[error("failed to read shader source {}", path.display())]
    ShaderSourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{stage} shader compilation failed:\n{diagnostic}")]
    ShaderCompilationFailed {
        stage: ShaderStage,
        diagnostic: String,
    },

    #[error("input layout does not match the vertex shader signature: {0}")]
    InputLayoutMismatch(String),

    #[error("buffer creation failed: {0}")]
    BufferCreationFailed(String),

    #[error("device rejected a setup object: {0}")]
    GpuValidationFailed(String),
}

/// Failure while running or stopping the render loop.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("{0} called without a frame in progress")]
    NoFrameInProgress(&'static str),

    #[error("render thread could not be started")]
    Spawn(#[source] std::io::Error),

    #[error("render thread panicked")]
    ThreadPanicked,
}
