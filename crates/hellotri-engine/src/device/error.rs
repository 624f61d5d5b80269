/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Surface must be reconfigured with its unchanged configuration; skip the current frame.
    Reconfigure,
    /// Fatal error; stop rendering.
    Fatal,
}

/// Classifies a surface error.
///
/// `Outdated` shows up when the window is minimized or occluded on some
/// platforms. The window size never changes, so the existing configuration
/// is reapplied.
pub fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigure,
        wgpu::SurfaceError::Lost => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Other => SurfaceErrorAction::Fatal,
    }
}
