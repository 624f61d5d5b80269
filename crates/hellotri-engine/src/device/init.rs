/// Device and swap chain parameters used by setup.
///
/// Defaults suit the single-triangle demo: a free-running, double-buffered,
/// UNORM swap chain on the high-performance adapter.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default: the clear colour and shader outputs are authored as
    /// plain UNORM values and should reach the screen unconverted.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// `AutoNoVsync` presents without waiting for vertical blank where the
    /// platform allows it and silently falls back to FIFO otherwise.
    pub present_mode: wgpu::PresentMode,

    /// Requested compositing alpha mode.
    ///
    /// `None`, or a mode the surface does not offer, falls back to the first supported one.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Which adapter to ask for when several are present.
    pub power_preference: wgpu::PowerPreference,

    /// Features the device must expose. The pipeline needs none.
    pub required_features: wgpu::Features,

    /// Device limits; the vertex buffer size is checked against `max_buffer_size`.
    pub required_limits: wgpu::Limits,

    /// Back buffers the surface may queue ahead of the display.
    ///
    /// Two matches a double-buffered swap chain.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::AutoNoVsync,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_free_run_and_double_buffer() {
        let init = GpuInit::default();
        assert_eq!(init.present_mode, wgpu::PresentMode::AutoNoVsync);
        assert_eq!(init.desired_maximum_frame_latency, 2);
        assert!(!init.prefer_srgb);
        assert!(init.required_features.is_empty());
    }
}
