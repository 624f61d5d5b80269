use winit::dpi::PhysicalSize;

use crate::coords::Viewport;

/// Presentation surface bound to the window, plus its active configuration.
pub struct SwapChain {
    /// Surface bound to the window.
    ///
    /// The surface holds its own `Arc` of the window, so the window outlives it.
    surface: wgpu::Surface<'static>,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,

    /// Drawable size in physical pixels.
    size: PhysicalSize<u32>,
}

impl SwapChain {
    pub(crate) fn new(
        surface: wgpu::Surface<'static>,
        device: &wgpu::Device,
        config: wgpu::SurfaceConfiguration,
        size: PhysicalSize<u32>,
    ) -> Self {
        surface.configure(device, &config);

        log::info!(
            "configured swap chain: {}x{} {:?}, {:?}, latency {}",
            config.width,
            config.height,
            config.format,
            config.present_mode,
            config.desired_maximum_frame_latency
        );

        Self { surface, config, size }
    }

    /// Returns the active surface format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Reapplies the active configuration after the surface went out of date.
    pub fn reconfigure(&self, device: &wgpu::Device) {
        log::debug!("reconfiguring outdated swap chain");
        self.surface.configure(device, &self.config);
    }

    /// Acquires the next back buffer.
    ///
    /// Dropping or presenting the returned texture releases it; holding it
    /// prevents acquisition of subsequent frames.
    pub fn acquire(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }
}

/// How the current back buffer is bound as the render output.
///
/// Back buffers rotate every frame under wgpu, so this holds the view
/// description and viewport; the per-frame texture view is derived from it.
#[derive(Debug, Clone)]
pub struct RenderTargetView {
    format: wgpu::TextureFormat,
    viewport: Viewport,
}

impl RenderTargetView {
    /// View over `swap_chain`'s back buffers, with a viewport covering the whole surface.
    pub fn for_swap_chain(swap_chain: &SwapChain) -> Self {
        Self::new(swap_chain.format(), Viewport::covering(swap_chain.size()))
    }

    pub fn new(format: wgpu::TextureFormat, viewport: Viewport) -> Self {
        Self { format, viewport }
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Creates the texture view for an acquired back buffer.
    pub fn view(&self, back_buffer: &wgpu::SurfaceTexture) -> wgpu::TextureView {
        back_buffer.texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("hellotri render target view"),
            format: Some(self.format),
            ..Default::default()
        })
    }
}
