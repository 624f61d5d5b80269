use std::sync::Arc;

use winit::window::Window;

use crate::error::SetupError;

use super::surface::{choose_alpha_mode, choose_surface_format};
use super::{GpuInit, SwapChain};

/// Owns the wgpu core objects.
///
/// - Instance kept alive for the surface
/// - Device/Queue used for every resource and submission
///
/// The presentation side lives in [`SwapChain`].
pub struct Gpu {
    /// Kept alive for the surface created from it.
    _instance: wgpu::Instance,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue.
    queue: wgpu::Queue,
}

impl Gpu {
    /// Creates a device and a swap chain bound to `window`.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu; this blocks on it.
    pub fn create_with_swap_chain(
        window: Arc<Window>,
        init: &GpuInit,
    ) -> Result<(Gpu, SwapChain), SetupError> {
        pollster::block_on(Self::create_with_swap_chain_async(window, init))
    }

    async fn create_with_swap_chain_async(
        window: Arc<Window>,
        init: &GpuInit,
    ) -> Result<(Gpu, SwapChain), SetupError> {
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Err(SetupError::ZeroSizedSurface {
                width: size.width,
                height: size.height,
            });
        }

        let failed = |what: &str, e: &dyn std::fmt::Display| {
            SetupError::DeviceCreationFailed(format!("{what}: {e}"))
        };

        // Use all backends to allow wgpu to select the optimal platform backend.
        // Debug builds turn on the backend validation layers.
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            flags: wgpu::InstanceFlags::from_build_config(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| failed("failed to create wgpu surface", &e))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| failed("failed to find a suitable GPU adapter", &e))?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("hellotri device"),
                required_features: init.required_features,
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| failed("failed to create wgpu device/queue", &e))?;

        let caps = surface.get_capabilities(&adapter);
        let format = choose_surface_format(&caps.formats, init.prefer_srgb).ok_or_else(|| {
            SetupError::DeviceCreationFailed("no supported surface formats".into())
        })?;
        let alpha_mode = choose_alpha_mode(&caps.alpha_modes, init.alpha_mode);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: init.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };

        let swap_chain = SwapChain::new(surface, &device, config, size);

        let gpu = Gpu {
            _instance: instance,
            device,
            queue,
        };

        Ok((gpu, swap_chain))
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}
