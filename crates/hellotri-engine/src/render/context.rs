use std::path::PathBuf;
use std::sync::Arc;

use winit::window::Window;

use crate::device::{classify_surface_error, Gpu, GpuInit, RenderTargetView, SurfaceErrorAction, SwapChain};
use crate::error::{RenderError, SetupError};
use crate::geometry::{InputLayout, VertexBuffer, VertexStream, POSITION_ELEMENT, TRIANGLE, VERTEX_STRIDE};
use crate::paint::Color;
use crate::shader::{self, InputSignature, Shader, ShaderSource, ShaderStage};

use super::pipeline::create_pipeline;
use super::target::{FrameStatus, FrameTarget, Release, ResourceKind};

/// Order in which [`RenderContext::release`] drops its resources.
pub const RELEASE_ORDER: [ResourceKind; 10] = [
    ResourceKind::Pipeline,
    ResourceKind::VertexStaging,
    ResourceKind::VertexBuffer,
    ResourceKind::InputLayout,
    ResourceKind::InputSignature,
    ResourceKind::VertexShader,
    ResourceKind::PixelShader,
    ResourceKind::RenderTargetView,
    ResourceKind::SwapChain,
    ResourceKind::Device,
];

/// Inputs to [`RenderContext::setup`].
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// WGSL file holding both entry points.
    pub shader_path: PathBuf,
    pub vertex_entry: String,
    pub pixel_entry: String,
    pub gpu: GpuInit,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            shader_path: PathBuf::from("triangle.wgsl"),
            vertex_entry: ShaderStage::Vertex.default_entry_point().to_string(),
            pixel_entry: ShaderStage::Pixel.default_entry_point().to_string(),
            gpu: GpuInit::default(),
        }
    }
}

/// Frame being recorded between `begin_frame` and `present`.
struct PendingFrame {
    back_buffer: wgpu::SurfaceTexture,
    view: wgpu::TextureView,
    encoder: wgpu::CommandEncoder,
}

/// Every GPU object the demo needs, fully bound and ready to draw.
///
/// Only [`setup`](Self::setup) creates one, so holding a `RenderContext`
/// means the whole pipeline exists.
pub struct RenderContext {
    pipeline: wgpu::RenderPipeline,
    staging: VertexStream,
    vertex_buffer: VertexBuffer,
    input_layout: InputLayout,
    signature: InputSignature,
    vertex_shader: Shader,
    pixel_shader: Shader,
    render_target: RenderTargetView,
    swap_chain: SwapChain,
    gpu: Gpu,

    pending: Option<PendingFrame>,
}

impl RenderContext {
    /// Builds the device, swap chain, shaders, vertex buffer and pipeline for `window`.
    ///
    /// On error everything created so far is dropped before returning.
    /// Validation errors raised by the device while creating shader modules,
    /// the vertex buffer or the pipeline are returned as
    /// [`SetupError::GpuValidationFailed`].
    pub fn setup(window: Arc<Window>, options: &SetupOptions) -> Result<Self, SetupError> {
        log::info!("setting up renderer");

        let (gpu, swap_chain) = Gpu::create_with_swap_chain(window, &options.gpu)?;
        let device = gpu.device();

        let render_target = RenderTargetView::for_swap_chain(&swap_chain);
        log::debug!("viewport {:?}", render_target.viewport());

        let source = ShaderSource::load(&options.shader_path)?;

        let validation = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let vs = shader::compile(&source, &options.vertex_entry, ShaderStage::Vertex)?;
        let vertex_shader = Shader::create(device, &source, &vs);
        let signature = vs.signature;

        let ps = shader::compile(&source, &options.pixel_entry, ShaderStage::Pixel)?;
        let pixel_shader = Shader::create(device, &source, &ps);

        let staging = VertexStream::from_vertices(&TRIANGLE);
        let input_layout = InputLayout::new(vec![POSITION_ELEMENT], VERTEX_STRIDE, &signature)?;
        let vertex_buffer = VertexBuffer::create(device, &staging)?;
        log::debug!(
            "{} vertices, {} input element(s), stride {}",
            vertex_buffer.vertex_count(),
            input_layout.elements().len(),
            input_layout.stride()
        );

        let pipeline = create_pipeline(
            device,
            &vertex_shader,
            &pixel_shader,
            &input_layout,
            &render_target,
        );

        check_validation(pollster::block_on(validation.pop()))?;

        log::info!("renderer ready");

        Ok(Self {
            pipeline,
            staging,
            vertex_buffer,
            input_layout,
            signature,
            vertex_shader,
            pixel_shader,
            render_target,
            swap_chain,
            gpu,
            pending: None,
        })
    }

    fn frame_mut(&mut self, call: &'static str) -> Result<&mut PendingFrame, RenderError> {
        self.pending
            .as_mut()
            .ok_or(RenderError::NoFrameInProgress(call))
    }
}

impl FrameTarget for RenderContext {
    fn begin_frame(&mut self) -> Result<FrameStatus, RenderError> {
        // A frame abandoned by an earlier error is dropped unpresented.
        self.pending = None;

        let back_buffer = match self.swap_chain.acquire() {
            Ok(t) => t,
            Err(err) => {
                return match classify_surface_error(&err) {
                    SurfaceErrorAction::SkipFrame => Ok(FrameStatus::Skipped),
                    SurfaceErrorAction::Reconfigure => {
                        self.swap_chain.reconfigure(self.gpu.device());
                        Ok(FrameStatus::Skipped)
                    }
                    SurfaceErrorAction::Fatal => Err(err.into()),
                };
            }
        };

        let view = self.render_target.view(&back_buffer);
        let encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("hellotri frame encoder"),
            });

        self.pending = Some(PendingFrame {
            back_buffer,
            view,
            encoder,
        });
        Ok(FrameStatus::Ready)
    }

    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        let frame = self.frame_mut("clear")?;

        let _pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("hellotri clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(color.into()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        Ok(())
    }

    fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<(), RenderError> {
        let Some(frame) = self.pending.as_mut() else {
            return Err(RenderError::NoFrameInProgress("draw"));
        };

        let mut pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("hellotri triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let vp = self.render_target.viewport();
        pass.set_pipeline(&self.pipeline);
        pass.set_viewport(vp.x, vp.y, vp.width, vp.height, 0.0, 1.0);
        pass.set_vertex_buffer(0, self.vertex_buffer.buffer().slice(..));
        pass.draw(first_vertex..first_vertex + vertex_count, 0..1);

        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        let frame = self
            .pending
            .take()
            .ok_or(RenderError::NoFrameInProgress("present"))?;

        self.gpu.queue().submit(std::iter::once(frame.encoder.finish()));
        drop(frame.view);
        frame.back_buffer.present();

        Ok(())
    }
}

impl Release for RenderContext {
    fn release(self) -> Vec<ResourceKind> {
        let RenderContext {
            pipeline,
            staging,
            vertex_buffer,
            input_layout,
            signature,
            vertex_shader,
            pixel_shader,
            render_target,
            swap_chain,
            gpu,
            pending,
        } = self;

        drop(pending);

        let mut released = Vec::with_capacity(RELEASE_ORDER.len());
        release_one(&mut released, ResourceKind::Pipeline, pipeline);
        release_one(&mut released, ResourceKind::VertexStaging, staging);
        release_one(&mut released, ResourceKind::VertexBuffer, vertex_buffer);
        release_one(&mut released, ResourceKind::InputLayout, input_layout);
        release_one(&mut released, ResourceKind::InputSignature, signature);
        release_one(&mut released, ResourceKind::VertexShader, vertex_shader);
        release_one(&mut released, ResourceKind::PixelShader, pixel_shader);
        release_one(&mut released, ResourceKind::RenderTargetView, render_target);
        release_one(&mut released, ResourceKind::SwapChain, swap_chain);
        release_one(&mut released, ResourceKind::Device, gpu);

        debug_assert_eq!(released, RELEASE_ORDER);
        released
    }
}

/// Maps an error captured by the setup error scope to a setup failure.
fn check_validation(captured: Option<wgpu::Error>) -> Result<(), SetupError> {
    match captured {
        None => Ok(()),
        Some(err) => Err(SetupError::GpuValidationFailed(err.to_string())),
    }
}

fn release_one<T>(released: &mut Vec<ResourceKind>, kind: ResourceKind, resource: T) {
    drop(resource);
    log::debug!("released {kind}");
    released.push(kind);
}
