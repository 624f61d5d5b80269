use crate::device::RenderTargetView;
use crate::geometry::InputLayout;
use crate::shader::Shader;

/// Builds the fixed pipeline: one vertex buffer, triangle list, no blending, no depth.
pub(crate) fn create_pipeline(
    device: &wgpu::Device,
    vertex_shader: &Shader,
    pixel_shader: &Shader,
    input_layout: &InputLayout,
    target: &RenderTargetView,
) -> wgpu::RenderPipeline {
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("hellotri pipeline layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("hellotri triangle pipeline"),
        layout: Some(&pipeline_layout),

        vertex: wgpu::VertexState {
            module: vertex_shader.module(),
            entry_point: Some(vertex_shader.entry_point()),
            compilation_options: Default::default(),
            buffers: &[input_layout.buffer_layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: pixel_shader.module(),
            entry_point: Some(pixel_shader.entry_point()),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: target.format(),
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}
