use wgpu::util::DeviceExt;

use crate::error::SetupError;

use super::VertexStream;

/// Immutable GPU vertex buffer.
///
/// Created with `VERTEX` usage only: no CPU mapping and no copy destination,
/// so the contents never change after creation.
pub struct VertexBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl VertexBuffer {
    pub fn create(device: &wgpu::Device, stream: &VertexStream) -> Result<Self, SetupError> {
        check_size(stream.len() as u64, device.limits().max_buffer_size)?;

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("hellotri vertex buffer"),
            contents: stream.as_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!(
            "created vertex buffer: {} vertices, {} bytes",
            stream.vertex_count(),
            stream.len()
        );

        Ok(Self {
            buffer,
            vertex_count: stream.vertex_count(),
        })
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

fn check_size(len: u64, max: u64) -> Result<(), SetupError> {
    if len == 0 {
        return Err(SetupError::BufferCreationFailed("vertex data is empty".into()));
    }
    if len > max {
        return Err(SetupError::BufferCreationFailed(format!(
            "{len} bytes exceeds the device limit of {max} bytes"
        )));
    }
    Ok(())
}
