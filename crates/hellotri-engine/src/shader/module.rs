use super::{CompiledStage, ShaderSource};

/// A compiled shader stage resident on the device.
pub struct Shader {
    entry_point: String,
    module: wgpu::ShaderModule,
}

impl Shader {
    /// Uploads `source` to the device for the already-validated `compiled` stage.
    pub fn create(device: &wgpu::Device, source: &ShaderSource, compiled: &CompiledStage) -> Self {
        let label = format!("hellotri {} shader ({})", compiled.stage, source.label());
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&label),
            source: wgpu::ShaderSource::Wgsl(source.text().into()),
        });

        Self {
            entry_point: compiled.entry_point.clone(),
            module,
        }
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn module(&self) -> &wgpu::ShaderModule {
        &self.module
    }
}
