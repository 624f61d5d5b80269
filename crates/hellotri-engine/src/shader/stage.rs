use std::fmt;

/// Programmable pipeline stage a shader entry point is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    /// Fragment stage; called "pixel" to match the entry point naming.
    Pixel,
}

impl ShaderStage {
    /// Entry point name the demo shader file uses for this stage.
    pub const fn default_entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "VShader",
            ShaderStage::Pixel => "PShader",
        }
    }

    pub(crate) fn to_naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Pixel => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Pixel => "pixel",
        })
    }
}
