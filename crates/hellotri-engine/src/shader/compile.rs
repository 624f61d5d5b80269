use std::path::{Path, PathBuf};

use naga::valid::{Capabilities, ValidationFlags, Validator};

use crate::error::SetupError;

use super::{InputSignature, ShaderStage};

/// WGSL source text, optionally tied to the file it was read from.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    path: Option<PathBuf>,
    text: String,
}

impl ShaderSource {
    /// Reads a WGSL file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            SetupError::ShaderSourceUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        log::debug!("loaded shader source {} ({} bytes)", path.display(), text.len());
        Ok(Self {
            path: Some(path.to_path_buf()),
            text,
        })
    }

    /// Wraps in-memory WGSL text.
    pub fn from_wgsl(text: impl Into<String>) -> Self {
        Self {
            path: None,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Label used for GPU objects built from this source.
    pub fn label(&self) -> String {
        match &self.path {
            Some(p) => p.display().to_string(),
            None => "<inline wgsl>".to_string(),
        }
    }
}

/// Front-end result for one entry point: validated, reflected, ready for the device.
#[derive(Debug, Clone)]
pub struct CompiledStage {
    pub stage: ShaderStage,
    pub entry_point: String,
    /// Vertex inputs; empty for the pixel stage.
    pub signature: InputSignature,
}

/// Parses and validates `source`, then resolves `entry_point` for `stage`.
///
/// All diagnostics are rendered against the source text so the message
/// points at the offending line.
pub fn compile(
    source: &ShaderSource,
    entry_point: &str,
    stage: ShaderStage,
) -> Result<CompiledStage, SetupError> {
    let failed = |diagnostic: String| SetupError::ShaderCompilationFailed { stage, diagnostic };
    let text = source.text();

    let module = naga::front::wgsl::parse_str(text).map_err(|e| failed(e.emit_to_string(text)))?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| failed(e.emit_to_string(text)))?;

    let Some(ep) = module.entry_points.iter().find(|ep| ep.name == entry_point) else {
        return Err(failed(format!(
            "entry point `{entry_point}` not found in {}",
            source.label()
        )));
    };

    if ep.stage != stage.to_naga() {
        return Err(failed(format!(
            "entry point `{entry_point}` is a {:?} entry point, expected {stage}",
            ep.stage
        )));
    }

    let signature = match stage {
        ShaderStage::Vertex => InputSignature::reflect(&module, &ep.function).map_err(failed)?,
        ShaderStage::Pixel => InputSignature::default(),
    };

    log::debug!(
        "compiled {stage} entry `{entry_point}` ({} vertex inputs)",
        signature.elements().len()
    );

    Ok(CompiledStage {
        stage,
        entry_point: entry_point.to_string(),
        signature,
    })
}
