//! Shader compilation.
//!
//! WGSL is parsed and validated on the CPU first so that compile errors
//! surface as `SetupError::ShaderCompilationFailed` with a readable
//! diagnostic, and the vertex stage's input signature can be reflected
//! before any pipeline is built. Only validated sources reach the device.

mod compile;
mod module;
mod signature;
mod stage;

pub use compile::{compile, CompiledStage, ShaderSource};
pub use module::Shader;
pub use signature::{InputSignature, SignatureElement};
pub use stage::ShaderStage;
