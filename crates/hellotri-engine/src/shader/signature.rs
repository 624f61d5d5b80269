use naga::{Binding, Module, ScalarKind, TypeInner, VectorSize};

/// One vertex input expected by a compiled vertex stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureElement {
    /// Argument or struct member name in the shader source.
    pub name: String,
    pub location: u32,
    pub format: wgpu::VertexFormat,
}

/// Vertex inputs of a compiled vertex stage, ordered by location.
///
/// Built-in inputs (`vertex_index`, `instance_index`) are not part of the
/// signature; they are not fed from vertex buffers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSignature {
    elements: Vec<SignatureElement>,
}

impl InputSignature {
    pub fn new(mut elements: Vec<SignatureElement>) -> Self {
        elements.sort_by_key(|e| e.location);
        Self { elements }
    }

    pub fn elements(&self) -> &[SignatureElement] {
        &self.elements
    }

    pub fn get(&self, location: u32) -> Option<&SignatureElement> {
        self.elements.iter().find(|e| e.location == location)
    }

    /// Reflects the location-bound inputs of `function` (an entry point).
    ///
    /// Struct-typed arguments contribute their bound members.
    pub(crate) fn reflect(module: &Module, function: &naga::Function) -> Result<Self, String> {
        let mut elements = Vec::new();

        for arg in &function.arguments {
            let name = arg.name.clone().unwrap_or_default();
            match &arg.binding {
                Some(binding) => push_bound(module, &mut elements, name, binding, arg.ty)?,
                None => match &module.types[arg.ty].inner {
                    TypeInner::Struct { members, .. } => {
                        for member in members {
                            let Some(binding) = &member.binding else { continue };
                            let name = member.name.clone().unwrap_or_default();
                            push_bound(module, &mut elements, name, binding, member.ty)?;
                        }
                    }
                    _ => return Err(format!("input `{name}` has no binding")),
                },
            }
        }

        Ok(Self::new(elements))
    }
}

fn push_bound(
    module: &Module,
    out: &mut Vec<SignatureElement>,
    name: String,
    binding: &Binding,
    ty: naga::Handle<naga::Type>,
) -> Result<(), String> {
    let Binding::Location { location, .. } = binding else {
        return Ok(());
    };

    let format = vertex_format(&module.types[ty].inner)
        .ok_or_else(|| format!("input `{name}` at location {location} has no vertex format"))?;

    out.push(SignatureElement {
        name,
        location: *location,
        format,
    });
    Ok(())
}

fn vertex_format(inner: &TypeInner) -> Option<wgpu::VertexFormat> {
    use wgpu::VertexFormat as F;

    let (scalar, size) = match *inner {
        TypeInner::Scalar(scalar) => (scalar, None),
        TypeInner::Vector { size, scalar } => (scalar, Some(size)),
        _ => return None,
    };
    if scalar.width != 4 {
        return None;
    }

    Some(match (scalar.kind, size) {
        (ScalarKind::Float, None) => F::Float32,
        (ScalarKind::Float, Some(VectorSize::Bi)) => F::Float32x2,
        (ScalarKind::Float, Some(VectorSize::Tri)) => F::Float32x3,
        (ScalarKind::Float, Some(VectorSize::Quad)) => F::Float32x4,
        (ScalarKind::Uint, None) => F::Uint32,
        (ScalarKind::Uint, Some(VectorSize::Bi)) => F::Uint32x2,
        (ScalarKind::Uint, Some(VectorSize::Tri)) => F::Uint32x3,
        (ScalarKind::Uint, Some(VectorSize::Quad)) => F::Uint32x4,
        (ScalarKind::Sint, None) => F::Sint32,
        (ScalarKind::Sint, Some(VectorSize::Bi)) => F::Sint32x2,
        (ScalarKind::Sint, Some(VectorSize::Tri)) => F::Sint32x3,
        (ScalarKind::Sint, Some(VectorSize::Quad)) => F::Sint32x4,
        _ => return None,
    })
}
