use crate::error::SetupError;
use crate::shader::InputSignature;

/// Describes one attribute in the vertex buffer.
///
/// WGSL has no semantics; each element is bound to shader location
/// `index` within the layout, so the `n`th element feeds `@location(n)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InputElement {
    pub semantic: &'static str,
    pub format: wgpu::VertexFormat,
    /// Byte offset within one vertex.
    pub offset: u64,
}

/// The single `POSITION` attribute used by the demo triangle.
pub const POSITION_ELEMENT: InputElement = InputElement {
    semantic: "POSITION",
    format: wgpu::VertexFormat::Float32x3,
    offset: 0,
};

/// Vertex buffer layout checked against a vertex stage's input signature.
#[derive(Debug, Clone)]
pub struct InputLayout {
    elements: Vec<InputElement>,
    attributes: Vec<wgpu::VertexAttribute>,
    stride: u64,
}

impl InputLayout {
    /// Builds a layout and checks it covers exactly the inputs the shader reads.
    pub fn new(
        elements: Vec<InputElement>,
        stride: u64,
        signature: &InputSignature,
    ) -> Result<Self, SetupError> {
        let mismatch = |msg: String| SetupError::InputLayoutMismatch(msg);

        let mut attributes = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let location = index as u32;

            let Some(expected) = signature.get(location) else {
                return Err(mismatch(format!(
                    "{} is bound to location {location}, which the shader does not read",
                    element.semantic
                )));
            };
            if expected.format != element.format {
                return Err(mismatch(format!(
                    "{} is {:?} but shader input `{}` expects {:?}",
                    element.semantic, element.format, expected.name, expected.format
                )));
            }
            if element.offset + element.format.size() > stride {
                return Err(mismatch(format!(
                    "{} overruns the {stride}-byte vertex stride",
                    element.semantic
                )));
            }

            attributes.push(wgpu::VertexAttribute {
                format: element.format,
                offset: element.offset,
                shader_location: location,
            });
        }

        if let Some(unfed) = signature
            .elements()
            .iter()
            .find(|e| e.location as usize >= elements.len())
        {
            return Err(mismatch(format!(
                "shader input `{}` at location {} has no matching element",
                unfed.name, unfed.location
            )));
        }

        Ok(Self {
            elements,
            attributes,
            stride,
        })
    }

    pub fn elements(&self) -> &[InputElement] {
        &self.elements
    }

    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Layout descriptor for pipeline creation.
    pub fn buffer_layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::VERTEX_STRIDE;
    use crate::shader::SignatureElement;

    fn position_signature(format: wgpu::VertexFormat) -> InputSignature {
        InputSignature::new(vec![SignatureElement {
            name: "position".into(),
            location: 0,
            format,
        }])
    }

    #[test]
    fn position_layout_matches_triangle_shader() {
        let sig = position_signature(wgpu::VertexFormat::Float32x3);
        let layout = InputLayout::new(vec![POSITION_ELEMENT], VERTEX_STRIDE, &sig).unwrap();

        let desc = layout.buffer_layout();
        assert_eq!(desc.array_stride, 12);
        assert_eq!(desc.attributes.len(), 1);
        assert_eq!(desc.attributes[0].shader_location, 0);
        assert_eq!(desc.attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(layout.elements()[0].semantic, "POSITION");
    }

    #[test]
    fn format_mismatch_is_rejected() {
        let sig = position_signature(wgpu::VertexFormat::Float32x4);
        let err = InputLayout::new(vec![POSITION_ELEMENT], VERTEX_STRIDE, &sig).unwrap_err();
        assert!(matches!(err, SetupError::InputLayoutMismatch(_)));
        assert!(err.to_string().contains("position"));
    }

    #[test]
    fn extra_element_is_rejected() {
        let sig = position_signature(wgpu::VertexFormat::Float32x3);
        let extra = InputElement {
            semantic: "COLOR",
            format: wgpu::VertexFormat::Float32x3,
            offset: 12,
        };
        let err = InputLayout::new(vec![POSITION_ELEMENT, extra], 24, &sig).unwrap_err();
        assert!(err.to_string().contains("COLOR"));
    }

    #[test]
    fn unfed_shader_input_is_rejected() {
        let err = InputLayout::new(vec![], VERTEX_STRIDE, &position_signature(wgpu::VertexFormat::Float32x3))
            .unwrap_err();
        assert!(err.to_string().contains("no matching element"));
    }

    #[test]
    fn stride_overrun_is_rejected() {
        let sig = position_signature(wgpu::VertexFormat::Float32x3);
        assert!(InputLayout::new(vec![POSITION_ELEMENT], 8, &sig).is_err());
    }
}
