use bytemuck::{Pod, Zeroable};

/// Vertex as laid out in the vertex buffer: one clip-space position.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

/// Byte stride of [`Vertex`].
pub const VERTEX_STRIDE: u64 = std::mem::size_of::<Vertex>() as u64;

/// The demo triangle, top vertex first, then clockwise.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex::new(0.0, 0.5, 0.5),
    Vertex::new(0.5, -0.5, 0.5),
    Vertex::new(-0.5, -0.5, 0.5),
];

/// CPU-side vertex bytes a vertex buffer is initialised from.
///
/// Tightly packed, native-endian IEEE-754 floats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexStream {
    bytes: Vec<u8>,
}

impl VertexStream {
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        Self {
            bytes: bytemuck::cast_slice(vertices).to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of whole vertices in the stream.
    pub fn vertex_count(&self) -> u32 {
        (self.bytes.len() as u64 / VERTEX_STRIDE) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_twelve_bytes() {
        assert_eq!(VERTEX_STRIDE, 12);
    }

    #[test]
    fn triangle_stream_holds_the_three_points_in_order() {
        let stream = VertexStream::from_vertices(&TRIANGLE);
        assert_eq!(stream.len(), 36);
        assert_eq!(stream.vertex_count(), 3);
        let read_back: Vec<Vertex> = stream
            .as_bytes()
            .chunks_exact(VERTEX_STRIDE as usize)
            .map(bytemuck::pod_read_unaligned)
            .collect();
        assert_eq!(
            read_back,
            vec![
                Vertex::new(0.0, 0.5, 0.5),
                Vertex::new(0.5, -0.5, 0.5),
                Vertex::new(-0.5, -0.5, 0.5),
            ]
        );
    }

    #[test]
    fn stream_bytes_are_packed_floats() {
        let stream = VertexStream::from_vertices(&TRIANGLE[1..2]);
        let mut expected = Vec::new();
        for v in [0.5f32, -0.5, 0.5] {
            expected.extend_from_slice(&v.to_ne_bytes());
        }
        assert_eq!(stream.as_bytes(), expected.as_slice());
    }

    #[test]
    fn empty_stream() {
        let stream = VertexStream::from_vertices(&[]);
        assert!(stream.is_empty());
        assert_eq!(stream.vertex_count(), 0);
    }
}
