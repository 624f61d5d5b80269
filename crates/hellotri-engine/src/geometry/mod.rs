//! Vertex data, input layout and the vertex buffer.

mod buffer;
mod layout;
mod vertex;

pub use buffer::VertexBuffer;
pub use layout::{InputElement, InputLayout, POSITION_ELEMENT};
pub use vertex::{Vertex, VertexStream, TRIANGLE, VERTEX_STRIDE};
