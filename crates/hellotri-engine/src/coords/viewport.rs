use winit::dpi::PhysicalSize;

/// Rasterizer viewport in physical pixels, depth range `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }

    /// Viewport covering a whole surface.
    #[inline]
    pub fn covering(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}
