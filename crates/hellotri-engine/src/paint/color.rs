/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Channels are written to the render target as-is; no colour-space
/// conversion happens on the CPU side.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(0.5, 0.5, 1.0), Color::new(0.5, 0.5, 1.0, 1.0));
    }

    #[test]
    fn converts_to_wgpu_without_rescaling() {
        let c: wgpu::Color = Color::rgb(0.5, 0.25, 1.0).into();
        assert_eq!((c.r, c.g, c.b, c.a), (0.5, 0.25, 1.0, 1.0));
    }
}
