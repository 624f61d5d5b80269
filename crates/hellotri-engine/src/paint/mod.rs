//! Color representation shared by the frame loop and the device layer.

pub mod color;

pub use color::Color;
