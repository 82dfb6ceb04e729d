//! Color model shared by the CPU formulas, the rasterizer and GPU uniforms.

pub mod color;

pub use color::Rgba;
