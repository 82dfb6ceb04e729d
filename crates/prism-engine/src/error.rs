//! Host-side validation errors.
//!
//! Shading formulas are total over their domain and never return errors.
//! Anything that would make a formula undefined (coincident depth planes,
//! a negative gamma exponent, an empty viewport) is rejected here, when the
//! parameter is constructed, before any vertex or fragment is evaluated.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("depth range is degenerate: near ({near}) == far ({far})")]
    DegenerateDepthRange { near: f32, far: f32 },

    #[error("depth range requires 0 < near < far, got near = {near}, far = {far}")]
    InvalidDepthRange { near: f32, far: f32 },

    #[error("gamma exponent must be finite and positive, got {0}")]
    InvalidGamma(f32),

    #[error("circle radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),

    #[error("viewport must be non-empty, got {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("clear depth must lie in [0, 1], got {0}")]
    InvalidClearDepth(f32),

    #[error("texture data length {actual} does not match {width}x{height}")]
    TextureSizeMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}
