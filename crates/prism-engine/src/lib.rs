//! Prism engine crate.
//!
//! Shading formulas for a small real-time pipeline: gamma, depth
//! linearization, depth-derivative edges, antialiased SDF circles and the
//! vertex transforms that feed them. Each formula exists twice, as a pure CPU
//! function under [`shade`] and as a WGSL module under [`render`]; the
//! [`raster`] module runs the CPU side over 2×2 quads so both can be compared
//! pixel for pixel.

pub mod camera;
pub mod coords;
pub mod error;
pub mod logging;
pub mod mesh;
pub mod paint;
pub mod program;
pub mod raster;
pub mod render;
pub mod shade;

pub use error::ConfigError;
