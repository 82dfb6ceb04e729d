//! Shading formulas, CPU reference implementation.
//!
//! Every function here is pure and mirrors one expression in the WGSL sources
//! under `render/shaders/`. Parameters that could make a formula undefined are
//! validated when their wrapper type is built (`DepthRange`, `Gamma`,
//! `SdfCircle`), never at evaluation time.
//!
//! Derivative-dependent formulas (`edge`, `circle`) take the screen-space
//! derivative as an argument. On the GPU that is `fwidth`; on the CPU it comes
//! from [`crate::raster::Quad`].

pub mod circle;
pub mod depth;
pub mod edge;
pub mod gamma;
mod math;
pub mod vertex;

pub use circle::SdfCircle;
pub use depth::DepthRange;
pub use edge::EdgePreset;
pub use gamma::Gamma;
pub use math::{clamp01, smoothstep};
pub use vertex::VertexOutput;
