//! CPU shader programs.
//!
//! Each program here has a WGSL twin in `render/shaders/` and computes the
//! same values. Vertex programs run once per vertex; fragment programs run
//! once per 2×2 quad so they can take screen-space derivatives.

mod materials;
mod vertex;

pub use materials::{DepthEdge, Present, SdfCircleFill, Textured, UniformFill};
pub use vertex::{MeshTransform, QuadTransform, ScreenPassthrough};

use crate::paint::Rgba;
use crate::raster::{BlendMode, FragmentQuad, Quad};
use crate::render::ShaderId;
use crate::shade::VertexOutput;

pub trait VertexProgram {
    type Vertex: Copy;

    /// WGSL module implementing the same transform.
    const SHADER: ShaderId;

    fn run(&self, vertex: &Self::Vertex) -> VertexOutput;

    /// Module this instance runs as.
    fn module(&self) -> ShaderId {
        Self::SHADER
    }
}

pub trait FragmentProgram {
    /// WGSL module implementing the same formula. Programs whose module
    /// depends on their configuration report it through [`module`](Self::module).
    const SHADER: ShaderId;

    /// Module this instance runs as.
    fn module(&self) -> ShaderId {
        Self::SHADER
    }

    /// Shades all four lanes; only covered lanes are written.
    fn run(&self, quad: &FragmentQuad) -> Quad<Rgba>;

    /// Output merge. Materials alpha-blend unless they say otherwise.
    fn blend(&self) -> BlendMode {
        BlendMode::Alpha
    }
}
