//! Vertex records and built-in geometry.
//!
//! Vertex types are `Pod` and carry their `wgpu` buffer layout so the same
//! slices feed both the software rasterizer and a host GPU pipeline.

mod shapes;
mod vertex;

pub use shapes::{CUBE_INDICES, CUBE_VERTICES, QUAD_INDICES, QUAD_VERTICES};
pub use vertex::{Index, Vertex, Vertex2d, Vertex3dUv};
