//! GPU side of the shading pipeline.
//!
//! WGSL sources live under `render/shaders/`, one module per stage. Each is
//! validated with naga against its bind slot table, and [`ShaderPair`] turns
//! a vertex/fragment pairing into wgpu layouts and a render pipeline.
//!
//! Convention:
//! - Vertex modules expose `vs_main`, fragment modules `fs_main`.
//! - Varyings are `@builtin(position) clip_position` and `@location(0) uv`.
//! - Clip depth is `[0, 1]`.

pub mod bindings;
mod pipeline;
mod shaders;
mod uniforms;

pub use pipeline::{depth_stencil_state, GpuPipeline, PipelineCtx, ShaderPair};
pub use shaders::{validate_all, ShaderError, ShaderId, Stage};
pub use uniforms::{UniformWrite, Uniforms};
