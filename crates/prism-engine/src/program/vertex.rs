use glam::{Mat4, Vec2};

use crate::camera::Camera;
use crate::coords::Viewport;
use crate::mesh::{Vertex2d, Vertex3dUv};
use crate::render::ShaderId;
use crate::shade::vertex::{passthrough_2d, transform_3d, transform_3d_uv};
use crate::shade::VertexOutput;

use super::VertexProgram;

/// Clip-space 2D positions, V flipped.
#[derive(Debug, Copy, Clone, Default)]
pub struct ScreenPassthrough;

impl VertexProgram for ScreenPassthrough {
    type Vertex = Vertex2d;
    const SHADER: ShaderId = ShaderId::Screen;

    #[inline]
    fn run(&self, vertex: &Vertex2d) -> VertexOutput {
        passthrough_2d(vertex.position())
    }
}

/// Camera transform for 3D meshes with explicit UVs.
#[derive(Debug, Copy, Clone)]
pub struct MeshTransform {
    pub projection: Mat4,
    pub model_view: Mat4,
}

impl MeshTransform {
    pub fn from_camera(camera: &Camera, viewport: Viewport, model: Mat4) -> Self {
        Self {
            projection: camera.projection_matrix(viewport),
            model_view: camera.model_view(model),
        }
    }
}

impl VertexProgram for MeshTransform {
    type Vertex = Vertex3dUv;
    const SHADER: ShaderId = ShaderId::Mesh3d;

    #[inline]
    fn run(&self, vertex: &Vertex3dUv) -> VertexOutput {
        transform_3d(self.projection, self.model_view, vertex.position(), vertex.uv())
    }
}

/// Camera transform for the unit quad, with a UV transform.
///
/// UVs are derived from the quad position with V flipped, then transformed.
#[derive(Debug, Copy, Clone)]
pub struct QuadTransform {
    pub projection: Mat4,
    pub model_view: Mat4,
    pub uv_transform: Mat4,
}

impl QuadTransform {
    pub fn from_camera(camera: &Camera, viewport: Viewport, model: Mat4) -> Self {
        Self {
            projection: camera.projection_matrix(viewport),
            model_view: camera.model_view(model),
            uv_transform: Mat4::IDENTITY,
        }
    }

    /// Maps the unit quad onto the whole clip rectangle.
    pub fn fullscreen() -> Self {
        let model = Mat4::from_translation(glam::Vec3::new(-1.0, -1.0, 0.0))
            * Mat4::from_scale(glam::Vec3::new(2.0, 2.0, 1.0));
        Self {
            projection: Mat4::IDENTITY,
            model_view: model,
            uv_transform: Mat4::IDENTITY,
        }
    }
}

impl VertexProgram for QuadTransform {
    type Vertex = Vertex2d;
    const SHADER: ShaderId = ShaderId::Quad;

    #[inline]
    fn run(&self, vertex: &Vertex2d) -> VertexOutput {
        let p = vertex.position();
        transform_3d_uv(
            self.projection,
            self.model_view,
            self.uv_transform,
            p.extend(0.0),
            Vec2::new(p.x, 1.0 - p.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    use crate::mesh::QUAD_VERTICES;

    #[test]
    fn fullscreen_quad_covers_clip_rect() {
        let program = QuadTransform::fullscreen();
        let corners: Vec<_> = QUAD_VERTICES.iter().map(|v| program.run(v)).collect();
        assert_eq!(corners[0].clip_position, Vec4::new(-1.0, -1.0, 0.0, 1.0));
        assert_eq!(corners[3].clip_position, Vec4::new(1.0, 1.0, 0.0, 1.0));
        // Bottom-left of the screen samples the bottom row of the texture.
        assert_eq!(corners[0].uv, Vec2::new(0.0, 1.0));
        assert_eq!(corners[3].uv, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn mesh_transform_identity_is_homogeneous_position() {
        let program = MeshTransform { projection: Mat4::IDENTITY, model_view: Mat4::IDENTITY };
        let out = program.run(&Vertex3dUv::new([0.5, 0.25, 0.75], [1.0, 0.0]));
        assert_eq!(out.clip_position, Vec4::new(0.5, 0.25, 0.75, 1.0));
        assert_eq!(out.uv, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn screen_passthrough_flips_v() {
        let out = ScreenPassthrough.run(&Vertex2d::new([0.5, 0.0]));
        assert_eq!(out.uv, Vec2::new(0.5, 1.0));
        assert_eq!(out.clip_position, Vec4::new(0.5, 0.0, 0.0, 1.0));
    }
}
