//! Vertex-stage transforms.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Varyings handed from a vertex stage to the paired fragment stage.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct VertexOutput {
    /// Texture coordinate, typically in `[0, 1]²`.
    pub uv: Vec2,
    /// Homogeneous clip-space position.
    pub clip_position: Vec4,
}

/// 2D passthrough: the position is already in clip space; V is flipped so the
/// bottom-up position maps onto a top-down texture.
#[inline]
pub fn passthrough_2d(position: Vec2) -> VertexOutput {
    VertexOutput {
        uv: Vec2::new(position.x, 1.0 - position.y),
        clip_position: Vec4::new(position.x, position.y, 0.0, 1.0),
    }
}

/// `projection · model_view · (position, 1)`, UV passed through.
#[inline]
pub fn transform_3d(projection: Mat4, model_view: Mat4, position: Vec3, uv: Vec2) -> VertexOutput {
    VertexOutput {
        uv,
        clip_position: projection * model_view * position.extend(1.0),
    }
}

/// As [`transform_3d`], with `uv_transform · (uv, 0, 1)` dropped back to 2D.
#[inline]
pub fn transform_3d_uv(
    projection: Mat4,
    model_view: Mat4,
    uv_transform: Mat4,
    position: Vec3,
    uv: Vec2,
) -> VertexOutput {
    let uv = uv_transform * Vec4::new(uv.x, uv.y, 0.0, 1.0);
    VertexOutput {
        uv: Vec2::new(uv.x, uv.y),
        clip_position: projection * model_view * position.extend(1.0),
    }
}
