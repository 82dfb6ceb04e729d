use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// A vertex record that can be uploaded as-is.
pub trait Vertex: Pod {
    const LAYOUT: wgpu::VertexBufferLayout<'static>;
}

/// Index element type.
pub trait Index: Pod + Copy {
    const FORMAT: wgpu::IndexFormat;

    fn to_usize(self) -> usize;
}

impl Index for u16 {
    const FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint16;

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl Index for u32 {
    const FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

/// 2D position, location 0.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex2d {
    pub position: [f32; 2],
}

impl Vertex2d {
    pub const fn new(position: [f32; 2]) -> Self {
        Self { position }
    }

    #[inline]
    pub fn position(self) -> Vec2 {
        Vec2::from(self.position)
    }
}

impl From<[f32; 2]> for Vertex2d {
    fn from(value: [f32; 2]) -> Self {
        Self::new(value)
    }
}

impl Vertex for Vertex2d {
    const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: size_of::<Self>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
            shader_location: 0,
        }],
    };
}

/// 3D position (location 0) and UV (location 1).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex3dUv {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex3dUv {
    pub const fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }

    #[inline]
    pub fn position(self) -> Vec3 {
        Vec3::from(self.position)
    }

    #[inline]
    pub fn uv(self) -> Vec2 {
        Vec2::from(self.uv)
    }
}

impl Vertex for Vertex3dUv {
    const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: size_of::<Self>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: size_of::<[f32; 3]>() as u64,
                shader_location: 1,
            },
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_match_struct_sizes() {
        assert_eq!(Vertex2d::LAYOUT.array_stride, 8);
        assert_eq!(Vertex3dUv::LAYOUT.array_stride, 20);
        assert_eq!(Vertex3dUv::LAYOUT.attributes[1].offset, 12);
        assert_eq!(Vertex3dUv::LAYOUT.attributes[1].shader_location, 1);
    }

    #[test]
    fn vertices_cast_to_bytes() {
        let v = [Vertex3dUv::new([1.0, 2.0, 3.0], [0.5, 0.25])];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 20);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.5, 0.25]);
    }
}
