//! Host-side uniform packing.
//!
//! Programs describe their uniform values by slot name; a host resolves the
//! name through [`ShaderId::slot`] and uploads the bytes.

use bytemuck::Pod;

use crate::program::{
    DepthEdge, FragmentProgram, MeshTransform, Present, QuadTransform, ScreenPassthrough,
    SdfCircleFill, Textured, UniformFill, VertexProgram,
};

use super::ShaderId;

#[derive(Debug, Clone, PartialEq)]
pub struct UniformWrite {
    pub name: &'static str,
    pub bytes: Vec<u8>,
}

impl UniformWrite {
    pub fn new<T: Pod>(name: &'static str, value: &T) -> Self {
        Self { name, bytes: bytemuck::bytes_of(value).to_vec() }
    }
}

/// Uniform values for the module a program runs as.
pub trait Uniforms {
    fn shader(&self) -> ShaderId;

    fn uniforms(&self) -> Vec<UniformWrite>;
}

impl Uniforms for ScreenPassthrough {
    fn shader(&self) -> ShaderId {
        Self::SHADER
    }

    fn uniforms(&self) -> Vec<UniformWrite> {
        Vec::new()
    }
}

impl Uniforms for MeshTransform {
    fn shader(&self) -> ShaderId {
        Self::SHADER
    }

    fn uniforms(&self) -> Vec<UniformWrite> {
        vec![
            UniformWrite::new("projection", &self.projection),
            UniformWrite::new("model_view", &self.model_view),
        ]
    }
}

impl Uniforms for QuadTransform {
    fn shader(&self) -> ShaderId {
        Self::SHADER
    }

    fn uniforms(&self) -> Vec<UniformWrite> {
        vec![
            UniformWrite::new("projection", &self.projection),
            UniformWrite::new("model_view", &self.model_view),
            UniformWrite::new("uv_transform", &self.uv_transform),
        ]
    }
}

impl Uniforms for UniformFill {
    fn shader(&self) -> ShaderId {
        Self::SHADER
    }

    fn uniforms(&self) -> Vec<UniformWrite> {
        vec![UniformWrite::new("fill_color", &self.fill_color)]
    }
}

impl Uniforms for Textured {
    fn shader(&self) -> ShaderId {
        Self::SHADER
    }

    fn uniforms(&self) -> Vec<UniformWrite> {
        vec![UniformWrite::new("gamma", &self.gamma.exponent())]
    }
}

impl Uniforms for SdfCircleFill {
    fn shader(&self) -> ShaderId {
        Self::SHADER
    }

    fn uniforms(&self) -> Vec<UniformWrite> {
        vec![
            UniformWrite::new("fill_color", &self.circle.fill),
            UniformWrite::new("center", &self.circle.center),
            UniformWrite::new("radius", &self.circle.radius),
        ]
    }
}

impl Uniforms for DepthEdge {
    fn shader(&self) -> ShaderId {
        self.module()
    }

    fn uniforms(&self) -> Vec<UniformWrite> {
        match self.shader() {
            ShaderId::DepthEdgeLinear => vec![
                UniformWrite::new("near", &self.range.near()),
                UniformWrite::new("far", &self.range.far()),
            ],
            _ => Vec::new(),
        }
    }
}

impl Uniforms for Present {
    fn shader(&self) -> ShaderId {
        Self::SHADER
    }

    fn uniforms(&self) -> Vec<UniformWrite> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::{Mat4, Vec2};

    use super::*;
    use crate::paint::Rgba;
    use crate::raster::{Sampler, Texture2d};
    use crate::render::bindings::Resource;
    use crate::shade::{DepthRange, EdgePreset, Gamma, SdfCircle};

    /// Every uniform slot is written exactly once with the declared size.
    fn assert_covers_slots(program: &dyn Uniforms) {
        let shader = program.shader();
        let writes = program.uniforms();
        for write in &writes {
            let slot = shader
                .slot(write.name)
                .unwrap_or_else(|| panic!("{shader:?} has no slot {}", write.name));
            assert_eq!(
                slot.resource,
                Resource::Uniform { size: write.bytes.len() as u64 },
                "{shader:?}.{}",
                write.name
            );
        }
        for slot in shader.slots() {
            if let Resource::Uniform { .. } = slot.resource {
                let count = writes.iter().filter(|w| w.name == slot.name).count();
                assert_eq!(count, 1, "{shader:?}.{}", slot.name);
            }
        }
    }

    #[test]
    fn vertex_programs_fill_their_slots() {
        assert_covers_slots(&ScreenPassthrough);
        assert_covers_slots(&MeshTransform { projection: Mat4::IDENTITY, model_view: Mat4::IDENTITY });
        assert_covers_slots(&QuadTransform::fullscreen());
    }

    #[test]
    fn materials_fill_their_slots() {
        let color = Arc::new(Texture2d::from_fn(2, 2, |_, _| Rgba::WHITE).unwrap());
        let depth = Arc::new(Texture2d::from_fn(2, 2, |_, _| 1.0f32).unwrap());

        assert_covers_slots(&UniformFill::default());
        assert_covers_slots(
            &Textured::new(color.clone(), Sampler::linear_clamp()).with_gamma(Gamma::DISPLAY),
        );
        assert_covers_slots(&SdfCircleFill::new(
            SdfCircle::new(Vec2::splat(0.5), 0.25, Rgba::WHITE).unwrap(),
        ));
        for preset in [EdgePreset::RawDepth, EdgePreset::LinearDepth] {
            assert_covers_slots(&DepthEdge {
                color: color.clone(),
                depth: depth.clone(),
                sampler: Sampler::nearest_clamp(),
                preset,
                range: DepthRange::new(0.1, 100.0).unwrap(),
            });
        }
        assert_covers_slots(&Present { source: color, sampler: Sampler::nearest_clamp() });
    }

    #[test]
    fn cpu_blend_matches_shader_blend() {
        let color = Arc::new(Texture2d::from_fn(1, 1, |_, _| Rgba::WHITE).unwrap());
        let present = Present { source: color.clone(), sampler: Sampler::nearest_clamp() };
        assert_eq!(Some(present.blend()), present.shader().blend());
        let fill = UniformFill::default();
        assert_eq!(Some(fill.blend()), fill.shader().blend());
        let textured = Textured::new(color, Sampler::nearest_clamp());
        assert_eq!(Some(textured.blend()), textured.shader().blend());
    }

    #[test]
    fn uniform_bytes_are_native_f32() {
        let write = UniformWrite::new("radius", &0.25f32);
        assert_eq!(write.bytes, 0.25f32.to_ne_bytes());
    }
}
