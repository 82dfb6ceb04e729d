//! Bind slot contract between host and shaders.
//!
//! Group 0 holds per-frame globals, group 1 per-object transforms and group 2
//! the material. Every WGSL module declares exactly the slots listed for it
//! here; `shaders::tests` checks that against the parsed sources.

use std::num::NonZeroU64;

pub const GLOBAL_GROUP: u32 = 0;
pub const OBJECT_GROUP: u32 = 1;
pub const MATERIAL_GROUP: u32 = 2;

/// Number of bind groups any pipeline uses.
pub const GROUP_COUNT: usize = 3;

const MAT4: u64 = 64;
const VEC4: u64 = 16;
const VEC2: u64 = 8;
const SCALAR: u64 = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Uniform buffer of `size` bytes.
    Uniform { size: u64 },
    /// `texture_2d<f32>`. Depth is read with `textureLoad` and need not be
    /// filterable.
    Texture { filterable: bool },
    Sampler,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Slot {
    pub group: u32,
    pub binding: u32,
    pub name: &'static str,
    pub resource: Resource,
}

impl Slot {
    const fn uniform(group: u32, binding: u32, name: &'static str, size: u64) -> Self {
        Self { group, binding, name, resource: Resource::Uniform { size } }
    }

    const fn texture(binding: u32, name: &'static str, filterable: bool) -> Self {
        Self {
            group: MATERIAL_GROUP,
            binding,
            name,
            resource: Resource::Texture { filterable },
        }
    }

    const fn sampler(binding: u32, name: &'static str) -> Self {
        Self { group: MATERIAL_GROUP, binding, name, resource: Resource::Sampler }
    }

    pub fn layout_entry(&self, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
        let ty = match self.resource {
            Resource::Uniform { size } => wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: NonZeroU64::new(size),
            },
            Resource::Texture { filterable } => wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            Resource::Sampler => {
                wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering)
            }
        };
        wgpu::BindGroupLayoutEntry {
            binding: self.binding,
            visibility,
            ty,
            count: None,
        }
    }
}

const PROJECTION: Slot = Slot::uniform(GLOBAL_GROUP, 0, "projection", MAT4);
const MODEL_VIEW: Slot = Slot::uniform(OBJECT_GROUP, 0, "model_view", MAT4);
const UV_TRANSFORM: Slot = Slot::uniform(OBJECT_GROUP, 1, "uv_transform", MAT4);

pub const SCREEN: &[Slot] = &[];
pub const MESH_3D: &[Slot] = &[PROJECTION, MODEL_VIEW];
pub const QUAD: &[Slot] = &[PROJECTION, MODEL_VIEW, UV_TRANSFORM];

pub const UNIFORM_FILL: &[Slot] = &[Slot::uniform(MATERIAL_GROUP, 0, "fill_color", VEC4)];

pub const TEXTURED: &[Slot] = &[
    Slot::texture(0, "color_texture", true),
    Slot::sampler(1, "color_sampler"),
    Slot::uniform(MATERIAL_GROUP, 2, "gamma", SCALAR),
];

pub const SDF_CIRCLE: &[Slot] = &[
    Slot::uniform(MATERIAL_GROUP, 0, "fill_color", VEC4),
    Slot::uniform(MATERIAL_GROUP, 1, "center", VEC2),
    Slot::uniform(MATERIAL_GROUP, 2, "radius", SCALAR),
];

pub const DEPTH_EDGE_RAW: &[Slot] = &[
    Slot::texture(0, "color_texture", true),
    Slot::sampler(1, "color_sampler"),
    Slot::texture(2, "depth_texture", false),
];

pub const DEPTH_EDGE_LINEAR: &[Slot] = &[
    Slot::texture(0, "color_texture", true),
    Slot::sampler(1, "color_sampler"),
    Slot::texture(2, "depth_texture", false),
    Slot::uniform(MATERIAL_GROUP, 3, "near", SCALAR),
    Slot::uniform(MATERIAL_GROUP, 4, "far", SCALAR),
];

pub const PRESENT: &[Slot] = &[
    Slot::texture(0, "source_texture", true),
    Slot::sampler(1, "source_sampler"),
];
