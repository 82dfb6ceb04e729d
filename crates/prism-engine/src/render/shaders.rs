//! WGSL sources and their static checks.

use anyhow::Context as _;
use thiserror::Error;

use crate::mesh::{Vertex, Vertex2d, Vertex3dUv};
use crate::raster::BlendMode;

use super::bindings::{self, Resource, Slot};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    pub fn entry_point(self) -> &'static str {
        match self {
            Stage::Vertex => "vs_main",
            Stage::Fragment => "fs_main",
        }
    }

    pub fn visibility(self) -> wgpu::ShaderStages {
        match self {
            Stage::Vertex => wgpu::ShaderStages::VERTEX,
            Stage::Fragment => wgpu::ShaderStages::FRAGMENT,
        }
    }

    fn naga(self) -> naga::ShaderStage {
        match self {
            Stage::Vertex => naga::ShaderStage::Vertex,
            Stage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

/// One WGSL module. Each has exactly one entry point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderId {
    Screen,
    Mesh3d,
    Quad,
    UniformFill,
    Textured,
    SdfCircle,
    DepthEdgeRaw,
    DepthEdgeLinear,
    Present,
}

impl ShaderId {
    pub const ALL: [ShaderId; 9] = [
        ShaderId::Screen,
        ShaderId::Mesh3d,
        ShaderId::Quad,
        ShaderId::UniformFill,
        ShaderId::Textured,
        ShaderId::SdfCircle,
        ShaderId::DepthEdgeRaw,
        ShaderId::DepthEdgeLinear,
        ShaderId::Present,
    ];

    /// Path of the source under `render/shaders/`, without extension.
    pub fn name(self) -> &'static str {
        match self {
            ShaderId::Screen => "shapes/screen",
            ShaderId::Mesh3d => "shapes/mesh_3d",
            ShaderId::Quad => "shapes/quad",
            ShaderId::UniformFill => "materials/uniform_fill",
            ShaderId::Textured => "materials/textured",
            ShaderId::SdfCircle => "materials/sdf_circle",
            ShaderId::DepthEdgeRaw => "post/depth_edge_raw",
            ShaderId::DepthEdgeLinear => "post/depth_edge_linear",
            ShaderId::Present => "post/present",
        }
    }

    pub fn stage(self) -> Stage {
        match self {
            ShaderId::Screen | ShaderId::Mesh3d | ShaderId::Quad => Stage::Vertex,
            _ => Stage::Fragment,
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            ShaderId::Screen => include_str!("shaders/shapes/screen.wgsl"),
            ShaderId::Mesh3d => include_str!("shaders/shapes/mesh_3d.wgsl"),
            ShaderId::Quad => include_str!("shaders/shapes/quad.wgsl"),
            ShaderId::UniformFill => include_str!("shaders/materials/uniform_fill.wgsl"),
            ShaderId::Textured => include_str!("shaders/materials/textured.wgsl"),
            ShaderId::SdfCircle => include_str!("shaders/materials/sdf_circle.wgsl"),
            ShaderId::DepthEdgeRaw => include_str!("shaders/post/depth_edge_raw.wgsl"),
            ShaderId::DepthEdgeLinear => include_str!("shaders/post/depth_edge_linear.wgsl"),
            ShaderId::Present => include_str!("shaders/post/present.wgsl"),
        }
    }

    pub fn slots(self) -> &'static [Slot] {
        match self {
            ShaderId::Screen => bindings::SCREEN,
            ShaderId::Mesh3d => bindings::MESH_3D,
            ShaderId::Quad => bindings::QUAD,
            ShaderId::UniformFill => bindings::UNIFORM_FILL,
            ShaderId::Textured => bindings::TEXTURED,
            ShaderId::SdfCircle => bindings::SDF_CIRCLE,
            ShaderId::DepthEdgeRaw => bindings::DEPTH_EDGE_RAW,
            ShaderId::DepthEdgeLinear => bindings::DEPTH_EDGE_LINEAR,
            ShaderId::Present => bindings::PRESENT,
        }
    }

    pub fn slot(self, name: &str) -> Option<&'static Slot> {
        self.slots().iter().find(|s| s.name == name)
    }

    /// Color target blend for fragment modules.
    pub fn blend(self) -> Option<BlendMode> {
        match self {
            ShaderId::Screen | ShaderId::Mesh3d | ShaderId::Quad => None,
            ShaderId::DepthEdgeRaw | ShaderId::DepthEdgeLinear | ShaderId::Present => {
                Some(BlendMode::Replace)
            }
            ShaderId::UniformFill | ShaderId::Textured | ShaderId::SdfCircle => {
                Some(BlendMode::Alpha)
            }
        }
    }

    /// Vertex buffer layout for vertex modules.
    pub fn vertex_layout(self) -> Option<wgpu::VertexBufferLayout<'static>> {
        match self {
            ShaderId::Screen | ShaderId::Quad => Some(Vertex2d::LAYOUT),
            ShaderId::Mesh3d => Some(Vertex3dUv::LAYOUT),
            _ => None,
        }
    }

    /// Parses and validates the source, then checks the entry point and
    /// that the declared bindings are exactly [`slots`](Self::slots).
    pub fn validate(self) -> Result<naga::Module, ShaderError> {
        let shader = self.name();
        let source = self.source();

        let module = naga::front::wgsl::parse_str(source).map_err(|e| ShaderError::Parse {
            shader,
            message: e.emit_to_string(source),
        })?;

        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        )
        .validate(&module)
        .map_err(|e| ShaderError::Validation {
            shader,
            message: e.as_inner().to_string(),
        })?;

        let stage = self.stage();
        let entry_point = stage.entry_point();
        if !module
            .entry_points
            .iter()
            .any(|ep| ep.name == entry_point && ep.stage == stage.naga())
        {
            return Err(ShaderError::MissingEntryPoint { shader, entry_point });
        }

        let slots = self.slots();
        for (_, var) in module.global_variables.iter() {
            let Some(binding) = &var.binding else { continue };
            let slot = slots
                .iter()
                .find(|s| s.group == binding.group && s.binding == binding.binding)
                .ok_or(ShaderError::UnexpectedBinding {
                    shader,
                    group: binding.group,
                    binding: binding.binding,
                })?;
            if !resource_matches(&module, var, slot.resource) {
                return Err(ShaderError::ResourceMismatch {
                    shader,
                    name: slot.name,
                    expected: slot.resource,
                });
            }
        }
        for slot in slots {
            let declared = module.global_variables.iter().any(|(_, var)| {
                var.binding
                    .as_ref()
                    .is_some_and(|b| b.group == slot.group && b.binding == slot.binding)
            });
            if !declared {
                return Err(ShaderError::MissingBinding {
                    shader,
                    name: slot.name,
                    group: slot.group,
                    binding: slot.binding,
                });
            }
        }

        Ok(module)
    }

    pub fn create_module(self, device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(self.name()),
            source: wgpu::ShaderSource::Wgsl(self.source().into()),
        })
    }
}

fn resource_matches(module: &naga::Module, var: &naga::GlobalVariable, expected: Resource) -> bool {
    match (var.space, expected) {
        (naga::AddressSpace::Uniform, Resource::Uniform { .. }) => true,
        (naga::AddressSpace::Handle, Resource::Texture { .. }) => {
            matches!(module.types[var.ty].inner, naga::TypeInner::Image { .. })
        }
        (naga::AddressSpace::Handle, Resource::Sampler) => {
            matches!(module.types[var.ty].inner, naga::TypeInner::Sampler { .. })
        }
        _ => false,
    }
}

/// Validates every built-in module.
pub fn validate_all() -> anyhow::Result<()> {
    for id in ShaderId::ALL {
        if let Err(e) = id.validate() {
            log::warn!("{e}");
            return Err(e).with_context(|| format!("validating shader `{}`", id.name()));
        }
        log::debug!("shader {} ok ({} slots)", id.name(), id.slots().len());
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("{shader}: WGSL parse failed:\n{message}")]
    Parse { shader: &'static str, message: String },

    #[error("{shader}: validation failed: {message}")]
    Validation { shader: &'static str, message: String },

    #[error("{shader}: no `{entry_point}` entry point for its stage")]
    MissingEntryPoint { shader: &'static str, entry_point: &'static str },

    #[error("{shader}: @group({group}) @binding({binding}) is not a known slot")]
    UnexpectedBinding { shader: &'static str, group: u32, binding: u32 },

    #[error("{shader}: slot `{name}` (@group({group}) @binding({binding})) is not declared")]
    MissingBinding {
        shader: &'static str,
        name: &'static str,
        group: u32,
        binding: u32,
    },

    #[error("{shader}: slot `{name}` is declared with the wrong type, expected {expected:?}")]
    ResourceMismatch {
        shader: &'static str,
        name: &'static str,
        expected: Resource,
    },

    #[error("{shader} is a {actual:?} module, expected {expected:?}")]
    WrongStage {
        shader: &'static str,
        expected: Stage,
        actual: Stage,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_module_validates() {
        for id in ShaderId::ALL {
            if let Err(e) = id.validate() {
                panic!("{e}");
            }
        }
        assert!(validate_all().is_ok());
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = ShaderId::ALL.iter().map(|id| id.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ShaderId::ALL.len());
    }

    #[test]
    fn vertex_modules_have_layouts_and_no_blend() {
        for id in ShaderId::ALL {
            match id.stage() {
                Stage::Vertex => {
                    assert!(id.vertex_layout().is_some(), "{id:?}");
                    assert!(id.blend().is_none(), "{id:?}");
                }
                Stage::Fragment => {
                    assert!(id.vertex_layout().is_none(), "{id:?}");
                    assert!(id.blend().is_some(), "{id:?}");
                }
            }
        }
    }

    #[test]
    fn slot_lookup_by_name() {
        let far = ShaderId::DepthEdgeLinear.slot("far").unwrap();
        assert_eq!((far.group, far.binding), (2, 4));
        assert!(ShaderId::DepthEdgeRaw.slot("far").is_none());
    }

    #[test]
    fn constants_match_cpu_formulas() {
        use crate::shade::edge::{LINEAR_DEPTH_GAIN, RAW_DEPTH_GAIN};
        use crate::shade::Gamma;

        let raw = ShaderId::DepthEdgeRaw.source();
        assert!(raw.contains(&format!("RAW_DEPTH_GAIN: f32 = {RAW_DEPTH_GAIN:?};")));
        let linear = ShaderId::DepthEdgeLinear.source();
        assert!(linear.contains(&format!("LINEAR_DEPTH_GAIN: f32 = {LINEAR_DEPTH_GAIN:?};")));
        let present = ShaderId::Present.source();
        assert!(present.contains(&format!("DISPLAY_GAMMA: f32 = {:?};", Gamma::DISPLAY.exponent())));
    }

    #[test]
    fn slot_table_mismatch_is_reported() {
        // Parse a fragment source against the wrong table by hand.
        let module = naga::front::wgsl::parse_str(ShaderId::UniformFill.source()).unwrap();
        let (_, var) = module
            .global_variables
            .iter()
            .find(|(_, v)| v.binding.is_some())
            .unwrap();
        assert!(resource_matches(&module, var, Resource::Uniform { size: 16 }));
        assert!(!resource_matches(&module, var, Resource::Sampler));
    }
}
