use crate::program::{FragmentProgram, VertexProgram};
use crate::raster::RasterConfig;

use super::bindings::GROUP_COUNT;
use super::shaders::{ShaderError, ShaderId, Stage};

/// Device and target formats a pipeline is built against.
pub struct PipelineCtx<'a> {
    pub device: &'a wgpu::Device,
    pub color_format: wgpu::TextureFormat,
    /// `None` for passes without a depth attachment.
    pub depth_format: Option<wgpu::TextureFormat>,
}

impl<'a> PipelineCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        color_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
    ) -> Self {
        Self { device, color_format, depth_format }
    }
}

/// A vertex module paired with a fragment module.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShaderPair {
    vertex: ShaderId,
    fragment: ShaderId,
}

/// GPU objects for one [`ShaderPair`]. Layouts are indexed by group.
pub struct GpuPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub bind_group_layouts: Vec<wgpu::BindGroupLayout>,
}

impl ShaderPair {
    pub fn new(vertex: ShaderId, fragment: ShaderId) -> Result<Self, ShaderError> {
        for (id, expected) in [(vertex, Stage::Vertex), (fragment, Stage::Fragment)] {
            if id.stage() != expected {
                return Err(ShaderError::WrongStage {
                    shader: id.name(),
                    expected,
                    actual: id.stage(),
                });
            }
        }
        Ok(Self { vertex, fragment })
    }

    /// Pair matching two CPU programs, including any module chosen by
    /// their configuration.
    pub fn of<V: VertexProgram, F: FragmentProgram>(vertex: &V, fragment: &F) -> Self {
        Self { vertex: vertex.module(), fragment: fragment.module() }
    }

    /// Same vertex module, different fragment module.
    pub fn with_fragment(self, fragment: ShaderId) -> Result<Self, ShaderError> {
        Self::new(self.vertex, fragment)
    }

    pub fn vertex(&self) -> ShaderId {
        self.vertex
    }

    pub fn fragment(&self) -> ShaderId {
        self.fragment
    }

    /// Layout entries per bind group. Groups a pair doesn't use stay empty so
    /// group indices remain stable across pipelines.
    pub fn group_entries(&self) -> [Vec<wgpu::BindGroupLayoutEntry>; GROUP_COUNT] {
        let mut groups: [Vec<wgpu::BindGroupLayoutEntry>; GROUP_COUNT] = Default::default();
        for id in [self.vertex, self.fragment] {
            let visibility = id.stage().visibility();
            for slot in id.slots() {
                let entries = &mut groups[slot.group as usize];
                match entries.iter_mut().find(|e| e.binding == slot.binding) {
                    Some(existing) => existing.visibility |= visibility,
                    None => entries.push(slot.layout_entry(visibility)),
                }
            }
        }
        groups
    }

    pub fn create(&self, ctx: &PipelineCtx<'_>, raster: &RasterConfig) -> GpuPipeline {
        let label = format!("{} + {}", self.vertex.name(), self.fragment.name());

        let bind_group_layouts: Vec<_> = self
            .group_entries()
            .iter()
            .enumerate()
            .map(|(group, entries)| {
                ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some(&format!("{label} group {group}")),
                    entries,
                })
            })
            .collect();
        let layout_refs: Vec<&wgpu::BindGroupLayout> = bind_group_layouts.iter().collect();

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&label),
            bind_group_layouts: &layout_refs,
            immediate_size: 0,
        });

        let vertex_module = self.vertex.create_module(ctx.device);
        let fragment_module = self.fragment.create_module(ctx.device);
        let buffers: Vec<_> = self.vertex.vertex_layout().into_iter().collect();

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some(Stage::Vertex.entry_point()),
                compilation_options: Default::default(),
                buffers: &buffers,
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some(Stage::Fragment.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.color_format,
                    blend: self.fragment.blend().and_then(|b| b.wgpu_state()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: ctx.depth_format.map(|format| depth_stencil_state(format, raster)),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("created pipeline {label}");
        GpuPipeline { pipeline, bind_group_layouts }
    }
}

/// Depth state equivalent to the software rasterizer's depth handling.
pub fn depth_stencil_state(format: wgpu::TextureFormat, raster: &RasterConfig) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format,
        depth_write_enabled: raster.depth_write,
        depth_compare: if raster.depth_test {
            wgpu::CompareFunction::Less
        } else {
            wgpu::CompareFunction::Always
        },
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::paint::Rgba;
    use crate::program::{DepthEdge, QuadTransform, UniformFill};
    use crate::raster::{Sampler, Texture2d};
    use crate::shade::{DepthRange, EdgePreset};

    #[test]
    fn rejects_swapped_stages() {
        let err = ShaderPair::new(ShaderId::UniformFill, ShaderId::Quad).unwrap_err();
        assert!(matches!(err, ShaderError::WrongStage { expected: Stage::Vertex, .. }));
    }

    #[test]
    fn pair_from_programs() {
        let pair = ShaderPair::of(&QuadTransform::fullscreen(), &UniformFill::default());
        assert_eq!(pair.vertex(), ShaderId::Quad);
        assert_eq!(pair.fragment(), ShaderId::UniformFill);
    }

    #[test]
    fn edge_preset_picks_fragment_module() {
        let edge = |preset| DepthEdge {
            color: Arc::new(Texture2d::from_fn(1, 1, |_, _| Rgba::WHITE).unwrap()),
            depth: Arc::new(Texture2d::from_fn(1, 1, |_, _| 1.0f32).unwrap()),
            sampler: Sampler::nearest_clamp(),
            preset,
            range: DepthRange::new(0.1, 100.0).unwrap(),
        };
        let quad = QuadTransform::fullscreen();
        assert_eq!(ShaderPair::of(&quad, &edge(EdgePreset::RawDepth)).fragment(), ShaderId::DepthEdgeRaw);
        assert_eq!(
            ShaderPair::of(&quad, &edge(EdgePreset::LinearDepth)).fragment(),
            ShaderId::DepthEdgeLinear
        );
    }

    #[test]
    fn with_fragment_keeps_vertex_module() {
        let pair = ShaderPair::of(&QuadTransform::fullscreen(), &UniformFill::default())
            .with_fragment(ShaderId::Present)
            .unwrap();
        assert_eq!(pair.vertex(), ShaderId::Quad);
        assert_eq!(pair.fragment(), ShaderId::Present);
        assert!(pair.with_fragment(ShaderId::Screen).is_err());
    }

    #[test]
    fn groups_split_by_owner() {
        let pair = ShaderPair::new(ShaderId::Quad, ShaderId::SdfCircle).unwrap();
        let [global, object, material] = pair.group_entries();
        assert_eq!(global.len(), 1);
        assert_eq!(object.len(), 2);
        assert_eq!(material.len(), 3);
        assert_eq!(global[0].visibility, wgpu::ShaderStages::VERTEX);
        assert!(material.iter().all(|e| e.visibility == wgpu::ShaderStages::FRAGMENT));
    }

    #[test]
    fn screen_pass_has_only_material_group() {
        let pair = ShaderPair::new(ShaderId::Screen, ShaderId::Present).unwrap();
        let [global, object, material] = pair.group_entries();
        assert!(global.is_empty() && object.is_empty());
        assert_eq!(material.len(), 2);
    }

    #[test]
    fn post_process_depth_state_always_passes() {
        let state = depth_stencil_state(wgpu::TextureFormat::Depth32Float, &RasterConfig::post_process());
        assert_eq!(state.depth_compare, wgpu::CompareFunction::Always);
        assert!(!state.depth_write_enabled);
        let state = depth_stencil_state(wgpu::TextureFormat::Depth32Float, &RasterConfig::default());
        assert_eq!(state.depth_compare, wgpu::CompareFunction::Less);
    }
}
