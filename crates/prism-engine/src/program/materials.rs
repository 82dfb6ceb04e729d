use std::sync::Arc;

use crate::paint::Rgba;
use crate::raster::{BlendMode, ColorTexture, DepthTexture, FragmentQuad, Quad, Sampler};
use crate::render::ShaderId;
use crate::shade::{edge, DepthRange, EdgePreset, Gamma, SdfCircle};

use super::FragmentProgram;

/// Solid color. Output equals `fill_color` on every lane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UniformFill {
    pub fill_color: Rgba,
}

impl UniformFill {
    pub fn new(fill_color: Rgba) -> Self {
        Self { fill_color }
    }
}

impl Default for UniformFill {
    fn default() -> Self {
        Self::new(Rgba::WHITE)
    }
}

impl FragmentProgram for UniformFill {
    const SHADER: ShaderId = ShaderId::UniformFill;

    #[inline]
    fn run(&self, _quad: &FragmentQuad) -> Quad<Rgba> {
        Quad::splat(self.fill_color)
    }
}

/// Texture lookup with a uniform gamma exponent.
///
/// At [`Gamma::IDENTITY`] the output is the sampled texel, bit for bit.
#[derive(Debug, Clone)]
pub struct Textured {
    pub texture: Arc<ColorTexture>,
    pub sampler: Sampler,
    pub gamma: Gamma,
}

impl Textured {
    pub fn new(texture: Arc<ColorTexture>, sampler: Sampler) -> Self {
        Self { texture, sampler, gamma: Gamma::IDENTITY }
    }

    pub fn with_gamma(mut self, gamma: Gamma) -> Self {
        self.gamma = gamma;
        self
    }
}

impl FragmentProgram for Textured {
    const SHADER: ShaderId = ShaderId::Textured;

    fn run(&self, quad: &FragmentQuad) -> Quad<Rgba> {
        quad.uv().map(|uv| {
            let texel = self.texture.sample(&self.sampler, uv);
            if self.gamma == Gamma::IDENTITY {
                texel
            } else {
                texel.apply_gamma(self.gamma.exponent())
            }
        })
    }
}

/// Antialiased circle over the primitive's UV space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SdfCircleFill {
    pub circle: SdfCircle,
}

impl SdfCircleFill {
    pub fn new(circle: SdfCircle) -> Self {
        Self { circle }
    }
}

impl FragmentProgram for SdfCircleFill {
    const SHADER: ShaderId = ShaderId::SdfCircle;

    fn run(&self, quad: &FragmentQuad) -> Quad<Rgba> {
        let uv = quad.uv();
        let footprint = quad.fwidth(&uv.map(|p| p.x));
        uv.zip(&footprint, |p, fwidth_x| self.circle.shade(p, fwidth_x))
    }
}

/// Post pass darkening color where depth changes quickly.
#[derive(Debug, Clone)]
pub struct DepthEdge {
    pub color: Arc<ColorTexture>,
    pub depth: Arc<DepthTexture>,
    pub sampler: Sampler,
    pub preset: EdgePreset,
    pub range: DepthRange,
}

impl DepthEdge {
    pub fn shader_for(preset: EdgePreset) -> ShaderId {
        match preset {
            EdgePreset::RawDepth => ShaderId::DepthEdgeRaw,
            EdgePreset::LinearDepth => ShaderId::DepthEdgeLinear,
        }
    }
}

impl FragmentProgram for DepthEdge {
    const SHADER: ShaderId = ShaderId::DepthEdgeRaw;

    fn module(&self) -> ShaderId {
        Self::shader_for(self.preset)
    }

    fn run(&self, quad: &FragmentQuad) -> Quad<Rgba> {
        let uv = quad.uv();
        let field = uv.map(|p| self.preset.field(self.depth.load_uv(p), self.range));
        let derivative = quad.fwidth(&field);
        uv.zip(&derivative, |p, d| {
            let color = self.color.sample(&self.sampler, p);
            edge::apply(color, self.preset.shade(d, self.range))
        })
    }

    fn blend(&self) -> BlendMode {
        BlendMode::Replace
    }
}

/// Final pass: fixed display gamma over RGB clamped to `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Present {
    pub source: Arc<ColorTexture>,
    pub sampler: Sampler,
}

impl FragmentProgram for Present {
    const SHADER: ShaderId = ShaderId::Present;

    fn run(&self, quad: &FragmentQuad) -> Quad<Rgba> {
        quad.uv().map(|uv| {
            self.source
                .sample(&self.sampler, uv)
                .map_rgb(|c| c.clamp(0.0, 1.0))
                .apply_gamma(Gamma::DISPLAY.exponent())
        })
    }

    fn blend(&self) -> BlendMode {
        BlendMode::Replace
    }
}
