use glam::{Vec2, Vec3, Vec4};

use crate::coords::PixelRect;
use crate::error::ConfigError;
use crate::mesh::Index;
use crate::program::{FragmentProgram, VertexProgram};
use crate::shade::VertexOutput;

use super::{
    Fragment, FragmentQuad, Framebuffer, Interpolator, PerspectiveInterpolator, Quad, RasterConfig,
};

/// Triangles with a vertex at or behind this clip `w` are dropped whole.
const MIN_CLIP_W: f32 = 1e-6;

/// Counters for one [`Rasterizer::draw`] call.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub triangles: usize,
    /// Behind the eye, degenerate, or fully off screen.
    pub culled: usize,
    /// Quads with at least one covered lane.
    pub quads: usize,
    /// Uncovered lanes evaluated only to feed derivatives.
    pub helper_lanes: usize,
    /// Fragments that passed the depth test and reached the target.
    pub fragments_written: usize,
}

/// A post-divide vertex in pixel space.
#[derive(Debug, Copy, Clone)]
struct ScreenVertex {
    pos: Vec2,
    z: f32,
    inv_w: f32,
    uv: Vec2,
}

impl ScreenVertex {
    fn project(out: &VertexOutput, target: &Framebuffer) -> Option<Self> {
        let clip = out.clip_position;
        if clip.w.is_nan() || clip.w <= MIN_CLIP_W {
            return None;
        }
        let inv_w = 1.0 / clip.w;
        let ndc = clip.truncate() * inv_w;
        Some(Self {
            pos: target.viewport().ndc_to_screen(ndc.truncate()),
            z: ndc.z,
            inv_w,
            uv: out.uv,
        })
    }
}

/// Twice the signed area of `(a, b, p)`.
#[inline]
fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Top-left fill rule, independent of winding.
///
/// A sample exactly on edge `a → b` belongs to this triangle if the edge is a
/// top edge (horizontal, interior below) or a left edge (interior to the right).
/// Of two triangles sharing an edge exactly one owns it.
fn owns_edge(a: Vec2, b: Vec2, opposite: Vec2) -> bool {
    if a.y == b.y {
        return opposite.y > a.y;
    }
    let t = (opposite.y - a.y) / (b.y - a.y);
    let x_on_edge = a.x + (b.x - a.x) * t;
    opposite.x > x_on_edge
}

struct Triangle {
    v: [ScreenVertex; 3],
    inv_area: f32,
    owns: [bool; 3],
}

impl Triangle {
    fn setup(v: [ScreenVertex; 3]) -> Option<Self> {
        let area = edge_function(v[0].pos, v[1].pos, v[2].pos);
        if area == 0.0 || !area.is_finite() {
            return None;
        }
        let owns = [
            owns_edge(v[1].pos, v[2].pos, v[0].pos),
            owns_edge(v[2].pos, v[0].pos, v[1].pos),
            owns_edge(v[0].pos, v[1].pos, v[2].pos),
        ];
        Some(Self { v, inv_area: 1.0 / area, owns })
    }

    fn bounds(&self) -> PixelRect {
        let min = self.v[0].pos.min(self.v[1].pos).min(self.v[2].pos);
        let max = self.v[0].pos.max(self.v[1].pos).max(self.v[2].pos);
        PixelRect::covering(min.x, min.y, max.x, max.y)
    }

    /// Screen-space barycentrics; extrapolated outside the triangle.
    #[inline]
    fn barycentric(&self, p: Vec2) -> Vec3 {
        let [a, b, c] = [self.v[0].pos, self.v[1].pos, self.v[2].pos];
        Vec3::new(
            edge_function(b, c, p) * self.inv_area,
            edge_function(c, a, p) * self.inv_area,
            edge_function(a, b, p) * self.inv_area,
        )
    }

    #[inline]
    fn inside(&self, bary: Vec3) -> bool {
        let b = bary.to_array();
        (0..3).all(|i| b[i] > 0.0 || (b[i] == 0.0 && self.owns[i]))
    }
}

/// Draws indexed triangle lists into a [`Framebuffer`].
#[derive(Debug, Clone)]
pub struct Rasterizer<I: Interpolator = PerspectiveInterpolator> {
    config: RasterConfig,
    interpolator: I,
}

impl Rasterizer<PerspectiveInterpolator> {
    pub fn new(config: RasterConfig) -> Result<Self, ConfigError> {
        Self::with_interpolator(config, PerspectiveInterpolator)
    }
}

impl<I: Interpolator> Rasterizer<I> {
    pub fn with_interpolator(config: RasterConfig, interpolator: I) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, interpolator })
    }

    #[inline]
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    pub fn clear(&self, target: &mut Framebuffer) {
        target.clear(self.config.clear_color, self.config.clear_depth);
    }

    /// Runs `vertex_program` over `vertices`, assembles triangles from
    /// `indices` and shades every covered pixel with `fragment_program`.
    ///
    /// Triangles referencing missing vertices are skipped with a warning.
    pub fn draw<V, F, Ix>(
        &self,
        target: &mut Framebuffer,
        vertex_program: &V,
        vertices: &[V::Vertex],
        indices: &[Ix],
        fragment_program: &F,
    ) -> DrawStats
    where
        V: VertexProgram,
        F: FragmentProgram,
        Ix: Index,
    {
        let mut stats = DrawStats::default();
        let outputs: Vec<VertexOutput> = vertices.iter().map(|v| vertex_program.run(v)).collect();

        if indices.len() % 3 != 0 {
            log::warn!(
                "{:?}: {} trailing indices ignored",
                vertex_program.module(),
                indices.len() % 3
            );
        }

        for tri in indices.chunks_exact(3) {
            stats.triangles += 1;
            let ids = [tri[0].to_usize(), tri[1].to_usize(), tri[2].to_usize()];
            if let Some(&bad) = ids.iter().find(|&&i| i >= outputs.len()) {
                log::warn!("index {bad} out of range ({} vertices)", outputs.len());
                stats.culled += 1;
                continue;
            }

            let projected = [
                ScreenVertex::project(&outputs[ids[0]], target),
                ScreenVertex::project(&outputs[ids[1]], target),
                ScreenVertex::project(&outputs[ids[2]], target),
            ];
            let Some(triangle) = (match projected {
                [Some(a), Some(b), Some(c)] => Triangle::setup([a, b, c]),
                _ => {
                    log::trace!("triangle {ids:?} crosses the eye plane");
                    None
                }
            }) else {
                stats.culled += 1;
                continue;
            };

            let Some(rect) = triangle.bounds().intersect(target.bounds()) else {
                stats.culled += 1;
                continue;
            };

            self.fill(target, &triangle, rect.aligned_to_quads(), fragment_program, &mut stats);
        }

        log::debug!(
            "{:?} -> {:?}: {} triangles ({} culled), {} quads, {} helpers, {} written",
            vertex_program.module(),
            fragment_program.module(),
            stats.triangles,
            stats.culled,
            stats.quads,
            stats.helper_lanes,
            stats.fragments_written,
        );
        stats
    }

    fn fill<F: FragmentProgram>(
        &self,
        target: &mut Framebuffer,
        triangle: &Triangle,
        rect: PixelRect,
        fragment_program: &F,
        stats: &mut DrawStats,
    ) {
        let bounds = target.bounds();
        let blend = fragment_program.blend();
        let inv_w = Vec3::new(triangle.v[0].inv_w, triangle.v[1].inv_w, triangle.v[2].inv_w);
        let z = Vec3::new(triangle.v[0].z, triangle.v[1].z, triangle.v[2].z);

        for qy in (rect.y0..rect.y1).step_by(2) {
            for qx in (rect.x0..rect.x1).step_by(2) {
                let pixels = [(qx, qy), (qx + 1, qy), (qx, qy + 1), (qx + 1, qy + 1)];
                let mut covered = [false; 4];
                let mut fragments = [Fragment::default(); 4];

                for (lane, &(x, y)) in pixels.iter().enumerate() {
                    let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let bary = triangle.barycentric(center);
                    let weights = self.interpolator.weights(bary, inv_w);
                    let uv = triangle.v[0].uv * weights.x
                        + triangle.v[1].uv * weights.y
                        + triangle.v[2].uv * weights.z;
                    let depth = bary.dot(z);
                    fragments[lane] = Fragment {
                        uv,
                        frag_coord: Vec4::new(center.x, center.y, depth, bary.dot(inv_w)),
                    };
                    covered[lane] = bounds.contains(x, y)
                        && triangle.inside(bary)
                        && (0.0..=1.0).contains(&depth);
                }

                let lanes_covered = covered.iter().filter(|&&c| c).count();
                if lanes_covered == 0 {
                    continue;
                }
                stats.quads += 1;
                stats.helper_lanes += 4 - lanes_covered;

                let quad = FragmentQuad {
                    fragments: Quad::new(fragments),
                    covered,
                    derivatives: self.config.derivatives,
                };
                let colors = fragment_program.run(&quad);

                for lane in 0..4 {
                    if !covered[lane] {
                        continue;
                    }
                    let (x, y) = (pixels[lane].0 as u32, pixels[lane].1 as u32);
                    let depth = fragments[lane].frag_coord.z;
                    if self.config.depth_test && depth >= target.depth_at(x, y) {
                        continue;
                    }
                    let dst = target.color_at(x, y);
                    target.set_color(x, y, blend.apply(colors.lanes[lane], dst));
                    if self.config.depth_write {
                        target.set_depth(x, y, depth);
                    }
                    stats.fragments_written += 1;
                }
            }
        }
    }
}

impl Default for Rasterizer<PerspectiveInterpolator> {
    fn default() -> Self {
        Self {
            config: RasterConfig::default(),
            interpolator: PerspectiveInterpolator,
        }
    }
}
