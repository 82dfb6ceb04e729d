//! Demo scene: a textured quad and a filled cube orbited by the camera, over
//! an SDF disc on the ground.

use std::sync::Arc;

use anyhow::{Context, Result};
use glam::{Mat4, Vec2, Vec3};

use prism_engine::camera::{Camera, CameraDirection};
use prism_engine::coords::Viewport;
use prism_engine::mesh::{CUBE_INDICES, CUBE_VERTICES, QUAD_INDICES, QUAD_VERTICES};
use prism_engine::paint::Rgba;
use prism_engine::program::{
    DepthEdge, MeshTransform, Present, QuadTransform, ScreenPassthrough, SdfCircleFill, Textured,
    UniformFill,
};
use prism_engine::raster::{
    ColorTexture, DerivativeMode, Framebuffer, RasterConfig, Rasterizer, Sampler, Texture2d,
};
use prism_engine::shade::{EdgePreset, SdfCircle};

const ORBIT_RADIUS: f32 = 400.0;
const ORBIT_HEIGHT: f32 = 150.0;
const OBJECT_SIZE: f32 = 100.0;

const CLEAR_COLOR: Rgba = Rgba::new(0.08, 0.08, 0.1, 1.0);
const CUBE_COLOR: Rgba = Rgba::new(0.7, 0.4, 1.0, 1.0);
const GROUND_COLOR: Rgba = Rgba::new(0.5, 0.5, 0.5, 1.0);
const STATUS_COLOR: Rgba = Rgba::new(0.2, 0.9, 0.3, 1.0);

pub struct SceneOptions {
    pub viewport: Viewport,
    /// Orbit angle in degrees.
    pub angle: f32,
    /// `None` skips the edge pass.
    pub edge: Option<EdgePreset>,
    pub derivatives: DerivativeMode,
}

pub struct Scene {
    texture: Arc<ColorTexture>,
}

impl Scene {
    pub fn new(texture: ColorTexture) -> Self {
        Self { texture: Arc::new(texture) }
    }

    /// 256×256 checkerboard, 8 cells across.
    pub fn checkerboard() -> Result<ColorTexture> {
        let light = Rgba::new(0.95, 0.85, 0.6, 1.0);
        let dark = Rgba::new(0.2, 0.35, 0.6, 1.0);
        Texture2d::from_fn(256, 256, |x, y| if (x / 32 + y / 32) % 2 == 0 { light } else { dark })
            .context("building checkerboard texture")
    }

    fn camera(angle: f32) -> Camera {
        let t = angle.to_radians();
        Camera::new(
            Vec3::new(t.cos() * ORBIT_RADIUS, ORBIT_HEIGHT, t.sin() * ORBIT_RADIUS),
            Vec3::Y,
            CameraDirection::LookAt(Vec3::ZERO),
            70f32.to_radians(),
            1.0,
            100_000.0,
        )
    }

    pub fn render(&self, options: &SceneOptions) -> Result<Framebuffer> {
        let viewport = options.viewport;
        let camera = Self::camera(options.angle);

        let staging = self.draw_objects(&camera, options)?;
        let edged = match options.edge {
            Some(preset) => {
                let pass = DepthEdge {
                    color: Arc::new(staging.color_texture()),
                    depth: Arc::new(staging.depth_texture()),
                    sampler: Sampler::nearest_clamp(),
                    preset,
                    range: camera.depth_range().context("camera depth range")?,
                };
                log::info!("edge pass: {}", preset.name());
                post_pass(viewport, options.derivatives, &pass)?
            }
            None => staging,
        };

        let present = Present {
            source: Arc::new(edged.color_texture()),
            sampler: Sampler::linear_clamp(),
        };
        let mut out = post_pass(viewport, options.derivatives, &present)?;
        draw_status_dot(&mut out, options.derivatives)?;
        Ok(out)
    }

    fn draw_objects(&self, camera: &Camera, options: &SceneOptions) -> Result<Framebuffer> {
        let viewport = options.viewport;
        let mut target = Framebuffer::new(viewport)?;
        let rasterizer = Rasterizer::new(RasterConfig {
            clear_color: CLEAR_COLOR,
            derivatives: options.derivatives,
            ..Default::default()
        })?;
        rasterizer.clear(&mut target);

        let half = OBJECT_SIZE / 2.0;

        let quad_model = Mat4::from_translation(Vec3::new(-half, -half, 0.0))
            * Mat4::from_scale(Vec3::splat(OBJECT_SIZE));
        rasterizer.draw(
            &mut target,
            &QuadTransform::from_camera(camera, viewport, quad_model),
            &QUAD_VERTICES,
            &QUAD_INDICES,
            &Textured::new(self.texture.clone(), Sampler::nearest_clamp()),
        );

        let cube_model = Mat4::from_translation(Vec3::new(240.0 - half, -half, -half))
            * Mat4::from_rotation_x(45f32.to_radians())
            * Mat4::from_rotation_y(30f32.to_radians())
            * Mat4::from_scale(Vec3::splat(OBJECT_SIZE));
        rasterizer.draw(
            &mut target,
            &MeshTransform::from_camera(camera, viewport, cube_model),
            &CUBE_VERTICES,
            &CUBE_INDICES,
            &UniformFill::new(CUBE_COLOR),
        );

        // Blended edges write depth too, so the disc goes last.
        let ground_model = Mat4::from_translation(Vec3::new(-200.0, -80.0, 200.0))
            * Mat4::from_rotation_x(-90f32.to_radians())
            * Mat4::from_scale(Vec3::splat(400.0));
        let disc = SdfCircle::new(Vec2::splat(0.5), 0.45, GROUND_COLOR)?;
        rasterizer.draw(
            &mut target,
            &QuadTransform::from_camera(camera, viewport, ground_model),
            &QUAD_VERTICES,
            &QUAD_INDICES,
            &SdfCircleFill::new(disc),
        );

        Ok(target)
    }
}

fn post_pass<F: prism_engine::program::FragmentProgram>(
    viewport: Viewport,
    derivatives: DerivativeMode,
    program: &F,
) -> Result<Framebuffer> {
    let mut target = Framebuffer::new(viewport)?;
    let rasterizer = Rasterizer::new(RasterConfig { derivatives, ..RasterConfig::post_process() })?;
    rasterizer.clear(&mut target);
    rasterizer.draw(
        &mut target,
        &QuadTransform::fullscreen(),
        &QUAD_VERTICES,
        &QUAD_INDICES,
        program,
    );
    Ok(target)
}

/// Small dot in the top-right corner, drawn in clip space.
fn draw_status_dot(target: &mut Framebuffer, derivatives: DerivativeMode) -> Result<()> {
    let rasterizer = Rasterizer::new(RasterConfig { derivatives, ..RasterConfig::post_process() })?;
    let dot = SdfCircle::new(Vec2::new(0.9, 0.1), 0.04, STATUS_COLOR)?;
    rasterizer.draw(
        target,
        &ScreenPassthrough,
        &QUAD_VERTICES,
        &QUAD_INDICES,
        &SdfCircleFill::new(dot),
    );
    Ok(())
}
