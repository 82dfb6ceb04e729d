use glam::{Mat4, Vec3};

use crate::coords::Viewport;
use crate::error::ConfigError;
use crate::shade::DepthRange;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraDirection {
    LookAt(Vec3),
    LookTo(Vec3),
}

/// Perspective or orthographic camera.
///
/// Right-handed, `[0, 1]` clip depth (wgpu convention).
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub up: Vec3,
    pub direction: CameraDirection,
    /// Vertical field of view in radians. `0` selects an orthographic
    /// projection sized to the viewport in pixels.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(
        position: Vec3,
        up: Vec3,
        direction: CameraDirection,
        fov: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self { position, up, direction, fov, near, far }
    }

    #[inline]
    pub fn is_orthographic(&self) -> bool {
        self.fov == 0.0
    }

    pub fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        let size = viewport.size_f32();
        if self.is_orthographic() {
            Mat4::orthographic_rh(
                -size.x / 2.0,
                size.x / 2.0,
                -size.y / 2.0,
                size.y / 2.0,
                self.near,
                self.far,
            )
        } else {
            Mat4::perspective_rh(self.fov, viewport.aspect(), self.near, self.far)
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        match self.direction {
            CameraDirection::LookAt(target) => Mat4::look_at_rh(self.position, target, self.up),
            CameraDirection::LookTo(direction) => {
                Mat4::look_to_rh(self.position, direction, self.up)
            }
        }
    }

    /// Combines an object's model matrix with this camera's view.
    #[inline]
    pub fn model_view(&self, model: Mat4) -> Mat4 {
        self.view_matrix() * model
    }

    /// Near/far planes validated for depth linearization.
    pub fn depth_range(&self) -> Result<DepthRange, ConfigError> {
        DepthRange::new(self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn perspective() -> Camera {
        Camera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::Y,
            CameraDirection::LookAt(Vec3::ZERO),
            70f32.to_radians(),
            0.1,
            100.0,
        )
    }

    #[test]
    fn look_at_maps_target_onto_view_axis() {
        let view = perspective().view_matrix();
        let p = view.transform_point3(Vec3::ZERO);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.z, -5.0, epsilon = 1e-5);
    }

    #[test]
    fn look_to_matches_equivalent_look_at() {
        let mut cam = perspective();
        let a = cam.view_matrix();
        cam.direction = CameraDirection::LookTo(Vec3::new(0.0, 0.0, -1.0));
        let b = cam.view_matrix();
        assert!(a.abs_diff_eq(b, 1e-5));
    }

    #[test]
    fn perspective_depth_spans_zero_to_one() {
        let cam = perspective();
        let proj = cam.projection_matrix(Viewport::new(100, 100));
        let near = proj.project_point3(Vec3::new(0.0, 0.0, -0.1));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -100.0));
        assert_abs_diff_eq!(near.z, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(far.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn zero_fov_is_orthographic_in_pixels() {
        let mut cam = perspective();
        cam.fov = 0.0;
        let proj = cam.projection_matrix(Viewport::new(200, 100));
        let edge = proj.project_point3(Vec3::new(100.0, 50.0, -1.0));
        assert_abs_diff_eq!(edge.x, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(edge.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn depth_range_validates_planes() {
        assert!(perspective().depth_range().is_ok());
        let mut cam = perspective();
        cam.far = cam.near;
        assert!(matches!(
            cam.depth_range(),
            Err(ConfigError::DegenerateDepthRange { .. })
        ));
    }
}
