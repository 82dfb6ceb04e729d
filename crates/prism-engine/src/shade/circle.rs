//! Antialiased signed-distance circle.

use glam::Vec2;

use crate::error::ConfigError;
use crate::paint::Rgba;

use super::smoothstep;

/// Circle fill in UV space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SdfCircle {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Rgba,
}

impl SdfCircle {
    pub fn new(center: Vec2, radius: f32, fill: Rgba) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        Ok(Self { center, radius, fill })
    }

    /// `|p − center| − radius`: negative inside, positive outside.
    #[inline]
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        p.distance(self.center) - self.radius
    }

    /// Smooth 0→1 coverage centered on the boundary.
    ///
    /// `fwidth_x` is the screen-space derivative of `p.x`, used as one pixel's
    /// footprint in UV units. The transition band is ±½ of that footprint.
    #[inline]
    pub fn coverage(&self, p: Vec2, fwidth_x: f32) -> f32 {
        let aaf_half = 0.5 * fwidth_x;
        smoothstep(-aaf_half, aaf_half, -self.signed_distance(p))
    }

    /// `(fill.rgb, fill.a · coverage)`.
    #[inline]
    pub fn shade(&self, p: Vec2, fwidth_x: f32) -> Rgba {
        let alpha = self.coverage(p, fwidth_x);
        self.fill.with_alpha(self.fill.a * alpha)
    }
}

/// Closed-form `fwidth(uv.x)` for a UV axis spanning `pixels_across` pixels
/// without rotation. Substitute for the quad finite difference when UVs are
/// known to be screen-aligned.
#[inline]
pub fn analytic_footprint(uv_extent: f32, pixels_across: f32) -> f32 {
    if pixels_across <= 0.0 {
        return uv_extent.abs();
    }
    (uv_extent / pixels_across).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn circle() -> SdfCircle {
        SdfCircle::new(Vec2::splat(0.5), 0.2, Rgba::new(1.0, 0.5, 0.25, 1.0)).unwrap()
    }

    const PIXEL: f32 = 1.0 / 256.0;

    #[test]
    fn boundary_is_half_covered() {
        let p = Vec2::new(0.7, 0.5);
        assert_abs_diff_eq!(circle().signed_distance(p), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(circle().coverage(p, PIXEL), 0.5, epsilon = 1e-3);
    }

    #[test]
    fn center_is_fully_covered() {
        assert_eq!(circle().coverage(Vec2::splat(0.5), PIXEL), 1.0);
    }

    #[test]
    fn far_outside_is_uncovered() {
        assert_eq!(circle().coverage(Vec2::new(1.0, 0.5), PIXEL), 0.0);
        assert_eq!(circle().coverage(Vec2::new(0.5, 0.0), PIXEL), 0.0);
    }

    #[test]
    fn shade_scales_fill_alpha_only() {
        let c = SdfCircle::new(Vec2::ZERO, 1.0, Rgba::new(0.2, 0.3, 0.4, 0.5)).unwrap();
        let out = c.shade(Vec2::ZERO, PIXEL);
        assert_eq!(out, Rgba::new(0.2, 0.3, 0.4, 0.5));
        let out = c.shade(Vec2::new(5.0, 0.0), PIXEL);
        assert_eq!(out, Rgba::new(0.2, 0.3, 0.4, 0.0));
    }

    #[test]
    fn wider_footprint_softens_edge() {
        let p = Vec2::new(0.5 + 0.2 - PIXEL, 0.5);
        let sharp = circle().coverage(p, PIXEL);
        let soft = circle().coverage(p, PIXEL * 8.0);
        assert!(sharp > soft);
        assert!(soft > 0.5);
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(SdfCircle::new(Vec2::ZERO, -0.1, Rgba::WHITE).is_err());
        assert!(SdfCircle::new(Vec2::ZERO, f32::NAN, Rgba::WHITE).is_err());
    }

    #[test]
    fn analytic_footprint_is_uv_per_pixel() {
        assert_eq!(analytic_footprint(1.0, 256.0), PIXEL);
    }
}
