//! Varying interpolation stage.
//!
//! The rasterizer computes screen-space barycentric coordinates; an
//! [`Interpolator`] turns them into attribute weights. Swap the implementation
//! to compare affine and perspective-correct results.

use glam::Vec3;

pub trait Interpolator {
    /// Attribute weights for screen barycentrics `bary` of a triangle whose
    /// vertices have reciprocal clip `w` of `inv_w`. Weights sum to 1.
    fn weights(&self, bary: Vec3, inv_w: Vec3) -> Vec3;
}

/// Affine (screen-linear) interpolation.
#[derive(Debug, Copy, Clone, Default)]
pub struct LinearInterpolator;

impl Interpolator for LinearInterpolator {
    #[inline]
    fn weights(&self, bary: Vec3, _inv_w: Vec3) -> Vec3 {
        bary
    }
}

/// Perspective-correct interpolation, as fixed-function hardware does.
#[derive(Debug, Copy, Clone, Default)]
pub struct PerspectiveInterpolator;

impl Interpolator for PerspectiveInterpolator {
    #[inline]
    fn weights(&self, bary: Vec3, inv_w: Vec3) -> Vec3 {
        let p = bary * inv_w;
        let sum = p.x + p.y + p.z;
        if sum == 0.0 || !sum.is_finite() {
            return bary;
        }
        p / sum
    }
}
