//! Depth-buffer linearization.

use crate::error::ConfigError;

/// Near/far clip planes with `0 < near < far`.
///
/// Construction is the only place the `near == far` division by zero can be
/// introduced, so it is rejected here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthRange {
    near: f32,
    far: f32,
}

impl DepthRange {
    pub fn new(near: f32, far: f32) -> Result<Self, ConfigError> {
        if near == far {
            return Err(ConfigError::DegenerateDepthRange { near, far });
        }
        if !(near.is_finite() && far.is_finite()) || near <= 0.0 || far < near {
            return Err(ConfigError::InvalidDepthRange { near, far });
        }
        Ok(Self { near, far })
    }

    #[inline]
    pub fn near(self) -> f32 {
        self.near
    }

    #[inline]
    pub fn far(self) -> f32 {
        self.far
    }

    /// `far - near`.
    #[inline]
    pub fn span(self) -> f32 {
        self.far - self.near
    }

    /// Converts a hardware depth sample in `[0, 1]` to eye-space distance.
    ///
    /// `z = 2d - 1`, then `2·n·f / (f + n - z·(f - n))`. Returns `near` at
    /// `d = 0` and `far` at `d = 1`.
    #[inline]
    pub fn linearize(self, depth: f32) -> f32 {
        let (n, f) = (self.near, self.far);
        let z = depth * 2.0 - 1.0;
        (2.0 * n * f) / (f + n - z * (f - n))
    }
}
