use glam::Vec2;

use crate::error::ConfigError;

/// Render target size in physical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the viewport if both dimensions are non-zero.
    pub fn validated(width: u32, height: u32) -> Result<Self, ConfigError> {
        let viewport = Self::new(width, height);
        if viewport.is_valid() {
            Ok(viewport)
        } else {
            Err(ConfigError::InvalidViewport { width, height })
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[inline]
    pub fn size_f32(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Width over height. Callers must check [`is_valid`](Self::is_valid) first.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }

    #[inline]
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Maps NDC (`[-1, 1]`, +Y up) to screen pixels (+Y down).
    #[inline]
    pub fn ndc_to_screen(self, ndc: Vec2) -> Vec2 {
        let size = self.size_f32();
        Vec2::new(
            (ndc.x * 0.5 + 0.5) * size.x,
            (0.5 - ndc.y * 0.5) * size.y,
        )
    }
}
