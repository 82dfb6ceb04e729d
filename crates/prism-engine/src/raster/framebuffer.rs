use crate::coords::{PixelRect, Viewport};
use crate::error::ConfigError;
use crate::paint::Rgba;

use super::texture::{ColorTexture, DepthTexture, Texture2d};

/// Color + depth render target.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    viewport: Viewport,
    color: Vec<Rgba>,
    depth: Vec<f32>,
}

impl Framebuffer {
    pub fn new(viewport: Viewport) -> Result<Self, ConfigError> {
        if !viewport.is_valid() {
            return Err(ConfigError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let n = viewport.pixel_count();
        Ok(Self {
            viewport,
            color: vec![Rgba::TRANSPARENT; n],
            depth: vec![1.0; n],
        })
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::from_size(self.viewport.width, self.viewport.height)
    }

    pub fn clear(&mut self, color: Rgba, depth: f32) {
        self.color.fill(color);
        self.depth.fill(depth);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.viewport.width as usize + x as usize
    }

    /// Panics if `(x, y)` is outside the viewport.
    #[inline]
    pub fn color_at(&self, x: u32, y: u32) -> Rgba {
        self.color[self.index(x, y)]
    }

    /// Panics if `(x, y)` is outside the viewport.
    #[inline]
    pub fn depth_at(&self, x: u32, y: u32) -> f32 {
        self.depth[self.index(x, y)]
    }

    #[inline]
    pub(crate) fn set_color(&mut self, x: u32, y: u32, color: Rgba) {
        let i = self.index(x, y);
        self.color[i] = color;
    }

    #[inline]
    pub(crate) fn set_depth(&mut self, x: u32, y: u32, depth: f32) {
        let i = self.index(x, y);
        self.depth[i] = depth;
    }

    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.color
    }

    /// Snapshot of the color plane for sampling in a later pass.
    pub fn color_texture(&self) -> ColorTexture {
        Texture2d::new(self.viewport.width, self.viewport.height, self.color.clone())
            .expect("framebuffer planes always match the viewport")
    }

    /// Snapshot of the depth plane for sampling in a later pass.
    pub fn depth_texture(&self) -> DepthTexture {
        Texture2d::new(self.viewport.width, self.viewport.height, self.depth.clone())
            .expect("framebuffer planes always match the viewport")
    }

    /// Packed RGBA8, row-major, top row first.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.color.iter().flat_map(|c| c.to_rgba8()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_cleared_to_far_plane() {
        let fb = Framebuffer::new(Viewport::new(3, 2)).unwrap();
        assert_eq!(fb.depth_at(2, 1), 1.0);
        assert_eq!(fb.color_at(0, 0), Rgba::TRANSPARENT);
    }

    #[test]
    fn rejects_empty_viewport() {
        assert!(Framebuffer::new(Viewport::new(0, 4)).is_err());
    }

    #[test]
    fn clear_fills_both_planes() {
        let mut fb = Framebuffer::new(Viewport::new(2, 2)).unwrap();
        fb.clear(Rgba::WHITE, 0.5);
        assert!(fb.colors().iter().all(|&c| c == Rgba::WHITE));
        assert_eq!(fb.depth_at(1, 1), 0.5);
    }

    #[test]
    fn snapshots_preserve_layout() {
        let mut fb = Framebuffer::new(Viewport::new(2, 2)).unwrap();
        fb.set_color(1, 0, Rgba::BLACK);
        fb.set_depth(0, 1, 0.25);
        assert_eq!(fb.color_texture().load(1, 0), Rgba::BLACK);
        assert_eq!(fb.depth_texture().load(0, 1), 0.25);
        assert_eq!(&fb.to_rgba8()[4..8], &[0, 0, 0, 255]);
    }
}
