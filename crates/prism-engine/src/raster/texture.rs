//! Read-only CPU textures and samplers.

use glam::Vec2;

use crate::error::ConfigError;
use crate::paint::Rgba;

/// A texel type that supports bilinear filtering.
pub trait Texel: Copy + Default {
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Texel for f32 {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Texel for Rgba {
    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        Rgba::lerp(self, other, t)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum AddressMode {
    #[default]
    ClampToEdge,
    Repeat,
    MirrorRepeat,
}

impl AddressMode {
    /// Resolves a possibly out-of-range texel index into `[0, size)`.
    /// An empty axis resolves to 0.
    #[inline]
    pub(crate) fn resolve(self, index: i32, size: u32) -> u32 {
        let size = size.clamp(1, i32::MAX as u32 / 2) as i32;
        let resolved = match self {
            AddressMode::ClampToEdge => index.clamp(0, size - 1),
            AddressMode::Repeat => index.rem_euclid(size),
            AddressMode::MirrorRepeat => {
                let m = index.rem_euclid(size * 2);
                if m >= size { size * 2 - 1 - m } else { m }
            }
        };
        resolved as u32
    }
}

impl From<AddressMode> for wgpu::AddressMode {
    fn from(value: AddressMode) -> Self {
        match value {
            AddressMode::ClampToEdge => wgpu::AddressMode::ClampToEdge,
            AddressMode::Repeat => wgpu::AddressMode::Repeat,
            AddressMode::MirrorRepeat => wgpu::AddressMode::MirrorRepeat,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Nearest,
    Linear,
}

impl From<FilterMode> for wgpu::FilterMode {
    fn from(value: FilterMode) -> Self {
        match value {
            FilterMode::Nearest => wgpu::FilterMode::Nearest,
            FilterMode::Linear => wgpu::FilterMode::Linear,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Sampler {
    pub address_mode: AddressMode,
    pub filter: FilterMode,
}

impl Sampler {
    pub const fn new(address_mode: AddressMode, filter: FilterMode) -> Self {
        Self { address_mode, filter }
    }

    pub const fn nearest_clamp() -> Self {
        Self::new(AddressMode::ClampToEdge, FilterMode::Nearest)
    }

    pub const fn linear_clamp() -> Self {
        Self::new(AddressMode::ClampToEdge, FilterMode::Linear)
    }

    /// Equivalent `wgpu` descriptor (same mode on all axes and filters).
    pub fn descriptor(&self) -> wgpu::SamplerDescriptor<'static> {
        let address_mode = self.address_mode.into();
        let filter = self.filter.into();
        wgpu::SamplerDescriptor {
            label: Some("prism sampler"),
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: filter,
            min_filter: filter,
            ..Default::default()
        }
    }
}

/// Row-major 2D image, row 0 at the top (`v = 0`).
#[derive(Debug, Clone, PartialEq)]
pub struct Texture2d<T: Texel> {
    width: u32,
    height: u32,
    texels: Vec<T>,
}

pub type ColorTexture = Texture2d<Rgba>;
pub type DepthTexture = Texture2d<f32>;

impl<T: Texel> Texture2d<T> {
    pub fn new(width: u32, height: u32, texels: Vec<T>) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 || texels.len() != width as usize * height as usize {
            return Err(ConfigError::TextureSizeMismatch {
                width,
                height,
                actual: texels.len(),
            });
        }
        Ok(Self { width, height, texels })
    }

    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> T,
    ) -> Result<Self, ConfigError> {
        let mut texels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                texels.push(f(x, y));
            }
        }
        Self::new(width, height, texels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn texels(&self) -> &[T] {
        &self.texels
    }

    /// Texel fetch with edge clamping (WGSL `textureLoad` on clamped coords).
    #[inline]
    pub fn load(&self, x: i32, y: i32) -> T {
        let x = x.clamp(0, self.width as i32 - 1) as usize;
        let y = y.clamp(0, self.height as i32 - 1) as usize;
        self.texels[y * self.width as usize + x]
    }

    /// Fetches the texel under `uv` without filtering.
    ///
    /// `uv · size` truncated toward zero, then clamped, as the WGSL post
    /// shaders do for depth.
    #[inline]
    pub fn load_uv(&self, uv: Vec2) -> T {
        let x = (uv.x * self.width as f32) as i32;
        let y = (uv.y * self.height as f32) as i32;
        self.load(x, y)
    }

    #[inline]
    fn fetch(&self, sampler: &Sampler, x: i32, y: i32) -> T {
        let x = sampler.address_mode.resolve(x, self.width) as usize;
        let y = sampler.address_mode.resolve(y, self.height) as usize;
        self.texels[y * self.width as usize + x]
    }

    /// Filtered lookup at normalized coordinates.
    pub fn sample(&self, sampler: &Sampler, uv: Vec2) -> T {
        let u = uv.x * self.width as f32;
        let v = uv.y * self.height as f32;
        match sampler.filter {
            FilterMode::Nearest => self.fetch(sampler, u.floor() as i32, v.floor() as i32),
            FilterMode::Linear => {
                let u = u - 0.5;
                let v = v - 0.5;
                let x0 = u.floor();
                let y0 = v.floor();
                let fx = u - x0;
                let fy = v - y0;
                let (x0, y0) = (x0 as i32, y0 as i32);
                let top = self.fetch(sampler, x0, y0).lerp(self.fetch(sampler, x0 + 1, y0), fx);
                let bottom = self
                    .fetch(sampler, x0, y0 + 1)
                    .lerp(self.fetch(sampler, x0 + 1, y0 + 1), fx);
                top.lerp(bottom, fy)
            }
        }
    }
}
