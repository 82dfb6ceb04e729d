use bytemuck::{Pod, Zeroable};

use crate::shade::gamma;

/// Linear straight-alpha RGBA color.
///
/// Layout matches a WGSL `vec4<f32>` so the value can be uploaded directly as
/// a material uniform (`fill_color`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Map all 4 channels.
    #[inline(always)]
    pub fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), f(self.a))
    }

    /// Map the RGB channels, do nothing on the alpha channel.
    #[inline(always)]
    pub fn map_rgb(self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), self.a)
    }

    /// Per-channel `c^gamma`, alpha unchanged.
    ///
    /// Channels must be non-negative; clamp first if that is not guaranteed.
    #[inline(always)]
    pub fn apply_gamma(self, exponent: f32) -> Self {
        self.map_rgb(|c| gamma::gamma_correct(c, exponent))
    }

    pub fn linear_to_srgb(self) -> Self {
        self.apply_gamma(gamma::Gamma::DISPLAY.exponent())
    }

    pub fn srgb_to_linear(self) -> Self {
        self.apply_gamma(gamma::Gamma::DISPLAY.inverse().exponent())
    }

    /// Clamps all channels to [0, 1].
    #[inline]
    pub fn clamped(self) -> Self {
        self.map(|c| c.clamp(0.0, 1.0))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        Rgba::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }

    /// Quantizes to 8-bit channels, clamping out-of-range values.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    pub fn from_rgba8(bytes: [u8; 4]) -> Self {
        let f = |b: u8| b as f32 / 255.0;
        Self::new(f(bytes[0]), f(bytes[1]), f(bytes[2]), f(bytes[3]))
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(value: [f32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(value: Rgba) -> Self {
        value.to_array()
    }
}

impl From<glam::Vec4> for Rgba {
    fn from(value: glam::Vec4) -> Self {
        Self::new(value.x, value.y, value.z, value.w)
    }
}

impl From<Rgba> for glam::Vec4 {
    fn from(value: Rgba) -> Self {
        glam::Vec4::new(value.r, value.g, value.b, value.a)
    }
}
