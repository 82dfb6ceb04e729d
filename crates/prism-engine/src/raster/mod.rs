//! CPU software rasterizer.
//!
//! Executes [`crate::program`] shader programs the way a GPU would: triangles
//! are walked in 2×2 quads, varyings are interpolated per lane, and fragment
//! programs see neighboring lanes so they can take derivatives. Used as the
//! reference backend in tests and by the offline studio.

mod blend;
mod config;
mod framebuffer;
mod interpolate;
mod quad;
mod rasterizer;
mod texture;

pub use blend::BlendMode;
pub use config::RasterConfig;
pub use framebuffer::Framebuffer;
pub use interpolate::{Interpolator, LinearInterpolator, PerspectiveInterpolator};
pub use quad::{DerivativeMode, Fragment, FragmentQuad, Quad};
pub use rasterizer::{DrawStats, Rasterizer};
pub use texture::{AddressMode, ColorTexture, DepthTexture, FilterMode, Sampler, Texel, Texture2d};
