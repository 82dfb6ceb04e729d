//! Pixel-space geometry for the software rasterizer.
//!
//! Canonical screen space:
//! - Physical pixels
//! - Origin top-left
//! - +X right, +Y down
//! - Pixel `(x, y)` has its sample point at `(x + 0.5, y + 0.5)`
//!
//! Clip/NDC space follows wgpu: +Y up, depth in `[0, 1]`.

mod rect;
mod viewport;

pub use rect::PixelRect;
pub use viewport::Viewport;
