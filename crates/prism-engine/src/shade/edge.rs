//! Depth-derivative edge darkening.
//!
//! Pixels where depth changes quickly between neighbors (silhouettes, contact
//! points) get darker. The two presets were tuned independently and are kept
//! as separate, selectable curves rather than merged into one formula.

use crate::paint::Rgba;

use super::DepthRange;

/// Gain applied to the raw depth derivative before the square root.
pub const RAW_DEPTH_GAIN: f32 = 1000.0;
/// Gain applied to the normalized linear depth derivative.
pub const LINEAR_DEPTH_GAIN: f32 = 40.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EdgePreset {
    /// `sqrt(fwidth(d) · 1000)` over the raw depth sample.
    #[default]
    RawDepth,
    /// `fwidth(linearize(d)) / (far − near) · 40` over linearized depth.
    LinearDepth,
}

impl EdgePreset {
    /// The per-pixel value whose derivative drives the shade.
    #[inline]
    pub fn field(self, raw_depth: f32, range: DepthRange) -> f32 {
        match self {
            EdgePreset::RawDepth => raw_depth,
            EdgePreset::LinearDepth => range.linearize(raw_depth),
        }
    }

    /// Maps the derivative magnitude of [`field`](Self::field) to a shade.
    ///
    /// Monotonically non-decreasing in `derivative`.
    #[inline]
    pub fn shade(self, derivative: f32, range: DepthRange) -> f32 {
        match self {
            EdgePreset::RawDepth => (derivative * RAW_DEPTH_GAIN).powf(0.5),
            EdgePreset::LinearDepth => derivative / range.span() * LINEAR_DEPTH_GAIN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EdgePreset::RawDepth => "raw-depth",
            EdgePreset::LinearDepth => "linear-depth",
        }
    }
}

/// Subtracts `shade` from RGB, alpha unchanged.
#[inline]
pub fn apply(color: Rgba, shade: f32) -> Rgba {
    color.map_rgb(|c| c - shade)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn range() -> DepthRange {
        DepthRange::new(1.0, 101.0).unwrap()
    }

    #[test]
    fn flat_depth_leaves_color_untouched() {
        let c = Rgba::new(0.6, 0.5, 0.4, 1.0);
        for preset in [EdgePreset::RawDepth, EdgePreset::LinearDepth] {
            let shade = preset.shade(0.0, range());
            assert_eq!(shade, 0.0);
            assert_eq!(apply(c, shade), c);
        }
    }

    #[test]
    fn raw_preset_constants() {
        // 0.001 · 1000 = 1 → sqrt = 1
        assert_abs_diff_eq!(EdgePreset::RawDepth.shade(0.001, range()), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(EdgePreset::RawDepth.shade(0.004, range()), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn linear_preset_normalizes_by_span() {
        // span = 100 → 5 / 100 · 40 = 2
        assert_abs_diff_eq!(EdgePreset::LinearDepth.shade(5.0, range()), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn shade_is_monotonic_in_derivative() {
        for preset in [EdgePreset::RawDepth, EdgePreset::LinearDepth] {
            let mut prev = preset.shade(0.0, range());
            for i in 1..=100 {
                let v = preset.shade(i as f32 * 0.01, range());
                assert!(v >= prev, "{} decreased", preset.name());
                prev = v;
            }
        }
    }

    #[test]
    fn apply_keeps_alpha() {
        let out = apply(Rgba::new(0.5, 0.5, 0.5, 0.25), 0.2);
        assert_abs_diff_eq!(out.r, 0.3, epsilon = 1e-6);
        assert_eq!(out.a, 0.25);
    }

    #[test]
    fn field_selects_raw_or_linear() {
        assert_eq!(EdgePreset::RawDepth.field(0.5, range()), 0.5);
        assert_abs_diff_eq!(
            EdgePreset::LinearDepth.field(1.0, range()),
            101.0,
            epsilon = 1e-3
        );
    }
}
