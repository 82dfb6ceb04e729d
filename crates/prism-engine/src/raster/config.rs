use crate::error::ConfigError;
use crate::paint::Rgba;

use super::DerivativeMode;

/// Software rasterizer configuration.
///
/// Mirrors the fixed-function state a host pipeline would set: clear values,
/// depth test/write, and how quad derivatives are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterConfig {
    /// Color used by [`Rasterizer::clear`](super::Rasterizer::clear).
    pub clear_color: Rgba,

    /// Depth used by [`Rasterizer::clear`](super::Rasterizer::clear). Must lie in `[0, 1]`.
    pub clear_depth: f32,

    /// Discard fragments whose depth is not strictly less than the stored one.
    pub depth_test: bool,

    /// Store the depth of written fragments.
    pub depth_write: bool,

    pub derivatives: DerivativeMode,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            clear_color: Rgba::BLACK,
            clear_depth: 1.0,
            depth_test: true,
            depth_write: true,
            derivatives: DerivativeMode::Fine,
        }
    }
}

impl RasterConfig {
    /// Full-screen post passes: no depth interaction.
    pub fn post_process() -> Self {
        Self {
            depth_test: false,
            depth_write: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.clear_depth) {
            return Err(ConfigError::InvalidClearDepth(self.clear_depth));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(RasterConfig::default().validate().is_ok());
        assert!(RasterConfig::post_process().validate().is_ok());
    }

    #[test]
    fn clear_depth_out_of_range_is_rejected() {
        let cfg = RasterConfig { clear_depth: 1.5, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidClearDepth(1.5)));
        let cfg = RasterConfig { clear_depth: f32::NAN, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
