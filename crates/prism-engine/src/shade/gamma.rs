//! Gamma correction: `c^g` per color channel, alpha untouched.

use crate::error::ConfigError;

/// Raises a non-negative channel value to `exponent`.
///
/// Negative inputs produce whatever `powf` yields (NaN for fractional
/// exponents); callers clamp upstream.
#[inline]
pub fn gamma_correct(channel: f32, exponent: f32) -> f32 {
    channel.powf(exponent)
}

/// A validated gamma exponent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gamma(f32);

impl Gamma {
    /// Fixed display curve used by the present pass.
    pub const DISPLAY: Gamma = Gamma(2.2);
    pub const IDENTITY: Gamma = Gamma(1.0);

    pub fn new(exponent: f32) -> Result<Self, ConfigError> {
        if exponent.is_finite() && exponent > 0.0 {
            Ok(Self(exponent))
        } else {
            Err(ConfigError::InvalidGamma(exponent))
        }
    }

    #[inline]
    pub fn exponent(self) -> f32 {
        self.0
    }

    /// The exponent that undoes this one.
    #[inline]
    pub fn inverse(self) -> Gamma {
        Gamma(1.0 / self.0)
    }

    #[inline]
    pub fn apply(self, channel: f32) -> f32 {
        gamma_correct(channel, self.0)
    }
}

impl Default for Gamma {
    fn default() -> Self {
        Self::IDENTITY
    }
}
