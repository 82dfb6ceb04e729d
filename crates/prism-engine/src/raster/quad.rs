//! 2×2 evaluation blocks and screen-space derivatives.
//!
//! Lanes are ordered `[top-left, top-right, bottom-left, bottom-right]`.
//! Derivatives are finite differences between lanes of one quad, the same
//! mechanism GPUs use for `dpdx`/`dpdy`/`fwidth`.

use glam::{Vec2, Vec4};

pub const TOP_LEFT: usize = 0;
pub const TOP_RIGHT: usize = 1;
pub const BOTTOM_LEFT: usize = 2;
pub const BOTTOM_RIGHT: usize = 3;

/// How derivatives are shared across a quad.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DerivativeMode {
    /// One difference per row (x) or column (y).
    #[default]
    Fine,
    /// One difference for the whole quad, taken from the top-left lane.
    Coarse,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad<T> {
    pub lanes: [T; 4],
}

impl<T: Copy> Quad<T> {
    #[inline]
    pub const fn new(lanes: [T; 4]) -> Self {
        Self { lanes }
    }

    #[inline]
    pub fn splat(value: T) -> Self {
        Self { lanes: [value; 4] }
    }

    #[inline]
    pub fn map<U: Copy>(&self, mut f: impl FnMut(T) -> U) -> Quad<U> {
        let [a, b, c, d] = self.lanes;
        Quad::new([f(a), f(b), f(c), f(d)])
    }

    #[inline]
    pub fn zip<U: Copy, R: Copy>(&self, other: &Quad<U>, mut f: impl FnMut(T, U) -> R) -> Quad<R> {
        Quad::new([
            f(self.lanes[0], other.lanes[0]),
            f(self.lanes[1], other.lanes[1]),
            f(self.lanes[2], other.lanes[2]),
            f(self.lanes[3], other.lanes[3]),
        ])
    }
}

impl Quad<f32> {
    /// Rate of change along +X (screen right).
    pub fn dpdx(&self, mode: DerivativeMode) -> Quad<f32> {
        let l = &self.lanes;
        let top = l[TOP_RIGHT] - l[TOP_LEFT];
        match mode {
            DerivativeMode::Fine => {
                let bottom = l[BOTTOM_RIGHT] - l[BOTTOM_LEFT];
                Quad::new([top, top, bottom, bottom])
            }
            DerivativeMode::Coarse => Quad::splat(top),
        }
    }

    /// Rate of change along +Y (screen down).
    pub fn dpdy(&self, mode: DerivativeMode) -> Quad<f32> {
        let l = &self.lanes;
        let left = l[BOTTOM_LEFT] - l[TOP_LEFT];
        match mode {
            DerivativeMode::Fine => {
                let right = l[BOTTOM_RIGHT] - l[TOP_RIGHT];
                Quad::new([left, right, left, right])
            }
            DerivativeMode::Coarse => Quad::splat(left),
        }
    }

    /// `|dpdx| + |dpdy|`.
    pub fn fwidth(&self, mode: DerivativeMode) -> Quad<f32> {
        self.dpdx(mode).zip(&self.dpdy(mode), |dx, dy| dx.abs() + dy.abs())
    }
}

/// Interpolated inputs of one fragment lane.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Fragment {
    pub uv: Vec2,
    /// Pixel-center x/y, NDC depth in z, `1/w` in w (WGSL `@builtin(position)`).
    pub frag_coord: Vec4,
}

/// One 2×2 block handed to a fragment program.
///
/// Helper lanes (outside the primitive) still carry extrapolated inputs so
/// derivatives are defined on every lane; only covered lanes are written.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FragmentQuad {
    pub fragments: Quad<Fragment>,
    pub covered: [bool; 4],
    pub derivatives: DerivativeMode,
}

impl FragmentQuad {
    #[inline]
    pub fn uv(&self) -> Quad<Vec2> {
        self.fragments.map(|f| f.uv)
    }

    /// `fwidth` of an arbitrary per-lane value.
    #[inline]
    pub fn fwidth(&self, values: &Quad<f32>) -> Quad<f32> {
        values.fwidth(self.derivatives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Lanes laid out as pixels of a ramp: value = 3x + 5y.
    fn ramp() -> Quad<f32> {
        Quad::new([0.0, 3.0, 5.0, 8.0])
    }

    #[test]
    fn dpdx_of_linear_ramp_is_constant() {
        assert_eq!(ramp().dpdx(DerivativeMode::Fine), Quad::splat(3.0));
        assert_eq!(ramp().dpdx(DerivativeMode::Coarse), Quad::splat(3.0));
    }

    #[test]
    fn dpdy_of_linear_ramp_is_constant() {
        assert_eq!(ramp().dpdy(DerivativeMode::Fine), Quad::splat(5.0));
        assert_eq!(ramp().dpdy(DerivativeMode::Coarse), Quad::splat(5.0));
    }

    #[test]
    fn fwidth_sums_absolute_differences() {
        let q = Quad::new([0.0, -2.0, 1.0, -1.0]);
        assert_eq!(q.fwidth(DerivativeMode::Fine), Quad::splat(3.0));
    }

    #[test]
    fn fine_differs_per_row_coarse_does_not() {
        let q = Quad::new([0.0, 1.0, 0.0, 4.0]);
        assert_eq!(q.dpdx(DerivativeMode::Fine), Quad::new([1.0, 1.0, 4.0, 4.0]));
        assert_eq!(q.dpdx(DerivativeMode::Coarse), Quad::splat(1.0));
        assert_eq!(q.dpdy(DerivativeMode::Fine), Quad::new([0.0, 3.0, 0.0, 3.0]));
    }

    #[test]
    fn constant_field_has_zero_width() {
        assert_eq!(Quad::splat(0.7).fwidth(DerivativeMode::Fine), Quad::splat(0.0));
    }

    #[test]
    fn fragment_quad_exposes_uv_lanes() {
        let f = |u: f32| Fragment { uv: Vec2::new(u, 0.0), frag_coord: Vec4::ZERO };
        let quad = FragmentQuad {
            fragments: Quad::new([f(0.0), f(0.25), f(0.0), f(0.25)]),
            covered: [true; 4],
            derivatives: DerivativeMode::Fine,
        };
        let widths = quad.fwidth(&quad.uv().map(|p| p.x));
        assert_eq!(widths, Quad::splat(0.25));
    }
}
