/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Cubic Hermite step between `lo` and `hi`.
///
/// Clamps `x` into `[lo, hi]`, normalizes to `t ∈ [0, 1]` and returns
/// `3t² − 2t³`, matching WGSL `smoothstep`. When `lo == hi` the result is a
/// hard step at the shared edge.
#[inline]
pub fn smoothstep(lo: f32, hi: f32, x: f32) -> f32 {
    if hi == lo {
        return if x < lo { 0.0 } else { 1.0 };
    }
    let t = clamp01((x - lo) / (hi - lo));
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
        assert_abs_diff_eq!(smoothstep(0.0, 1.0, 0.5), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn smoothstep_clamps_outside_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -3.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 7.0), 1.0);
        assert_eq!(smoothstep(-2.0, 2.0, -2.5), 0.0);
    }

    #[test]
    fn smoothstep_is_monotonic_on_unit_interval() {
        let mut prev = smoothstep(0.0, 1.0, 0.0);
        for i in 1..=1000 {
            let v = smoothstep(0.0, 1.0, i as f32 / 1000.0);
            assert!(v >= prev, "decreased at step {i}: {prev} -> {v}");
            prev = v;
        }
    }

    #[test]
    fn smoothstep_matches_hermite_polynomial() {
        let t: f32 = 0.3;
        assert_abs_diff_eq!(smoothstep(0.0, 1.0, t), 3.0 * t * t - 2.0 * t * t * t, epsilon = 1e-7);
        // Rescaled interval normalizes first.
        assert_abs_diff_eq!(smoothstep(2.0, 4.0, 2.6), smoothstep(0.0, 1.0, 0.3), epsilon = 1e-6);
    }

    #[test]
    fn degenerate_edges_are_a_hard_step() {
        assert_eq!(smoothstep(0.5, 0.5, 0.49), 0.0);
        assert_eq!(smoothstep(0.5, 0.5, 0.5), 1.0);
    }
}
