use crate::paint::Rgba;

/// Output merge for covered fragments.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Overwrite the destination.
    Replace,
    /// Color: `src · src.a + dst · (1 − src.a)`. Alpha: replaced by `src.a`.
    #[default]
    Alpha,
}

impl BlendMode {
    #[inline]
    pub fn apply(self, src: Rgba, dst: Rgba) -> Rgba {
        match self {
            BlendMode::Replace => src,
            BlendMode::Alpha => {
                let a = src.a;
                Rgba::new(
                    src.r * a + dst.r * (1.0 - a),
                    src.g * a + dst.g * (1.0 - a),
                    src.b * a + dst.b * (1.0 - a),
                    a,
                )
            }
        }
    }

    /// Equivalent fixed-function state for a GPU color target.
    pub fn wgpu_state(self) -> Option<wgpu::BlendState> {
        match self {
            BlendMode::Replace => Some(wgpu::BlendState::REPLACE),
            BlendMode::Alpha => Some(wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent::REPLACE,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_alpha_blend_replaces_color() {
        let src = Rgba::new(0.2, 0.4, 0.6, 1.0);
        assert_eq!(BlendMode::Alpha.apply(src, Rgba::WHITE), src);
    }

    #[test]
    fn zero_alpha_keeps_destination_color() {
        let dst = Rgba::new(0.1, 0.2, 0.3, 1.0);
        let out = BlendMode::Alpha.apply(Rgba::new(1.0, 1.0, 1.0, 0.0), dst);
        assert_eq!((out.r, out.g, out.b), (0.1, 0.2, 0.3));
        assert_eq!(out.a, 0.0);
    }

    #[test]
    fn half_alpha_averages() {
        let out = BlendMode::Alpha.apply(Rgba::new(1.0, 0.0, 0.0, 0.5), Rgba::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(out, Rgba::new(0.5, 0.0, 0.5, 0.5));
    }

    #[test]
    fn wgpu_state_uses_src_alpha() {
        let state = BlendMode::Alpha.wgpu_state().unwrap();
        assert_eq!(state.color.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(state.alpha, wgpu::BlendComponent::REPLACE);
    }
}
